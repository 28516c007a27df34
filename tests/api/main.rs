mod checkout;
mod health_check;
mod helpers;
mod lead;
mod onboarding;
mod waitlist_onboarding;
