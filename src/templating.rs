use anyhow::Context;
use askama::Template;
use chrono::{Datelike, Utc};

use crate::configuration::ApplicationSettings;
use crate::domain::{CheckoutIntake, OnboardingIntake, WaitlistLead, WaitlistOnboardingIntake};
use crate::email_client::OutgoingEmail;

pub struct Row {
    pub label: String,
    pub value: String,
}

impl Row {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_owned(),
            value: value.to_owned(),
        }
    }
}

pub struct Section {
    pub heading: &'static str,
    pub rows: Vec<Row>,
}

// Askama escapes every interpolated value in the .html templates, so
// user-supplied text cannot inject markup into the operational inbox.
#[derive(Template)]
#[template(path = "emails/notification.html")]
struct NotificationHtml<'a> {
    title: &'a str,
    subtitle: &'a str,
    sections: &'a [Section],
    submitted_at: &'a str,
}

#[derive(Template)]
#[template(path = "emails/welcome_lead.html")]
struct LeadWelcomeHtml<'a> {
    first_name: &'a str,
    pharmacy_name: &'a str,
    onboarding_url: &'a str,
    checkout_url: &'a str,
    year: i32,
}

#[derive(Template)]
#[template(path = "emails/welcome_founder.html")]
struct FounderWelcomeHtml<'a> {
    first_name: &'a str,
    pharmacy_name: &'a str,
    setup_url: &'a str,
    year: i32,
}

#[derive(Template)]
#[template(path = "emails/preferences_saved.html")]
struct PreferencesSavedHtml<'a> {
    store_name: &'a str,
    full_domain: &'a str,
    template_name: &'a str,
    services: &'a str,
    year: i32,
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

fn current_year() -> i32 {
    Utc::now().year()
}

fn render_notification(
    subject: String,
    title: &str,
    subtitle: &str,
    sections: &[Section],
    text: String,
    submitted_at: &str,
) -> Result<OutgoingEmail, anyhow::Error> {
    let html = NotificationHtml {
        title,
        subtitle,
        sections,
        submitted_at,
    }
    .render()
    .context("Failed to render the notification email.")?;

    Ok(OutgoingEmail {
        subject,
        text,
        html,
    })
}

/// Team-facing summary of a new waitlist lead.
pub fn lead_notification(
    lead: &WaitlistLead,
    submitted_at: &str,
) -> Result<OutgoingEmail, anyhow::Error> {
    let text = [
        "New Waitlist Lead".to_string(),
        String::new(),
        format!("Pharmacy: {}", lead.pharmacy_name),
        format!("Contact: {}", lead.contact_name),
        format!("Email: {}", lead.email),
        format!("Phone: {}", or_na(&lead.phone)),
        format!("State: {}", lead.state),
        format!("Locations: {}", lead.locations),
        format!("Challenge: {}", lead.challenge),
        String::new(),
        format!("Submitted: {submitted_at}"),
    ]
    .join("\n");

    let sections = [Section {
        heading: "Lead Details",
        rows: vec![
            Row::new("Pharmacy", &lead.pharmacy_name),
            Row::new("Contact", &lead.contact_name),
            Row::new("Email", lead.email.as_ref()),
            Row::new("Phone", or_na(&lead.phone)),
            Row::new("State", &lead.state),
            Row::new("Locations", &lead.locations),
            Row::new("Challenge", &lead.challenge),
        ],
    }];

    render_notification(
        format!("New Lead: {} ({})", lead.pharmacy_name, lead.state),
        "New Waitlist Lead",
        "A pharmacy just joined the waitlist.",
        &sections,
        text,
        submitted_at,
    )
}

/// Welcome email to the person who joined the waitlist.
pub fn lead_welcome(
    lead: &WaitlistLead,
    application: &ApplicationSettings,
) -> Result<OutgoingEmail, anyhow::Error> {
    let onboarding_url = format!("{}/waitlist/onboarding", application.base_url);
    let checkout_url = format!("{}/checkout", application.base_url);

    let text = [
        format!("Hi {},", lead.first_name()),
        String::new(),
        format!(
            "Thank you for joining the EcoPharma waitlist! We're thrilled to have {} on board.",
            lead.pharmacy_name
        ),
        String::new(),
        "Here's what happens next:".to_string(),
        String::new(),
        "1. You're now on our VIP early access list".to_string(),
        "2. We'll notify you as soon as your spot is ready".to_string(),
        "3. You'll get a personalized onboarding walkthrough".to_string(),
        String::new(),
        "While you wait, set up your store preferences so we can launch faster:".to_string(),
        format!("  {onboarding_url}"),
        String::new(),
        "Reply to this email with any questions - we read every message.".to_string(),
        String::new(),
        "Want to skip the wait? Claim lifetime access for a one-time $999 payment:".to_string(),
        format!("  {checkout_url}"),
        String::new(),
        "Welcome aboard!".to_string(),
        String::new(),
        "The EcoPharma Team".to_string(),
        application.base_url.clone(),
    ]
    .join("\n");

    let html = LeadWelcomeHtml {
        first_name: lead.first_name(),
        pharmacy_name: &lead.pharmacy_name,
        onboarding_url: &onboarding_url,
        checkout_url: &checkout_url,
        year: current_year(),
    }
    .render()
    .context("Failed to render the welcome email.")?;

    Ok(OutgoingEmail {
        subject: format!(
            "Welcome to EcoPharma, {}! You're on the list.",
            lead.first_name()
        ),
        text,
        html,
    })
}

/// Team-facing summary of a pre-payment lifetime access intake.
pub fn checkout_notification(
    intake: &CheckoutIntake,
    submitted_at: &str,
) -> Result<OutgoingEmail, anyhow::Error> {
    let text = [
        "New Lifetime Access - Pre-Payment Info".to_string(),
        String::new(),
        "=== About the Owner ===".to_string(),
        format!("Name: {}", intake.owner_name),
        format!("Email: {}", intake.email),
        format!("Phone: {}", or_na(&intake.phone)),
        format!("Role: {}", intake.role),
        String::new(),
        "=== About the Pharmacy ===".to_string(),
        format!("Pharmacy: {}", intake.pharmacy_name),
        format!("Type: {}", intake.pharmacy_type),
        format!("NPI: {}", or_na(&intake.npi_number)),
        format!("State: {}", intake.state),
        format!("Locations: {}", intake.locations),
        format!("Current Website: {}", or_na(&intake.current_website)),
        String::new(),
        format!("Submitted: {submitted_at}"),
    ]
    .join("\n");

    let sections = [
        Section {
            heading: "About the Owner",
            rows: vec![
                Row::new("Name", &intake.owner_name),
                Row::new("Email", intake.email.as_ref()),
                Row::new("Phone", or_na(&intake.phone)),
                Row::new("Role", &intake.role),
            ],
        },
        Section {
            heading: "About the Pharmacy",
            rows: vec![
                Row::new("Pharmacy", &intake.pharmacy_name),
                Row::new("Type", &intake.pharmacy_type),
                Row::new("NPI Number", or_na(&intake.npi_number)),
                Row::new("State", &intake.state),
                Row::new("Locations", &intake.locations),
                Row::new("Current Website", or_na(&intake.current_website)),
            ],
        },
    ];

    render_notification(
        format!(
            "Lifetime Lead: {} — {}",
            intake.pharmacy_name, intake.owner_name
        ),
        "New Lifetime Access Lead",
        "Pre-payment info — redirecting to payment next.",
        &sections,
        text,
        submitted_at,
    )
}

/// Welcome email to a founder member who claimed lifetime access.
pub fn founder_welcome(
    intake: &CheckoutIntake,
    application: &ApplicationSettings,
) -> Result<OutgoingEmail, anyhow::Error> {
    let setup_url = format!("{}/onboarding", application.base_url);

    let text = [
        format!("Hi {},", intake.first_name()),
        String::new(),
        format!(
            "Thank you for joining EcoPharma! Your account for {} is ready.",
            intake.pharmacy_name
        ),
        String::new(),
        "Here's how to get started:".to_string(),
        String::new(),
        "1. Complete your store setup".to_string(),
        format!("   Visit {setup_url} to configure your online pharmacy store."),
        String::new(),
        "2. We'll build your store".to_string(),
        "   Our team will set up your customized storefront based on your preferences. This takes 24-48 hours.".to_string(),
        String::new(),
        "3. Personalized onboarding call".to_string(),
        "   A dedicated team member will schedule a 1-on-1 walkthrough to get you started.".to_string(),
        String::new(),
        "4. Go live!".to_string(),
        "   Once everything looks great, we'll help you launch your store.".to_string(),
        String::new(),
        "What's included in your plan:".to_string(),
        "- All current and future platform features".to_string(),
        "- Priority support from our team".to_string(),
        "- Direct access for feedback and feature requests".to_string(),
        String::new(),
        "If you have any questions, reply to this email - we read and respond to every message.".to_string(),
        String::new(),
        "Welcome aboard!".to_string(),
        String::new(),
        "The EcoPharma Team".to_string(),
        application.base_url.clone(),
    ]
    .join("\n");

    let html = FounderWelcomeHtml {
        first_name: intake.first_name(),
        pharmacy_name: &intake.pharmacy_name,
        setup_url: &setup_url,
        year: current_year(),
    }
    .render()
    .context("Failed to render the founder welcome email.")?;

    Ok(OutgoingEmail {
        subject: format!(
            "Welcome to EcoPharma, {} — here's how to get started",
            intake.first_name()
        ),
        text,
        html,
    })
}

/// Team-facing summary of a post-payment onboarding submission.
pub fn onboarding_notification(
    intake: &OnboardingIntake,
    submitted_at: &str,
) -> Result<OutgoingEmail, anyhow::Error> {
    let full_address = format!(
        "{}, {}, {} {}",
        intake.address, intake.city, intake.state, intake.zip
    );
    let services = intake.services_offered.join(", ");

    let text = [
        "New Onboarding Submission (Post-Payment)".to_string(),
        String::new(),
        "=== Business Details ===".to_string(),
        format!("Legal Name: {}", intake.business_legal_name),
        format!("Address: {full_address}"),
        format!("Phone: {}", intake.phone),
        format!("DEA Number: {}", or_na(&intake.dea_number)),
        format!("State License: {}", or_na(&intake.state_license_number)),
        String::new(),
        "=== Online Store ===".to_string(),
        format!("Preferred Domain: {}", intake.preferred_domain),
        format!("Store Name: {}", intake.store_name),
        format!("Tagline: {}", or_na(&intake.tagline)),
        format!("Primary Color: {}", intake.primary_color),
        format!("Template: {}", intake.template),
        String::new(),
        "=== Services & Operations ===".to_string(),
        format!("Services: {services}"),
        format!("Operating Hours: {}", intake.operating_hours),
        format!("Insurance: {}", or_na(&intake.accepted_insurance)),
        format!("Special Notes: {}", or_na(&intake.special_notes)),
        String::new(),
        format!("Submitted: {submitted_at}"),
    ]
    .join("\n");

    let sections = [
        Section {
            heading: "Business Details",
            rows: vec![
                Row::new("Legal Name", &intake.business_legal_name),
                Row::new("Address", &full_address),
                Row::new("Phone", &intake.phone),
                Row::new("DEA Number", or_na(&intake.dea_number)),
                Row::new("State License", or_na(&intake.state_license_number)),
            ],
        },
        Section {
            heading: "Online Store",
            rows: vec![
                Row::new("Preferred Domain", &intake.preferred_domain),
                Row::new("Store Name", &intake.store_name),
                Row::new("Tagline", or_na(&intake.tagline)),
                Row::new("Primary Color", &intake.primary_color),
                Row::new("Template", &intake.template),
            ],
        },
        Section {
            heading: "Services & Operations",
            rows: vec![
                Row::new("Services", &services),
                Row::new("Operating Hours", &intake.operating_hours),
                Row::new("Accepted Insurance", or_na(&intake.accepted_insurance)),
                Row::new("Special Notes", or_na(&intake.special_notes)),
            ],
        },
    ];

    render_notification(
        format!(
            "Onboarding: {} — {}",
            intake.store_name, intake.business_legal_name
        ),
        "New Onboarding Submission",
        "Post-payment setup details from a new Lifetime Access customer.",
        &sections,
        text,
        submitted_at,
    )
}

/// Team-facing summary of a waitlist customer's store preferences.
pub fn waitlist_onboarding_notification(
    intake: &WaitlistOnboardingIntake,
    application: &ApplicationSettings,
    submitted_at: &str,
) -> Result<OutgoingEmail, anyhow::Error> {
    let full_domain = format!("{}.{}", intake.preferred_domain, application.store_domain);
    let services = intake.services_offered.join(", ");

    let text = [
        "Waitlist Onboarding Complete".to_string(),
        String::new(),
        format!("Email: {}", intake.email),
        String::new(),
        "=== Store Preferences ===".to_string(),
        format!("Store Name: {}", intake.store_name),
        format!("Domain: {full_domain}"),
        format!("Tagline: {}", or_na(&intake.tagline)),
        format!("Template: {}", intake.template),
        format!("Primary Color: {}", intake.primary_color),
        String::new(),
        "=== Services & Preferences ===".to_string(),
        format!("Services: {services}"),
        format!("Operating Hours: {}", intake.operating_hours),
        format!("Special Notes: {}", or_na(&intake.special_notes)),
        String::new(),
        format!("Submitted: {submitted_at}"),
    ]
    .join("\n");

    let sections = [
        Section {
            heading: "Contact",
            rows: vec![Row::new("Email", intake.email.as_ref())],
        },
        Section {
            heading: "Store Preferences",
            rows: vec![
                Row::new("Store Name", &intake.store_name),
                Row::new("Domain", &full_domain),
                Row::new("Tagline", or_na(&intake.tagline)),
                Row::new("Template", &intake.template),
                Row::new("Primary Color", &intake.primary_color),
            ],
        },
        Section {
            heading: "Services & Preferences",
            rows: vec![
                Row::new("Services", &services),
                Row::new("Operating Hours", &intake.operating_hours),
                Row::new("Special Notes", or_na(&intake.special_notes)),
            ],
        },
    ];

    render_notification(
        format!("Waitlist Setup: {} ({})", intake.store_name, intake.email),
        "Waitlist Onboarding Complete",
        "A waitlist customer has set up their store preferences.",
        &sections,
        text,
        submitted_at,
    )
}

/// Confirmation email to the waitlist customer whose preferences were saved.
pub fn preferences_saved(
    intake: &WaitlistOnboardingIntake,
    application: &ApplicationSettings,
) -> Result<OutgoingEmail, anyhow::Error> {
    let full_domain = format!("{}.{}", intake.preferred_domain, application.store_domain);
    let services = intake.services_offered.join(", ");

    let text = [
        "Your store preferences are saved!".to_string(),
        String::new(),
        format!(
            "Thank you for setting up your preferences for {}. We've saved everything and will use it to prepare your store.",
            intake.store_name
        ),
        String::new(),
        "Your preferences:".to_string(),
        format!("- Store: {}", intake.store_name),
        format!("- Domain: {full_domain}"),
        format!("- Template: {}", intake.template),
        format!("- Services: {services}"),
        String::new(),
        "What happens next:".to_string(),
        "1. You're on our priority list".to_string(),
        "2. We'll notify you when your spot opens".to_string(),
        "3. Your store will be pre-configured with your preferences".to_string(),
        "4. You'll get a personalized onboarding walkthrough".to_string(),
        String::new(),
        "If you have any questions, reply to this email.".to_string(),
        String::new(),
        "The EcoPharma Team".to_string(),
        application.base_url.clone(),
    ]
    .join("\n");

    let html = PreferencesSavedHtml {
        store_name: &intake.store_name,
        full_domain: &full_domain,
        template_name: &intake.template,
        services: &services,
        year: current_year(),
    }
    .render()
    .context("Failed to render the preferences confirmation email.")?;

    Ok(OutgoingEmail {
        subject: "Your store preferences are saved — here's what's next".to_string(),
        text,
        html,
    })
}
