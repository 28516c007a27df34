pub mod configuration;
pub mod dispatch;
pub mod domain;
pub mod email_client;
pub mod ledger;
pub mod rate_limit;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod templating;
