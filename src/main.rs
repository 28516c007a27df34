use std::net::TcpListener;

use ecopharma_intake::{
    configuration::get_configuration,
    email_client::EmailClient,
    ledger::LedgerClient,
    rate_limit::SubmissionGuard,
    startup::run,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Initialize the logger
    let subscriber = get_subscriber("ecopharma-intake".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");

    let email_client = EmailClient::from_settings(&configuration.email)
        .expect("Failed to initialize the SMTP transport.");
    let ledger_client = LedgerClient::from_settings(&configuration.ledger)
        .expect("Failed to initialize the ledger client.");
    let submission_guard = SubmissionGuard::from_settings(&configuration.rate_limit);

    let addr_to_bind = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );

    let listener = TcpListener::bind(addr_to_bind).expect("Failed to bind port.");

    run(
        listener,
        email_client,
        ledger_client,
        submission_guard,
        configuration.email,
        configuration.application,
    )?
    .await
}
