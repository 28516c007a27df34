use std::net::TcpListener;

use ecopharma_intake::configuration::{get_configuration, Settings, SmtpSettings};
use ecopharma_intake::email_client::EmailClient;
use ecopharma_intake::ledger::LedgerClient;
use ecopharma_intake::rate_limit::SubmissionGuard;
use ecopharma_intake::startup::run;
use ecopharma_intake::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use secrecy::Secret;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "ecopharma_intake_test".to_string();
    // set up logging for test app
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        // use std::io::sink to consume the log data silently
        // ie. send them into void
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct TestApp {
    pub address: String,
    pub ledger_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(format!("{}{}", self.address, path))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Boot the application against a wiremock spreadsheet backend, with SMTP
/// disabled unless the caller opts back in through `customise`.
pub async fn spawn_app_with(customise: impl FnOnce(&mut Settings)) -> TestApp {
    Lazy::force(&TRACING);

    let ledger_server = MockServer::start().await;
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port.");
    let addr = listener.local_addr().unwrap();

    let mut configuration = get_configuration().expect("Failed to read configuration");
    configuration.email.smtp = None;
    configuration.email.timeout_milliseconds = 500;
    configuration.ledger.timeout_milliseconds = 1000;
    configuration.ledger.lead_webhook_url = Some(format!("{}/lead", ledger_server.uri()));
    configuration.ledger.checkout_webhook_url = Some(format!("{}/checkout", ledger_server.uri()));
    configuration.ledger.waitlist_onboarding_webhook_url =
        Some(format!("{}/waitlist-onboarding", ledger_server.uri()));
    customise(&mut configuration);

    let email_client =
        EmailClient::from_settings(&configuration.email).expect("Failed to build email client.");
    let ledger_client =
        LedgerClient::from_settings(&configuration.ledger).expect("Failed to build ledger client.");
    let submission_guard = SubmissionGuard::from_settings(&configuration.rate_limit);

    let server = run(
        listener,
        email_client,
        ledger_client,
        submission_guard,
        configuration.email,
        configuration.application,
    )
    .expect("Failed to fireup server for test.");

    tokio::spawn(server);
    TestApp {
        address: format!("http://{addr}"),
        ledger_server,
        api_client: reqwest::Client::new(),
    }
}

/// SMTP settings pointing at a port nothing listens on, so every delivery
/// attempt fails fast instead of being skipped as unconfigured.
pub fn unreachable_smtp() -> SmtpSettings {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port.");
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    SmtpSettings {
        host: "127.0.0.1".into(),
        port,
        username: "tester".into(),
        password: Secret::new("no-such-password".into()),
    }
}
