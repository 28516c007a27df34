use std::net::TcpListener;

use actix_web::error::InternalError;
use actix_web::{dev::Server, web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::configuration::{ApplicationSettings, EmailSettings};
use crate::email_client::EmailClient;
use crate::ledger::LedgerClient;
use crate::rate_limit::SubmissionGuard;
use crate::routes::{
    capture_lead, health_check, submit_checkout, submit_onboarding, submit_waitlist_onboarding,
    ApiResponse,
};

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    ledger_client: LedgerClient,
    submission_guard: SubmissionGuard,
    email_settings: EmailSettings,
    application: ApplicationSettings,
) -> Result<Server, std::io::Error> {
    let email_client = web::Data::new(email_client);
    let ledger_client = web::Data::new(ledger_client);
    let submission_guard = web::Data::new(submission_guard);
    let email_settings = web::Data::new(email_settings);
    let application = web::Data::new(application);

    let server = HttpServer::new(move || {
        // A body that does not parse as JSON is reported as an opaque server
        // error, keeping the same envelope shape as every other response.
        let json_config = web::JsonConfig::default().error_handler(|error, _request| {
            let response = HttpResponse::InternalServerError().json(ApiResponse::rejected(
                "Something went wrong. Please try again.".into(),
            ));
            InternalError::from_response(error, response).into()
        });

        App::new()
            .wrap(TracingLogger::default())
            .app_data(json_config)
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .route("/lead", web::post().to(capture_lead))
                    .route("/checkout", web::post().to(submit_checkout))
                    .route("/onboarding", web::post().to(submit_onboarding))
                    .route(
                        "/waitlist-onboarding",
                        web::post().to(submit_waitlist_onboarding),
                    ),
            )
            .app_data(email_client.clone())
            .app_data(ledger_client.clone())
            .app_data(submission_guard.clone())
            .app_data(email_settings.clone())
            .app_data(application.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
