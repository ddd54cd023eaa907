//! Backend entry-point: wires REST endpoints, persistence, and OpenAPI docs.

use std::env;
use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use taxo_backend::ApiDoc;
use taxo_backend::domain::ports::{
    LoginService, PaymentCommand, PaymentQuery, PropertyCommand, PropertyQuery,
    RegistrationService, TaxQuery,
};
use taxo_backend::domain::{AccountService, PaymentService, PropertyService};
use taxo_backend::inbound::http::accounts::{login, register};
use taxo_backend::inbound::http::health::{HealthState, live, ready};
use taxo_backend::inbound::http::payments::{payment_history, quote_tax, record_payment};
use taxo_backend::inbound::http::properties::{list_properties, register_property};
use taxo_backend::inbound::http::state::HttpState;
use taxo_backend::outbound::persistence::{
    DieselAccountRepository, DieselPaymentLog, DieselPropertyRepository, Storage,
};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    let key = match std::fs::read(&key_path) {
        Ok(bytes) => Key::derive_from(&bytes),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Key::generate()
            } else {
                return Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )));
            }
        }
    };

    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);

    // Storage initialisation failure is fatal at startup; no retry policy.
    let database_url = env::var("TAXO_DATABASE_URL").unwrap_or_else(|_| "taxo.db".into());
    let storage = Storage::connect(&database_url).map_err(|e| {
        std::io::Error::other(format!("failed to initialise storage at {database_url}: {e}"))
    })?;
    let state = build_state(storage);

    let health_state = web::Data::new(HealthState::new());
    // Clone for server factory so readiness probe remains accessible.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(
            state.clone(),
            server_health_state.clone(),
            key.clone(),
            cookie_secure,
        )
    })
    .bind(("0.0.0.0", 8080))?;

    health_state.mark_ready();
    server.run().await
}

/// Wire persistence adapters and domain services into the handler state.
fn build_state(storage: Storage) -> HttpState {
    let accounts = Arc::new(DieselAccountRepository::new(storage.clone()));
    let properties = Arc::new(DieselPropertyRepository::new(storage.clone()));
    let payments = Arc::new(DieselPaymentLog::new(storage));

    let account_service = Arc::new(AccountService::new(accounts));
    let property_service = Arc::new(PropertyService::new(Arc::clone(&properties)));
    let payment_service = Arc::new(PaymentService::new(
        payments,
        properties,
        Arc::new(DefaultClock),
    ));

    let registration_svc: Arc<dyn RegistrationService> = account_service.clone();
    let login_svc: Arc<dyn LoginService> = account_service;
    let properties_command: Arc<dyn PropertyCommand> = property_service.clone();
    let properties_query_svc: Arc<dyn PropertyQuery> = property_service;
    let tax_svc: Arc<dyn TaxQuery> = payment_service.clone();
    let payments_command: Arc<dyn PaymentCommand> = payment_service.clone();
    let payments_query_svc: Arc<dyn PaymentQuery> = payment_service;

    HttpState {
        registration: registration_svc,
        login: login_svc,
        properties: properties_command,
        properties_query: properties_query_svc,
        tax: tax_svc,
        payments: payments_command,
        payments_query: payments_query_svc,
    }
}

fn build_app(
    state: HttpState,
    health_state: web::Data<HealthState>,
    key: Key,
    cookie_secure: bool,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build();

    let api = web::scope("/api/v1")
        .wrap(session)
        .service(register)
        .service(login)
        .service(register_property)
        .service(list_properties)
        .service(quote_tax)
        .service(record_payment)
        .service(payment_history);

    let mut app = App::new()
        .app_data(web::Data::new(state))
        .app_data(health_state)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}
