//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (accounts,
//!   properties, payments, health)
//! - **Schemas**: Domain and request/response types used in bodies
//! - **Security**: Session cookie authentication scheme
//!
//! The generated specification is served by Swagger UI in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode, Payment, Property, PropertyKind, TaxQuote};
use crate::inbound::http::accounts::{CredentialsRequest, RegisteredResponse};
use crate::inbound::http::payments::PaymentRequest;
use crate::inbound::http::properties::PropertyRequest;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Taxo backend API",
        description = "HTTP interface for property tax records: accounts, properties, tax quotes, and payment history."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::accounts::register,
        crate::inbound::http::accounts::login,
        crate::inbound::http::properties::register_property,
        crate::inbound::http::properties::list_properties,
        crate::inbound::http::payments::quote_tax,
        crate::inbound::http::payments::record_payment,
        crate::inbound::http::payments::payment_history,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Property,
        PropertyKind,
        Payment,
        TaxQuote,
        CredentialsRequest,
        RegisteredResponse,
        PropertyRequest,
        PaymentRequest,
    )),
    tags(
        (name = "accounts", description = "Registration and login"),
        (name = "properties", description = "Property registration and listings"),
        (name = "payments", description = "Tax quotes and the payment log"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
