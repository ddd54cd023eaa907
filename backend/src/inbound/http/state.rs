//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    LoginService, PaymentCommand, PaymentQuery, PropertyCommand, PropertyQuery,
    RegistrationService, TaxQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registration use-case.
    pub registration: Arc<dyn RegistrationService>,
    /// Login use-case.
    pub login: Arc<dyn LoginService>,
    /// Property registration use-case.
    pub properties: Arc<dyn PropertyCommand>,
    /// Property listing use-case.
    pub properties_query: Arc<dyn PropertyQuery>,
    /// Tax quote use-case.
    pub tax: Arc<dyn TaxQuery>,
    /// Payment recording use-case.
    pub payments: Arc<dyn PaymentCommand>,
    /// Payment history use-case.
    pub payments_query: Arc<dyn PaymentQuery>,
}
