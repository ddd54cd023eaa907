//! Tax and payment API handlers.
//!
//! ```text
//! GET /api/v1/properties/{property_id}/tax?value=200000
//! POST /api/v1/payments {"propertyId":"P100","amount":3000.0}
//! GET /api/v1/properties/{property_id}/payments
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Payment, PropertyId, TaxQuote};
use crate::inbound::http::ApiResult;
use crate::inbound::http::properties::map_property_validation_error;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Query parameters for the tax quote endpoint.
#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaxQuoteParams {
    /// Property value the tax is computed over.
    pub value: f64,
}

/// Payment payload for `POST /api/v1/payments`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// External identifier of the property being paid for.
    pub property_id: String,
    /// Amount to record; not reconciled against a computed tax.
    pub amount: f64,
}

fn parse_property_id(raw: &str) -> Result<PropertyId, Error> {
    PropertyId::new(raw).map_err(map_property_validation_error)
}

/// Quote the tax owed on a property for a given value.
///
/// The rate comes from the property's stored classification, so the property
/// must exist; recording a payment does not share that requirement.
#[utoipa::path(
    get,
    path = "/api/v1/properties/{property_id}/tax",
    params(
        ("property_id" = String, Path, description = "External property identifier"),
        TaxQuoteParams
    ),
    responses(
        (status = 200, description = "Tax quote", body = TaxQuote),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Unknown property", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["payments"],
    operation_id = "quoteTax"
)]
#[get("/properties/{property_id}/tax")]
pub async fn quote_tax(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    params: web::Query<TaxQuoteParams>,
) -> ApiResult<web::Json<TaxQuote>> {
    session.require_user_id()?;
    let property_id = parse_property_id(&path.into_inner())?;
    let quote = state.tax.quote(&property_id, params.value).await?;
    Ok(web::Json(quote))
}

/// Record a tax payment against a property.
///
/// The log is append-only: the property is not required to exist and the
/// amount is not reconciled against a quote.
#[utoipa::path(
    post,
    path = "/api/v1/payments",
    request_body = PaymentRequest,
    responses(
        (status = 201, description = "Payment recorded", body = Payment),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["payments"],
    operation_id = "recordPayment"
)]
#[post("/payments")]
pub async fn record_payment(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<PaymentRequest>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let request = payload.into_inner();
    let property_id = parse_property_id(&request.property_id)?;
    let payment = state
        .payments
        .record_payment(&property_id, request.amount)
        .await?;
    Ok(HttpResponse::Created().json(payment))
}

/// List a property's payment history in insertion order.
#[utoipa::path(
    get,
    path = "/api/v1/properties/{property_id}/payments",
    params(
        ("property_id" = String, Path, description = "External property identifier")
    ),
    responses(
        (status = 200, description = "Payment history", body = [Payment]),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["payments"],
    operation_id = "paymentHistory"
)]
#[get("/properties/{property_id}/payments")]
pub async fn payment_history(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Payment>>> {
    session.require_user_id()?;
    let property_id = parse_property_id(&path.into_inner())?;
    let payments = state.payments_query.payment_history(&property_id).await?;
    Ok(web::Json(payments))
}
