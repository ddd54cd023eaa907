//! Account API handlers.
//!
//! ```text
//! POST /api/v1/register {"username":"alice","password":"pw1"}
//! POST /api/v1/login {"username":"alice","password":"pw1"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{AccountValidationError, Credentials, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Credential payload shared by `POST /api/v1/register` and
/// `POST /api/v1/login`.
///
/// Example JSON:
/// `{"username":"alice","password":"pw1"}`
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    /// Account username, compared as an exact string.
    pub username: String,
    /// Account password, compared as an exact string.
    pub password: String,
}

impl TryFrom<CredentialsRequest> for Credentials {
    type Error = AccountValidationError;

    fn try_from(value: CredentialsRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// Response body for a successful registration.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredResponse {
    /// Store-assigned id of the new account.
    pub user_id: i32,
}

fn map_account_validation_error(err: AccountValidationError) -> Error {
    match err {
        AccountValidationError::EmptyUsername => {
            Error::invalid_request("username must not be empty")
                .with_details(json!({ "field": "username", "code": "empty_username" }))
        }
        AccountValidationError::EmptyPassword => {
            Error::invalid_request("password must not be empty")
                .with_details(json!({ "field": "password", "code": "empty_password" }))
        }
    }
}

/// Register a new account.
///
/// Duplicate usernames are the only rejected state; the response carries the
/// centralised `Error` schema on failure.
#[utoipa::path(
    post,
    path = "/api/v1/register",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "Account created", body = RegisteredResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Username already exists", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["accounts"],
    operation_id = "register",
    security([])
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        Credentials::try_from(payload.into_inner()).map_err(map_account_validation_error)?;
    let user_id = state.registration.register(&credentials).await?;
    Ok(HttpResponse::Created().json(RegisteredResponse {
        user_id: user_id.get(),
    }))
}

/// Authenticate a user and establish a session.
///
/// Uses the centralised `Error` type so clients get a consistent error
/// schema across all endpoints.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Login success", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["accounts"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        Credentials::try_from(payload.into_inner()).map_err(map_account_validation_error)?;
    let user_id = state.login.authenticate(&credentials).await?;
    session.persist_user(user_id)?;
    Ok(HttpResponse::Ok().finish())
}
