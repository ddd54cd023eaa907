//! Property API handlers.
//!
//! ```text
//! POST /api/v1/properties {"propertyId":"P100","address":"1 High St","size":"1200","type":"Commercial","ownershipDetails":"sole owner"}
//! GET /api/v1/properties
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Error, NewProperty, Property, PropertyValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Registration payload for `POST /api/v1/properties`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRequest {
    /// External property identifier; must be unique across all users.
    pub property_id: String,
    /// Street address.
    pub address: String,
    /// Free-form size text; stored without numeric parsing.
    pub size: String,
    /// One of `Residential`, `Commercial`, or `Industrial`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form ownership notes.
    pub ownership_details: String,
}

impl TryFrom<PropertyRequest> for NewProperty {
    type Error = PropertyValidationError;

    fn try_from(value: PropertyRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            &value.property_id,
            &value.address,
            &value.size,
            &value.kind,
            &value.ownership_details,
        )
    }
}

pub(crate) fn map_property_validation_error(err: PropertyValidationError) -> Error {
    match err {
        PropertyValidationError::EmptyPropertyId => {
            Error::invalid_request("property id must not be empty")
                .with_details(json!({ "field": "propertyId", "code": "empty_property_id" }))
        }
        PropertyValidationError::UnknownKind { value } => Error::invalid_request(format!(
            "unknown property type {value:?}; expected Residential, Commercial, or Industrial"
        ))
        .with_details(json!({ "field": "type", "code": "unknown_type" })),
    }
}

/// Register a property under the session user.
#[utoipa::path(
    post,
    path = "/api/v1/properties",
    request_body = PropertyRequest,
    responses(
        (status = 201, description = "Property registered", body = Property),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 409, description = "Property id already exists", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["properties"],
    operation_id = "registerProperty"
)]
#[post("/properties")]
pub async fn register_property(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<PropertyRequest>,
) -> ApiResult<HttpResponse> {
    let owner = session.require_user_id()?;
    let property =
        NewProperty::try_from(payload.into_inner()).map_err(map_property_validation_error)?;
    let stored = state.properties.register_property(owner, property).await?;
    Ok(HttpResponse::Created().json(stored))
}

/// List the session user's properties in insertion order.
#[utoipa::path(
    get,
    path = "/api/v1/properties",
    responses(
        (status = 200, description = "Properties owned by the session user", body = [Property]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["properties"],
    operation_id = "listProperties"
)]
#[get("/properties")]
pub async fn list_properties(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Property>>> {
    let owner = session.require_user_id()?;
    let properties = state.properties_query.list_properties(owner).await?;
    Ok(web::Json(properties))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, HttpResponse as TestHttpResponse, test as actix_test, web};
    use serde_json::Value;

    use super::*;
    use crate::domain::ports::{
        MockLoginService, MockPaymentCommand, MockPaymentQuery, MockPropertyCommand,
        MockPropertyQuery, MockRegistrationService, MockTaxQuery,
    };
    use crate::domain::{PropertyId, PropertyKind, UserId};

    fn state_with(properties: MockPropertyCommand, query: MockPropertyQuery) -> HttpState {
        HttpState {
            registration: Arc::new(MockRegistrationService::new()),
            login: Arc::new(MockLoginService::new()),
            properties: Arc::new(properties),
            properties_query: Arc::new(query),
            tax: Arc::new(MockTaxQuery::new()),
            payments: Arc::new(MockPaymentCommand::new()),
            payments_query: Arc::new(MockPaymentQuery::new()),
        }
    }

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .wrap(crate::inbound::http::test_utils::test_session_middleware())
            .route(
                "/test-login",
                web::get().to(|session: SessionContext| async move {
                    session.persist_user(UserId::new(7))?;
                    Ok::<_, Error>(TestHttpResponse::Ok())
                }),
            )
            .service(
                web::scope("/api/v1")
                    .service(register_property)
                    .service(list_properties),
            )
    }

    async fn session_cookie<S>(app: &S) -> actix_web::cookie::Cookie<'static>
    where
        S: actix_web::dev::Service<
                actix_http::Request,
                Response = actix_web::dev::ServiceResponse,
                Error = actix_web::Error,
            >,
    {
        let response = actix_test::call_service(
            app,
            actix_test::TestRequest::get().uri("/test-login").to_request(),
        )
        .await;
        response
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set")
            .into_owned()
    }

    fn request_body(property_id: &str, kind: &str) -> PropertyRequest {
        PropertyRequest {
            property_id: property_id.into(),
            address: "1 High St".into(),
            size: "1200".into(),
            kind: kind.into(),
            ownership_details: "sole owner".into(),
        }
    }

    fn stored_property(owner: UserId, id: i32, property_id: &str, kind: PropertyKind) -> Property {
        Property {
            id,
            owner,
            property_id: PropertyId::new(property_id).expect("valid id"),
            address: "1 High St".into(),
            size: "1200".into(),
            kind,
            ownership_details: "sole owner".into(),
        }
    }

    #[actix_web::test]
    async fn register_property_requires_a_session() {
        let app = actix_test::init_service(test_app(state_with(
            MockPropertyCommand::new(),
            MockPropertyQuery::new(),
        )))
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/properties")
                .set_json(request_body("P100", "Commercial"))
                .to_request(),
        )
        .await;

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn register_property_returns_created_row() {
        let mut properties = MockPropertyCommand::new();
        properties
            .expect_register_property()
            .withf(|owner, property| {
                *owner == UserId::new(7) && property.property_id.as_ref() == "P100"
            })
            .times(1)
            .return_once(|owner, property| {
                Ok(Property {
                    id: 1,
                    owner,
                    property_id: property.property_id,
                    address: property.address,
                    size: property.size,
                    kind: property.kind,
                    ownership_details: property.ownership_details,
                })
            });

        let app = actix_test::init_service(test_app(state_with(
            properties,
            MockPropertyQuery::new(),
        )))
        .await;
        let cookie = session_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/properties")
                .cookie(cookie)
                .set_json(request_body("P100", "Commercial"))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::CREATED);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("JSON body");
        assert_eq!(
            value.get("propertyId").and_then(Value::as_str),
            Some("P100")
        );
        assert_eq!(value.get("type").and_then(Value::as_str), Some("Commercial"));
    }

    #[actix_web::test]
    async fn register_property_rejects_unknown_type() {
        let app = actix_test::init_service(test_app(state_with(
            MockPropertyCommand::new(),
            MockPropertyQuery::new(),
        )))
        .await;
        let cookie = session_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/properties")
                .cookie(cookie)
                .set_json(request_body("P100", "Agricultural"))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("error payload");
        let details = value
            .get("details")
            .and_then(|v| v.as_object())
            .expect("details present");
        assert_eq!(
            details.get("code").and_then(Value::as_str),
            Some("unknown_type")
        );
    }

    #[actix_web::test]
    async fn register_property_surfaces_duplicate_id_as_conflict() {
        let mut properties = MockPropertyCommand::new();
        properties
            .expect_register_property()
            .times(1)
            .return_once(|_, _| Err(Error::conflict("property id already exists")));

        let app = actix_test::init_service(test_app(state_with(
            properties,
            MockPropertyQuery::new(),
        )))
        .await;
        let cookie = session_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/properties")
                .cookie(cookie)
                .set_json(request_body("P100", "Residential"))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn list_properties_returns_the_session_users_rows() {
        let owner = UserId::new(7);
        let rows = vec![
            stored_property(owner, 1, "P2", PropertyKind::Residential),
            stored_property(owner, 2, "P1", PropertyKind::Industrial),
        ];
        let mut query = MockPropertyQuery::new();
        query
            .expect_list_properties()
            .withf(move |requested| *requested == owner)
            .times(1)
            .return_once(move |_| Ok(rows));

        let app =
            actix_test::init_service(test_app(state_with(MockPropertyCommand::new(), query)))
                .await;
        let cookie = session_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/properties")
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert!(response.status().is_success());
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("JSON body");
        let ids: Vec<&str> = value
            .as_array()
            .expect("array body")
            .iter()
            .filter_map(|row| row.get("propertyId").and_then(Value::as_str))
            .collect();
        assert_eq!(ids, vec!["P2", "P1"]);
    }

    #[actix_web::test]
    async fn list_properties_requires_a_session() {
        let app = actix_test::init_service(test_app(state_with(
            MockPropertyCommand::new(),
            MockPropertyQuery::new(),
        )))
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/properties")
                .to_request(),
        )
        .await;

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }
}
