//! # API REST
//!
//! REST API implementation for the referral lookup service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON shaping, CORS, error-to-status mapping)
//!
//! Uses `api-shared` for the wire types and `referral-core` for the lookup itself.

#![warn(rust_2018_idioms)]

pub mod error;

pub use error::ApiError;

use api_shared::{
    ErrorRes, ExistsRes, HealthRes, HealthService, LookupRes, ReferralData, VerifyRes,
};
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, Method},
    response::Json,
    routing::get,
    Router,
};
use referral_core::{LookupOutcome, LookupRequest, ReferralError, ReferralService};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

/// Path of the referral lookup endpoint.
pub const RECOMMENDATION_PATH: &str = "/api/recommendation";

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Application state shared across REST API handlers
///
/// Holds the lookup service when the record store is configured. Without credentials the server
/// still starts, and every lookup answers with a configuration error.
#[derive(Clone)]
pub struct AppState {
    service: Option<Arc<ReferralService>>,
}

impl AppState {
    pub fn new(service: ReferralService) -> Self {
        Self {
            service: Some(Arc::new(service)),
        }
    }

    pub fn unconfigured() -> Self {
        Self { service: None }
    }
}

/// Query parameters of the lookup endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LookupQuery {
    /// Public referral key.
    pub key: Option<String>,
    /// Requester phone number, required when `action=verify`.
    pub phone: Option<String>,
    /// `verify` to disclose the full referral; anything else runs an existence check.
    pub action: Option<String>,
}

impl From<LookupQuery> for LookupRequest {
    fn from(query: LookupQuery) -> Self {
        LookupRequest {
            key: query.key,
            phone: query.phone,
            action: query.action,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, recommendation, recommendation_post),
    components(schemas(
        HealthRes,
        LookupRes,
        ExistsRes,
        VerifyRes,
        ReferralData,
        ErrorRes
    ))
)]
struct ApiDoc;

/// Build the REST router with CORS and Swagger UI attached.
///
/// Pre-flight `OPTIONS` requests are answered by the CORS layer with `200` and no body before
/// they reach a handler.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route(RECOMMENDATION_PATH, get(recommendation).post(recommendation_post))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("content-type"),
        ))
        .layer(cors)
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Does not contact the record store.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/recommendation",
    params(LookupQuery),
    responses(
        (status = 200, description = "Existence check (`ExistsRes`) or verified referral (`VerifyRes`)", body = LookupRes),
        (status = 400, description = "Missing key, or verify without phone", body = ErrorRes),
        (status = 401, description = "Phone number does not match", body = ErrorRes),
        (status = 404, description = "No referral for this key", body = ErrorRes),
        (status = 500, description = "Configuration or internal error", body = ErrorRes)
    )
)]
/// Look up a referral by public key
///
/// Without `action=verify` the response is `{ exists, maskedName }`. With `action=verify` and a
/// matching `phone` the full referral is returned.
///
/// # Errors
/// Every failure is converted to an [`ApiError`] response with the status from
/// `ReferralError::status_code`.
#[axum::debug_handler]
async fn recommendation(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<LookupRes>, ApiError> {
    let service = state.service.as_ref().ok_or_else(|| {
        ReferralError::Configuration("record store credentials are not configured".into())
    })?;

    let res = match service.lookup(query.into()).await? {
        LookupOutcome::Exists { masked_name } => LookupRes::Exists(ExistsRes {
            exists: true,
            masked_name,
        }),
        LookupOutcome::Verified(record) => LookupRes::Verified(VerifyRes {
            success: true,
            data: ReferralData::from(&*record),
        }),
    };

    Ok(Json(res))
}

#[utoipa::path(
    post,
    path = "/api/recommendation",
    params(LookupQuery),
    responses(
        (status = 200, description = "Existence check (`ExistsRes`) or verified referral (`VerifyRes`)", body = LookupRes),
        (status = 400, description = "Missing key, or verify without phone", body = ErrorRes),
        (status = 401, description = "Phone number does not match", body = ErrorRes),
        (status = 404, description = "No referral for this key", body = ErrorRes),
        (status = 500, description = "Configuration or internal error", body = ErrorRes)
    )
)]
/// Look up a referral by public key via `POST`
///
/// Takes the same query parameters as `GET`; the request body is ignored.
#[axum::debug_handler]
async fn recommendation_post(
    state: State<AppState>,
    query: Query<LookupQuery>,
) -> Result<Json<LookupRes>, ApiError> {
    recommendation(state, query).await
}
