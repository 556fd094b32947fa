//! Conversion of core errors into HTTP responses.

use api_shared::ErrorRes;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use referral_core::ReferralError;

/// Handler-boundary error.
///
/// The wrapped error's `Display` text goes to the server log only. The response body is built
/// from the caller-safe labels, so upstream bodies, URLs and credentials never reach a client.
#[derive(Debug)]
pub struct ApiError(pub ReferralError);

impl From<ReferralError> for ApiError {
    fn from(err: ReferralError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if err.is_client_error() {
            tracing::warn!("Referral request rejected: {}", err);
        } else {
            tracing::error!("Referral request failed: {:?}", err);
        }

        let body = ErrorRes {
            error: err.public_error().to_string(),
            message: err.public_message().map(String::from),
            status: match err {
                ReferralError::Upstream { .. } => Some(status.as_u16()),
                _ => None,
            },
        };

        (status, Json(body)).into_response()
    }
}
