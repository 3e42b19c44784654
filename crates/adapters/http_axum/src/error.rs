//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use unitgate_domain::error::{AuthError, UnitGateError};

/// JSON error body returned by failing endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`UnitGateError`] to an HTTP response with the appropriate status
/// code.
pub struct ApiError(UnitGateError);

impl From<UnitGateError> for ApiError {
    fn from(err: UnitGateError) -> Self {
        Self(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(UnitGateError::Unauthorized(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            UnitGateError::Unauthorized(err) => {
                // The specific reason stays in the logs; callers only see
                // the rejection.
                tracing::debug!(reason = %err, "request rejected by token guard");
                (StatusCode::UNAUTHORIZED, "unauthorized".to_string())
            }
            UnitGateError::Manager(err) => {
                tracing::error!(error = %err, "service manager invocation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "service manager failure".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
