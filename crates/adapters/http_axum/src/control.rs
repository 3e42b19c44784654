//! Handlers for the control endpoints.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use unitgate_app::ports::ServiceManager;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters accepted by every control endpoint.
#[derive(Deserialize)]
pub struct AuthQuery {
    /// Caller-supplied shared secret.
    pub token: Option<String>,
}

/// Response body shared by all three control endpoints: the reported (or
/// acknowledged) status and the fixed service identifier.
#[derive(Serialize)]
pub struct ServiceReport {
    pub status: String,
    pub service: String,
}

/// Possible successful responses from the control endpoints.
pub enum ControlResponse {
    Ok(Json<ServiceReport>),
}

impl IntoResponse for ControlResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /start?token=…`
pub async fn start<M>(
    State(state): State<AppState<M>>,
    Query(query): Query<AuthQuery>,
) -> Result<ControlResponse, ApiError>
where
    M: ServiceManager + Send + Sync + 'static,
{
    state.token_guard.authorize(query.token.as_deref())?;
    let transition = state.control.start().await?;
    Ok(ControlResponse::Ok(Json(ServiceReport {
        status: transition.to_string(),
        service: state.control.service_name().to_string(),
    })))
}

/// `GET /stop?token=…`
pub async fn stop<M>(
    State(state): State<AppState<M>>,
    Query(query): Query<AuthQuery>,
) -> Result<ControlResponse, ApiError>
where
    M: ServiceManager + Send + Sync + 'static,
{
    state.token_guard.authorize(query.token.as_deref())?;
    let transition = state.control.stop().await?;
    Ok(ControlResponse::Ok(Json(ServiceReport {
        status: transition.to_string(),
        service: state.control.service_name().to_string(),
    })))
}

/// `GET /status?token=…`
pub async fn status<M>(
    State(state): State<AppState<M>>,
    Query(query): Query<AuthQuery>,
) -> Result<ControlResponse, ApiError>
where
    M: ServiceManager + Send + Sync + 'static,
{
    state.token_guard.authorize(query.token.as_deref())?;
    let state_text = state.control.status().await?;
    Ok(ControlResponse::Ok(Json(ServiceReport {
        status: state_text.to_string(),
        service: state.control.service_name().to_string(),
    })))
}
