//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use unitgate_app::ports::ServiceManager;

use crate::control;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// The three control endpoints are token-guarded; `/health` is not (it has
/// no side effects). Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<M>(state: AppState<M>) -> Router
where
    M: ServiceManager + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/start", get(control::start::<M>))
        .route("/stop", get(control::stop::<M>))
        .route("/status", get(control::status::<M>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
