//! Shared application state for axum handlers.

use std::sync::Arc;

use unitgate_app::ports::ServiceManager;
use unitgate_app::services::control_service::ControlService;
use unitgate_domain::token::TokenGuard;

/// Application state shared across all axum handlers.
///
/// Generic over the service manager type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do
/// not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<M> {
    /// Start/stop/status use-cases for the configured service.
    pub control: Arc<ControlService<M>>,
    /// Request-level shared-secret check.
    pub token_guard: Arc<TokenGuard>,
}

impl<M> Clone for AppState<M> {
    fn clone(&self) -> Self {
        Self {
            control: Arc::clone(&self.control),
            token_guard: Arc::clone(&self.token_guard),
        }
    }
}

impl<M> AppState<M>
where
    M: ServiceManager + Send + Sync + 'static,
{
    /// Create a new application state from the control service and guard.
    pub fn new(control: ControlService<M>, token_guard: TokenGuard) -> Self {
        Self {
            control: Arc::new(control),
            token_guard: Arc::new(token_guard),
        }
    }
}
