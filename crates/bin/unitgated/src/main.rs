//! # unitgated — unitgate daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Construct the systemd-backed service manager (adapter)
//! - Construct the control service, injecting the manager via the port trait
//! - Construct the token guard from the configured secret
//! - Build the axum router, injecting the application state
//! - Bind to a TCP port on all interfaces and serve
//!
//! ## Deployment
//! Starting and stopping units requires privileges. Run the daemon as a
//! user permitted to control [`SERVICE_NAME`] (root, a polkit rule, or a
//! scoped sudoers entry) — privilege escalation is not application logic.
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use unitgate_adapter_http_axum::router;
use unitgate_adapter_http_axum::state::AppState;
use unitgate_adapter_systemd::SystemdManager;
use unitgate_app::services::control_service::ControlService;
use unitgate_domain::service::ServiceName;
use unitgate_domain::token::TokenGuard;

use crate::config::Config;

/// The one service this process controls. Compiled in; not selectable per
/// request.
const SERVICE_NAME: &str = "the.service";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    let service = ServiceName::new(SERVICE_NAME)?;
    let token_guard = TokenGuard::new(config.auth.token.clone());
    if !token_guard.is_configured() {
        tracing::warn!("no API token configured; every request will be rejected");
    }

    // Service manager + use-cases
    let manager = SystemdManager::new();
    let control = ControlService::new(manager, service);

    // HTTP
    let state = AppState::new(control, token_guard);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(service = SERVICE_NAME, %bind_addr, "unitgated listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
