//! Common error types used across the workspace.

use crate::service::ServiceName;

/// Top-level error for control operations.
///
/// Every request-scoped failure ends up here: either the caller failed the
/// token guard, or the external service manager could not be invoked.
#[derive(Debug, thiserror::Error)]
pub enum UnitGateError {
    /// The token guard rejected the request.
    #[error("unauthorized")]
    Unauthorized(#[from] AuthError),
    /// The service manager command could not be run.
    #[error("service manager failure")]
    Manager(#[from] ManagerError),
}

/// Reasons the token guard rejects a request.
///
/// All variants map to the same caller-visible rejection; the distinction
/// only exists for logging.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request carried no token.
    #[error("no token supplied")]
    MissingToken,
    /// The supplied token does not match the configured secret.
    #[error("token mismatch")]
    TokenMismatch,
    /// No secret is configured, so no token can ever match.
    #[error("no expected token configured")]
    NotConfigured,
}

/// Violations of service-name invariants.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The service name is empty.
    #[error("service name must not be empty")]
    EmptyServiceName,
    /// The service name contains a character that is not allowed in a
    /// unit name passed to the service manager.
    #[error("service name contains forbidden character {0:?}")]
    ForbiddenCharacter(char),
}

/// Failure to invoke the external service manager at all.
///
/// This is the missing-binary / permission-denied case. A command that ran
/// and exited non-zero is *not* a `ManagerError`; the manager owns those
/// outcomes.
#[derive(Debug, thiserror::Error)]
#[error("failed to invoke service manager `{command}` for `{service}`")]
pub struct ManagerError {
    /// The manager verb that was being run (`start`, `stop`, `is-active`).
    pub command: &'static str,
    /// The service the command targeted.
    pub service: String,
    /// The underlying OS error.
    #[source]
    pub source: std::io::Error,
}

impl ManagerError {
    /// Build a [`ManagerError`] for a failed invocation of `command`
    /// against `service`.
    #[must_use]
    pub fn new(command: &'static str, service: &ServiceName, source: std::io::Error) -> Self {
        Self {
            command,
            service: service.to_string(),
            source,
        }
    }
}
