//! # unitgate-adapter-systemd
//!
//! Service manager adapter that shells out to `systemctl`.
//!
//! ## Behaviour
//!
//! | Operation | Command | Exit status |
//! |-----------|---------|-------------|
//! | start | `systemctl start <unit>` | awaited, logged when non-zero, never surfaced |
//! | stop | `systemctl stop <unit>` | awaited, logged when non-zero, never surfaced |
//! | status | `systemctl is-active <unit>` | ignored; stdout carries the state text |
//!
//! systemd is the source of truth for the outcome of start/stop; this
//! adapter only reports that the command was issued. `is-active` exits
//! non-zero for every state but `active`, so its exit status is not an
//! error signal either. The only failure this adapter produces is a spawn
//! failure (missing binary, permission error).
//!
//! Controlling units requires privileges: deploy `unitgated` as root or as
//! a user granted control of the unit (polkit rule or a scoped sudoers
//! entry), not by escalating inside this adapter.
//!
//! ## Dependency rule
//!
//! Depends on `unitgate-app` (port trait) and `unitgate-domain` only.

use tokio::process::Command;

use unitgate_app::ports::ServiceManager;
use unitgate_domain::error::ManagerError;
use unitgate_domain::service::{ServiceName, ServiceState};

/// [`ServiceManager`] implementation backed by `systemctl`.
pub struct SystemdManager {
    program: String,
}

impl SystemdManager {
    /// Manager invoking the system `systemctl`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("systemctl")
    }

    /// Manager invoking an alternative program in place of `systemctl`.
    ///
    /// Tests substitute stub executables here; production code uses
    /// [`new`](Self::new).
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn run_control(
        &self,
        verb: &'static str,
        service: &ServiceName,
    ) -> Result<(), ManagerError> {
        let status = Command::new(&self.program)
            .arg(verb)
            .arg(service.as_str())
            .status()
            .await
            .map_err(|source| ManagerError::new(verb, service, source))?;
        if !status.success() {
            tracing::warn!(
                service = %service,
                verb,
                code = ?status.code(),
                "service manager command exited non-zero"
            );
        }
        Ok(())
    }
}

impl Default for SystemdManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceManager for SystemdManager {
    async fn start(&self, service: &ServiceName) -> Result<(), ManagerError> {
        self.run_control("start", service).await
    }

    async fn stop(&self, service: &ServiceName) -> Result<(), ManagerError> {
        self.run_control("stop", service).await
    }

    async fn query_status(&self, service: &ServiceName) -> Result<ServiceState, ManagerError> {
        let output = Command::new(&self.program)
            .arg("is-active")
            .arg(service.as_str())
            .output()
            .await
            .map_err(|source| ManagerError::new("is-active", service, source))?;
        Ok(ServiceState::from_output(&String::from_utf8_lossy(
            &output.stdout,
        )))
    }
}
