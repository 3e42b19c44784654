//! Service manager port — the process-control capability boundary.
//!
//! The service manager (systemd on the target hosts) is the source of truth
//! for actual service state. This port deliberately exposes only the three
//! operations the control surface needs.

use std::future::Future;

use unitgate_domain::error::ManagerError;
use unitgate_domain::service::{ServiceName, ServiceState};

/// Controls one OS service through the platform's service manager.
pub trait ServiceManager {
    /// Issue the start command for `service`.
    ///
    /// Returns once the control command itself has run. Does not wait for
    /// the service to become active, and the command's exit status is not
    /// part of the contract — only a failure to invoke the command at all
    /// is an error.
    fn start(
        &self,
        service: &ServiceName,
    ) -> impl Future<Output = Result<(), ManagerError>> + Send;

    /// Issue the stop command for `service`. Same contract as
    /// [`start`](Self::start).
    fn stop(
        &self,
        service: &ServiceName,
    ) -> impl Future<Output = Result<(), ManagerError>> + Send;

    /// Query the current run state of `service`, returning the manager's
    /// reported state text with surrounding whitespace trimmed.
    fn query_status(
        &self,
        service: &ServiceName,
    ) -> impl Future<Output = Result<ServiceState, ManagerError>> + Send;
}

impl<T: ServiceManager + Send + Sync> ServiceManager for std::sync::Arc<T> {
    fn start(
        &self,
        service: &ServiceName,
    ) -> impl Future<Output = Result<(), ManagerError>> + Send {
        (**self).start(service)
    }

    fn stop(
        &self,
        service: &ServiceName,
    ) -> impl Future<Output = Result<(), ManagerError>> + Send {
        (**self).stop(service)
    }

    fn query_status(
        &self,
        service: &ServiceName,
    ) -> impl Future<Output = Result<ServiceState, ManagerError>> + Send {
        (**self).query_status(service)
    }
}
