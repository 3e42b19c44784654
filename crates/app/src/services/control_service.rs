//! Control service — use-cases for the one managed service.

use unitgate_domain::error::UnitGateError;
use unitgate_domain::service::{ServiceName, ServiceState, Transition};

use crate::ports::ServiceManager;

/// Application service for start/stop/status of the configured service.
///
/// The service name is fixed at construction and identical for every
/// operation; there is no per-request service selection.
pub struct ControlService<M> {
    manager: M,
    service: ServiceName,
}

impl<M: ServiceManager> ControlService<M> {
    /// Create a new service backed by the given manager, controlling
    /// `service` for the lifetime of the process.
    pub fn new(manager: M, service: ServiceName) -> Self {
        Self { manager, service }
    }

    /// The name of the controlled service.
    #[must_use]
    pub fn service_name(&self) -> &ServiceName {
        &self.service
    }

    /// Issue the start command and acknowledge with
    /// [`Transition::Starting`].
    ///
    /// Fire-and-forget: the acknowledgement does not depend on whether the
    /// service actually reached a running state, nor on the control
    /// command's exit status.
    ///
    /// # Errors
    ///
    /// Returns [`UnitGateError::Manager`] only when the manager command
    /// could not be invoked at all.
    #[tracing::instrument(skip(self), fields(service = %self.service))]
    pub async fn start(&self) -> Result<Transition, UnitGateError> {
        self.manager.start(&self.service).await?;
        Ok(Transition::Starting)
    }

    /// Issue the stop command and acknowledge with
    /// [`Transition::Stopping`]. Same contract as [`start`](Self::start).
    ///
    /// # Errors
    ///
    /// Returns [`UnitGateError::Manager`] only when the manager command
    /// could not be invoked at all.
    #[tracing::instrument(skip(self), fields(service = %self.service))]
    pub async fn stop(&self) -> Result<Transition, UnitGateError> {
        self.manager.stop(&self.service).await?;
        Ok(Transition::Stopping)
    }

    /// Query the current run state, returning the manager's reported text
    /// verbatim (trimmed).
    ///
    /// # Errors
    ///
    /// Returns [`UnitGateError::Manager`] when the status query could not
    /// be invoked.
    #[tracing::instrument(skip(self), fields(service = %self.service))]
    pub async fn status(&self) -> Result<ServiceState, UnitGateError> {
        Ok(self.manager.query_status(&self.service).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use unitgate_domain::error::ManagerError;

    #[derive(Default)]
    struct RecordingManager {
        started: AtomicUsize,
        stopped: AtomicUsize,
        state: String,
    }

    impl RecordingManager {
        fn reporting(state: &str) -> Self {
            Self {
                state: state.to_owned(),
                ..Self::default()
            }
        }
    }

    impl ServiceManager for RecordingManager {
        fn start(
            &self,
            _service: &ServiceName,
        ) -> impl Future<Output = Result<(), ManagerError>> + Send {
            self.started.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }
        }

        fn stop(
            &self,
            _service: &ServiceName,
        ) -> impl Future<Output = Result<(), ManagerError>> + Send {
            self.stopped.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }
        }

        fn query_status(
            &self,
            _service: &ServiceName,
        ) -> impl Future<Output = Result<ServiceState, ManagerError>> + Send {
            let state = ServiceState::from_output(&self.state);
            async { Ok(state) }
        }
    }

    struct UnspawnableManager;

    impl ServiceManager for UnspawnableManager {
        fn start(
            &self,
            service: &ServiceName,
        ) -> impl Future<Output = Result<(), ManagerError>> + Send {
            let err = ManagerError::new(
                "start",
                service,
                io::Error::new(io::ErrorKind::NotFound, "no such binary"),
            );
            async { Err(err) }
        }

        fn stop(
            &self,
            service: &ServiceName,
        ) -> impl Future<Output = Result<(), ManagerError>> + Send {
            let err = ManagerError::new(
                "stop",
                service,
                io::Error::new(io::ErrorKind::NotFound, "no such binary"),
            );
            async { Err(err) }
        }

        fn query_status(
            &self,
            service: &ServiceName,
        ) -> impl Future<Output = Result<ServiceState, ManagerError>> + Send {
            let err = ManagerError::new(
                "is-active",
                service,
                io::Error::new(io::ErrorKind::NotFound, "no such binary"),
            );
            async { Err(err) }
        }
    }

    fn name() -> ServiceName {
        ServiceName::new("demo.service").unwrap()
    }

    #[tokio::test]
    async fn should_acknowledge_starting_after_start() {
        let svc = ControlService::new(RecordingManager::default(), name());
        let transition = svc.start().await.unwrap();
        assert_eq!(transition, Transition::Starting);
    }

    #[tokio::test]
    async fn should_invoke_manager_exactly_once_per_start() {
        let manager = std::sync::Arc::new(RecordingManager::default());
        let svc = ControlService::new(std::sync::Arc::clone(&manager), name());
        svc.start().await.unwrap();
        assert_eq!(manager.started.load(Ordering::SeqCst), 1);
        assert_eq!(manager.stopped.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_acknowledge_stopping_after_stop() {
        let svc = ControlService::new(RecordingManager::default(), name());
        let transition = svc.stop().await.unwrap();
        assert_eq!(transition, Transition::Stopping);
    }

    #[tokio::test]
    async fn should_return_reported_state_from_status() {
        let svc = ControlService::new(RecordingManager::reporting("inactive\n"), name());
        let state = svc.status().await.unwrap();
        assert_eq!(state.as_str(), "inactive");
    }

    #[tokio::test]
    async fn should_expose_constant_service_name() {
        let svc = ControlService::new(RecordingManager::default(), name());
        assert_eq!(svc.service_name().as_str(), "demo.service");
    }

    #[tokio::test]
    async fn should_propagate_manager_failure_from_start() {
        let svc = ControlService::new(UnspawnableManager, name());
        let result = svc.start().await;
        assert!(matches!(result, Err(UnitGateError::Manager(_))));
    }

    #[tokio::test]
    async fn should_propagate_manager_failure_from_status() {
        let svc = ControlService::new(UnspawnableManager, name());
        let result = svc.status().await;
        assert!(matches!(result, Err(UnitGateError::Manager(_))));
    }
}
