//! # unitgate-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that adapters must implement (driven/outbound):
//!   - `ServiceManager` — start, stop, and query one OS service
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `ControlService` — issue start/stop commands and report status for
//!     the one configured service
//! - Orchestrate domain objects without knowing *how* process control works
//!
//! ## Dependency rule
//! Depends on `unitgate-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
