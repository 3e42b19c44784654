//! # unitgate-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the three control endpoints (`/start`, `/stop`, `/status`) plus
//!   a `/health` liveness probe
//! - Run the token guard before any control operation reaches the service
//!   manager
//! - Map application results into minimal JSON responses
//!
//! ## Wire compatibility
//! All control endpoints are plain `GET` requests carrying the secret as a
//! `token` query parameter, side effects included. Preserved verbatim so
//! existing callers (hardware buttons, shell one-liners) keep working.
//!
//! ## Dependency rule
//! Depends on `unitgate-app` (port trait and service) and `unitgate-domain`
//! (guard and error types used in response mapping). Never leaks axum types
//! into the domain.

#[allow(clippy::missing_errors_doc)]
pub mod control;
pub mod error;
pub mod router;
pub mod state;
