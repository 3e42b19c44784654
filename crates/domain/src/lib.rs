//! # unitgate-domain
//!
//! Pure domain model for the unitgate service control surface.
//!
//! ## Responsibilities
//! - Foundational types: the controlled service's identity, its reported
//!   run state, and lifecycle acknowledgements
//! - The **token guard** — the request-level shared-secret check that every
//!   control operation must pass before anything else happens
//! - Error conventions for the whole workspace
//! - Contain all invariant enforcement (service-name validity, safe-default
//!   rejection when no token is configured)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod service;
pub mod token;
