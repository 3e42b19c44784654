//! Use-case services.

pub mod control_service;
