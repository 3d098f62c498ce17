//! Application layer orchestrating infrastructure collaborators.
//!
//! # Modules
//!
//! - [`services`] - Health checking and diagnostic mail services

pub mod services;
