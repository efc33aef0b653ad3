//! Infrastructure implementations.
//!
//! Port traits, their system-backed implementations, configuration and
//! snapshot loading.

pub mod clock;
pub mod config;
pub mod correlation;
pub mod ports;
pub mod snapshot;
