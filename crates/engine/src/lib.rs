//! HEMA catalog engine library.
//!
//! Read-only HTTP service over a catalog of historical European martial arts
//! treatises: sword masters, their fighting books, chapters and techniques.
//!
//! ## Structure
//!
//! - `stores/` - In-memory catalog indexed by ID
//! - `use_cases/` - Catalog browsing, parent existence checks, pagination
//! - `infrastructure/` - Ports, configuration, snapshot loading
//! - `api/` - HTTP entry points and middleware
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// Shared fixtures for unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
