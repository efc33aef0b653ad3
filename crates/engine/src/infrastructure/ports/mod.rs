//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Catalog access (in-memory snapshot today, could swap to Postgres)
//! - Clock (for testing)

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::{CatalogCounts, CatalogRepo};
pub use testing::ClockPort;

#[cfg(test)]
pub use repos::MockCatalogRepo;

#[cfg(test)]
pub use testing::MockClockPort;
