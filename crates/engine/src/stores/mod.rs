//! In-memory state storage modules.
//!
//! - `CatalogStore` - immutable catalog snapshot indexed by ID

pub mod catalog;

pub use catalog::CatalogStore;
