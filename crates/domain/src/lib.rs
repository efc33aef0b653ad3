//! HEMA catalog domain types.
//!
//! Entities, typed identifiers and the pagination envelope shared by the engine.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{Chapter, FightingBook, FightingBookWithMaster, SwordMaster, Technique};
pub use error::DomainError;
pub use ids::{ChapterId, FightingBookId, SwordMasterId, TechniqueId};
pub use value_objects::{Page, PageParams};
