//! Catalog entities.
//!
//! Ownership hierarchy: `SwordMaster` → `FightingBook` → `Chapter` → `Technique`.
//! Every entity is immutable once loaded.

mod chapter;
mod fighting_book;
mod sword_master;
mod technique;

pub use chapter::Chapter;
pub use fighting_book::{FightingBook, FightingBookWithMaster};
pub use sword_master::SwordMaster;
pub use technique::Technique;
