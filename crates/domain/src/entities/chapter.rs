//! Chapter entity - an ordered section of a fighting book.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{ChapterId, FightingBookId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: ChapterId,
    pub fighting_book_id: FightingBookId,
    /// Reading order within the book, starting at 1
    pub chapter_number: u32,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Chapter {
    pub fn new(
        id: ChapterId,
        fighting_book_id: FightingBookId,
        chapter_number: u32,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            fighting_book_id,
            chapter_number,
            title: title.into(),
            description: description.into(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Checks the invariants a loaded chapter must satisfy on its own.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.chapter_number == 0 {
            return Err(DomainError::validation(format!(
                "chapter {} has chapter_number 0; numbering starts at 1",
                self.id
            )));
        }
        Ok(())
    }
}
