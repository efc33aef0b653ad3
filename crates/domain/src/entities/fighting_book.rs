//! Fighting book entity - a treatise written by a sword master.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::SwordMaster;
use crate::ids::{FightingBookId, SwordMasterId};

/// A historical combat treatise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightingBook {
    pub id: FightingBookId,
    pub sword_master_id: SwordMasterId,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl FightingBook {
    pub fn new(
        id: FightingBookId,
        sword_master_id: SwordMasterId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            sword_master_id,
            title: title.into(),
            description: description.into(),
            publication_year: None,
            cover_image_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_publication_year(mut self, year: i32) -> Self {
        self.publication_year = Some(year);
        self
    }
}

/// A fighting book joined with the name of its owning sword master.
///
/// Serializes flat: every book field plus `sword_master_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightingBookWithMaster {
    #[serde(flatten)]
    pub book: FightingBook,
    pub sword_master_name: String,
}

impl FightingBookWithMaster {
    pub fn new(book: FightingBook, master: &SwordMaster) -> Self {
        Self {
            book,
            sword_master_name: master.name.clone(),
        }
    }
}
