//! Sword master entity - the author of one or more fighting books.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::SwordMasterId;

/// A historical fencing master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwordMaster {
    pub id: SwordMasterId,
    pub name: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SwordMaster {
    pub fn new(id: SwordMasterId, name: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            bio: bio.into(),
            birth_year: None,
            death_year: None,
            image_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_lifespan(mut self, birth_year: Option<i32>, death_year: Option<i32>) -> Self {
        self.birth_year = birth_year;
        self.death_year = death_year;
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}
