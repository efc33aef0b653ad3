//! Technique entity - a single move taught in a chapter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ChapterId, TechniqueId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technique {
    pub id: TechniqueId,
    pub chapter_id: ChapterId,
    pub name: String,
    pub description: String,
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Display order within the chapter
    pub order_in_chapter: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Technique {
    pub fn new(
        id: TechniqueId,
        chapter_id: ChapterId,
        name: impl Into<String>,
        order_in_chapter: i32,
    ) -> Self {
        Self {
            id,
            chapter_id,
            name: name.into(),
            description: String::new(),
            instructions: String::new(),
            video_url: None,
            thumbnail_url: None,
            order_in_chapter,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_text(
        mut self,
        description: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        self.description = description.into();
        self.instructions = instructions.into();
        self
    }

    pub fn with_media(mut self, video_url: Option<String>, thumbnail_url: Option<String>) -> Self {
        self.video_url = video_url;
        self.thumbnail_url = thumbnail_url;
        self
    }
}
