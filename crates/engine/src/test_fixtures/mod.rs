//! Shared test fixtures.
//!
//! `treatise_store` is the catalog most tests run against:
//!
//! - masters 1..=3 named "Test Master N"
//! - books 1..=5 titled "Book A".."Book E", inserted out of title order
//! - book 2 has chapters 10, 11, 12 (numbers 1, 2, 3), book 4 has none
//! - chapter 10 has three techniques with orders 1, 2, 3

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use hema_domain::{
    Chapter, ChapterId, FightingBook, FightingBookId, FightingBookWithMaster, SwordMaster,
    SwordMasterId, Technique, TechniqueId,
};

use crate::app::App;
use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::config::Environment;
use crate::infrastructure::ports::CatalogRepo;
use crate::stores::CatalogStore;

pub fn master_id(id: i64) -> SwordMasterId {
    SwordMasterId::new(id).unwrap()
}

pub fn book_id(id: i64) -> FightingBookId {
    FightingBookId::new(id).unwrap()
}

pub fn chapter_id(id: i64) -> ChapterId {
    ChapterId::new(id).unwrap()
}

pub fn technique_id(id: i64) -> TechniqueId {
    TechniqueId::new(id).unwrap()
}

pub fn masters() -> Vec<SwordMaster> {
    (1..=3)
        .map(|n| {
            SwordMaster::new(master_id(n), format!("Test Master {n}"), "Test bio")
                .with_lifespan(Some(1300 + n as i32 * 50), None)
        })
        .collect()
}

pub fn book(id: i64, master: i64, title: &str) -> FightingBook {
    FightingBook::new(book_id(id), master_id(master), title, "Test description")
}

pub fn joined_book(id: i64, title: &str, master_name: &str) -> FightingBookWithMaster {
    FightingBookWithMaster {
        book: book(id, 1, title),
        sword_master_name: master_name.to_string(),
    }
}

pub fn books() -> Vec<FightingBook> {
    vec![
        book(5, 3, "Book E"),
        book(2, 1, "Book B").with_publication_year(1409),
        book(4, 3, "Book D"),
        book(1, 1, "Book A").with_publication_year(1389),
        book(3, 2, "Book C"),
    ]
}

pub fn chapters() -> Vec<Chapter> {
    vec![
        Chapter::new(chapter_id(12), book_id(2), 3, "Longsword", "Sword in two hands"),
        Chapter::new(chapter_id(10), book_id(2), 1, "Wrestling", "Abrazare"),
        Chapter::new(chapter_id(13), book_id(1), 1, "Master cuts", "Die fünf Häue"),
        Chapter::new(chapter_id(11), book_id(2), 2, "Dagger Combat", "Daga"),
    ]
}

pub fn techniques() -> Vec<Technique> {
    vec![
        Technique::new(technique_id(1), chapter_id(10), "Posta di Donna", 1)
            .with_text("The Woman's Guard", "Sword over the shoulder"),
        Technique::new(technique_id(3), chapter_id(10), "Krumphau", 3),
        Technique::new(technique_id(2), chapter_id(10), "Zornhau", 2).with_media(
            Some("https://video.example/zornhau".to_string()),
            None,
        ),
        Technique::new(technique_id(4), chapter_id(13), "Zwerchhau", 1),
    ]
}

pub fn treatise_store() -> CatalogStore {
    CatalogStore::from_collections(masters(), books(), chapters(), techniques())
}

/// App wired to `treatise_store` with a clock frozen at 2025-06-15 10:30 UTC.
pub fn test_app(environment: Environment) -> Arc<App> {
    app_with_repo(Arc::new(treatise_store()), environment)
}

pub fn app_with_repo(repo: Arc<dyn CatalogRepo>, environment: Environment) -> Arc<App> {
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap();
    Arc::new(App::new(repo, Arc::new(FixedClock(now)), environment))
}
