//! In-memory catalog store.
//!
//! Holds every sword master, fighting book, chapter and technique indexed by
//! ID and answers the same questions a relational backend would: existence
//! checks, a single-hop join from book to master, ordered listings and
//! paginated listings with a separate total.
//!
//! The store is built once at startup and never mutated afterwards, so it is
//! shared across request tasks behind an `Arc` without locking.

use std::collections::HashMap;

use async_trait::async_trait;
use hema_domain::{
    Chapter, ChapterId, FightingBook, FightingBookId, FightingBookWithMaster, PageParams,
    SwordMaster, SwordMasterId, Technique, TechniqueId,
};

use crate::infrastructure::ports::{CatalogCounts, CatalogRepo, RepoError};
use crate::infrastructure::snapshot::{LoadError, Snapshot, SnapshotSource};

/// Immutable, indexed catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    sword_masters: HashMap<SwordMasterId, SwordMaster>,
    fighting_books: HashMap<FightingBookId, FightingBook>,
    chapters: HashMap<ChapterId, Chapter>,
    techniques: HashMap<TechniqueId, Technique>,
}

impl CatalogStore {
    /// Loads the snapshot compiled into the binary.
    pub fn load_embedded() -> Result<Self, LoadError> {
        Self::load(&SnapshotSource::Embedded)
    }

    /// Loads a snapshot from a directory of JSON files.
    pub fn load_from_dir(dir: impl Into<std::path::PathBuf>) -> Result<Self, LoadError> {
        Self::load(&SnapshotSource::Directory(dir.into()))
    }

    /// Loads and indexes a snapshot. Nothing is returned unless every file loads.
    pub fn load(source: &SnapshotSource) -> Result<Self, LoadError> {
        let snapshot = Snapshot::load(source)?;
        Ok(Self::from_collections(
            snapshot.sword_masters,
            snapshot.fighting_books,
            snapshot.chapters,
            snapshot.techniques,
        ))
    }

    /// Builds a store directly from collections, without validation.
    ///
    /// Later entries win when two share an ID.
    pub fn from_collections(
        sword_masters: Vec<SwordMaster>,
        fighting_books: Vec<FightingBook>,
        chapters: Vec<Chapter>,
        techniques: Vec<Technique>,
    ) -> Self {
        Self {
            sword_masters: sword_masters.into_iter().map(|m| (m.id, m)).collect(),
            fighting_books: fighting_books.into_iter().map(|b| (b.id, b)).collect(),
            chapters: chapters.into_iter().map(|c| (c.id, c)).collect(),
            techniques: techniques.into_iter().map(|t| (t.id, t)).collect(),
        }
    }

    pub fn counts(&self) -> CatalogCounts {
        CatalogCounts {
            sword_masters: self.sword_masters.len(),
            fighting_books: self.fighting_books.len(),
            chapters: self.chapters.len(),
            techniques: self.techniques.len(),
        }
    }

    // =========================================================================
    // Fighting books
    // =========================================================================

    pub fn fighting_book_exists(&self, id: FightingBookId) -> bool {
        self.fighting_books.contains_key(&id)
    }

    /// Returns the book joined with its master's name, or `None` if the ID is unknown.
    pub fn get_fighting_book(&self, id: FightingBookId) -> Option<FightingBookWithMaster> {
        self.fighting_books.get(&id).map(|book| self.join_master(book))
    }

    /// Returns one page of books ordered by title, plus the total number of books.
    ///
    /// Titles compare byte-wise; equal titles fall back to ID order so repeated
    /// calls always agree. A window past the end yields an empty page.
    pub fn list_fighting_books(
        &self,
        params: &PageParams,
    ) -> (Vec<FightingBookWithMaster>, usize) {
        let total_count = self.fighting_books.len();

        let mut books: Vec<&FightingBook> = self.fighting_books.values().collect();
        books.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));

        let (start, end) = params.bounds(total_count);
        let page = books[start..end]
            .iter()
            .map(|book| self.join_master(book))
            .collect();

        (page, total_count)
    }

    fn join_master(&self, book: &FightingBook) -> FightingBookWithMaster {
        match self.sword_masters.get(&book.sword_master_id) {
            Some(master) => FightingBookWithMaster::new(book.clone(), master),
            None => {
                // Only reachable for stores built from unvalidated fixtures.
                tracing::warn!(
                    book_id = %book.id,
                    sword_master_id = %book.sword_master_id,
                    "Fighting book references unknown sword master"
                );
                FightingBookWithMaster {
                    book: book.clone(),
                    sword_master_name: String::new(),
                }
            }
        }
    }

    // =========================================================================
    // Chapters
    // =========================================================================

    pub fn chapter_exists(&self, id: ChapterId) -> bool {
        self.chapters.contains_key(&id)
    }

    /// Chapters of a book in reading order. Empty when the book has none or is unknown.
    pub fn list_chapters_by_book(&self, book_id: FightingBookId) -> Vec<Chapter> {
        let mut chapters: Vec<Chapter> = self
            .chapters
            .values()
            .filter(|c| c.fighting_book_id == book_id)
            .cloned()
            .collect();
        chapters.sort_by(|a, b| a.chapter_number.cmp(&b.chapter_number).then(a.id.cmp(&b.id)));
        chapters
    }

    // =========================================================================
    // Techniques
    // =========================================================================

    /// Techniques of a chapter in display order. Empty when the chapter has none or is unknown.
    pub fn list_techniques_by_chapter(&self, chapter_id: ChapterId) -> Vec<Technique> {
        let mut techniques: Vec<Technique> = self
            .techniques
            .values()
            .filter(|t| t.chapter_id == chapter_id)
            .cloned()
            .collect();
        techniques.sort_by(|a, b| {
            a.order_in_chapter
                .cmp(&b.order_in_chapter)
                .then(a.id.cmp(&b.id))
        });
        techniques
    }
}

#[async_trait]
impl CatalogRepo for CatalogStore {
    async fn fighting_book_exists(&self, id: FightingBookId) -> Result<bool, RepoError> {
        Ok(CatalogStore::fighting_book_exists(self, id))
    }

    async fn chapter_exists(&self, id: ChapterId) -> Result<bool, RepoError> {
        Ok(CatalogStore::chapter_exists(self, id))
    }

    async fn get_fighting_book(
        &self,
        id: FightingBookId,
    ) -> Result<Option<FightingBookWithMaster>, RepoError> {
        Ok(CatalogStore::get_fighting_book(self, id))
    }

    async fn list_fighting_books(
        &self,
        params: PageParams,
    ) -> Result<(Vec<FightingBookWithMaster>, usize), RepoError> {
        Ok(CatalogStore::list_fighting_books(self, &params))
    }

    async fn list_chapters_by_book(
        &self,
        book_id: FightingBookId,
    ) -> Result<Vec<Chapter>, RepoError> {
        Ok(CatalogStore::list_chapters_by_book(self, book_id))
    }

    async fn list_techniques_by_chapter(
        &self,
        chapter_id: ChapterId,
    ) -> Result<Vec<Technique>, RepoError> {
        Ok(CatalogStore::list_techniques_by_chapter(self, chapter_id))
    }

    async fn counts(&self) -> Result<CatalogCounts, RepoError> {
        Ok(CatalogStore::counts(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{self, book_id, chapter_id};

    fn titles(page: &[FightingBookWithMaster]) -> Vec<&str> {
        page.iter().map(|b| b.book.title.as_str()).collect()
    }

    #[test]
    fn existence_checks_match_loaded_ids() {
        let store = test_fixtures::treatise_store();

        assert!(store.fighting_book_exists(book_id(1)));
        assert!(store.fighting_book_exists(book_id(5)));
        assert!(!store.fighting_book_exists(book_id(6)));
        assert!(store.chapter_exists(chapter_id(10)));
        assert!(!store.chapter_exists(chapter_id(99)));
    }

    #[test]
    fn empty_store_knows_nothing() {
        let store = CatalogStore::default();

        assert!(!store.fighting_book_exists(book_id(1)));
        assert!(!store.chapter_exists(chapter_id(1)));
        assert!(store.get_fighting_book(book_id(1)).is_none());
        assert!(store.list_chapters_by_book(book_id(1)).is_empty());
        assert!(store.list_techniques_by_chapter(chapter_id(1)).is_empty());

        let (page, total) = store.list_fighting_books(&PageParams::default());
        assert!(page.is_empty());
        assert_eq!(total, 0);
        assert_eq!(store.counts(), CatalogCounts::default());
    }

    #[test]
    fn get_fighting_book_joins_master_name() {
        let store = test_fixtures::treatise_store();

        let book = store.get_fighting_book(book_id(3)).unwrap();
        assert_eq!(book.book.title, "Book C");
        assert_eq!(book.sword_master_name, "Test Master 2");
    }

    #[test]
    fn get_unknown_fighting_book_is_absent() {
        let store = test_fixtures::treatise_store();
        assert_eq!(store.get_fighting_book(book_id(42)), None);
    }

    #[test]
    fn second_page_of_two_returns_third_and_fourth_titles() {
        let store = test_fixtures::treatise_store();

        let (page, total) = store.list_fighting_books(&PageParams::new(2, 2));
        assert_eq!(titles(&page), vec!["Book C", "Book D"]);
        assert_eq!(total, 5);
        assert_eq!(page[0].sword_master_name, "Test Master 2");
    }

    #[test]
    fn last_partial_page_and_beyond() {
        let store = test_fixtures::treatise_store();

        let (page, total) = store.list_fighting_books(&PageParams::new(3, 2));
        assert_eq!(titles(&page), vec!["Book E"]);
        assert_eq!(total, 5);

        let (page, total) = store.list_fighting_books(&PageParams::new(10, 2));
        assert!(page.is_empty());
        assert_eq!(total, 5);
    }

    #[test]
    fn concatenated_pages_are_sorted_by_title() {
        let store = test_fixtures::treatise_store();

        let mut all = Vec::new();
        for page in 1..=5 {
            let (chunk, _) = store.list_fighting_books(&PageParams::new(page, 1));
            assert!(chunk.len() <= 1);
            all.extend(chunk);
        }

        assert_eq!(all.len(), 5);
        assert!(all.windows(2).all(|w| w[0].book.title <= w[1].book.title));
    }

    #[test]
    fn title_ordering_is_byte_wise() {
        let store = CatalogStore::from_collections(
            test_fixtures::masters(),
            vec![
                test_fixtures::book(1, 1, "apple"),
                test_fixtures::book(2, 1, "Zebra"),
                test_fixtures::book(3, 1, "Apple"),
            ],
            Vec::new(),
            Vec::new(),
        );

        let (page, _) = store.list_fighting_books(&PageParams::default());
        assert_eq!(titles(&page), vec!["Apple", "Zebra", "apple"]);
    }

    #[test]
    fn equal_titles_keep_a_stable_order() {
        let store = CatalogStore::from_collections(
            test_fixtures::masters(),
            vec![
                test_fixtures::book(7, 1, "Fechtbuch"),
                test_fixtures::book(2, 2, "Fechtbuch"),
                test_fixtures::book(4, 3, "Fechtbuch"),
            ],
            Vec::new(),
            Vec::new(),
        );

        let first = store.list_fighting_books(&PageParams::default());
        for _ in 0..10 {
            assert_eq!(store.list_fighting_books(&PageParams::default()), first);
        }
        let ids: Vec<i64> = first.0.iter().map(|b| b.book.id.get()).collect();
        assert_eq!(ids, vec![2, 4, 7]);
    }

    #[test]
    fn chapters_come_back_in_chapter_number_order() {
        let store = test_fixtures::treatise_store();

        let chapters = store.list_chapters_by_book(book_id(2));
        let numbers: Vec<u32> = chapters.iter().map(|c| c.chapter_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(chapters.iter().all(|c| c.fighting_book_id == book_id(2)));
    }

    #[test]
    fn chapters_of_childless_or_unknown_book_are_empty() {
        let store = test_fixtures::treatise_store();

        assert!(store.fighting_book_exists(book_id(4)));
        assert!(store.list_chapters_by_book(book_id(4)).is_empty());
        assert!(store.list_chapters_by_book(book_id(404)).is_empty());
    }

    #[test]
    fn techniques_come_back_in_display_order() {
        let store = test_fixtures::treatise_store();

        let techniques = store.list_techniques_by_chapter(chapter_id(10));
        let order: Vec<i32> = techniques.iter().map(|t| t.order_in_chapter).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(techniques[0].name, "Posta di Donna");
    }

    #[test]
    fn techniques_of_unknown_chapter_are_empty() {
        let store = test_fixtures::treatise_store();
        assert!(store.list_techniques_by_chapter(chapter_id(77)).is_empty());
    }

    #[test]
    fn book_with_missing_master_joins_empty_name() {
        let store = CatalogStore::from_collections(
            Vec::new(),
            vec![test_fixtures::book(1, 9, "Orphan")],
            Vec::new(),
            Vec::new(),
        );

        let book = store.get_fighting_book(book_id(1)).unwrap();
        assert_eq!(book.sword_master_name, "");
    }

    #[test]
    fn embedded_snapshot_builds_a_consistent_store() {
        let store = CatalogStore::load_embedded().unwrap();
        let counts = store.counts();
        assert!(counts.fighting_books > 0);

        let (books, total) = store.list_fighting_books(&PageParams::new(1, 100));
        assert_eq!(total, counts.fighting_books);
        assert!(books.iter().all(|b| !b.sword_master_name.is_empty()));
    }

    #[test]
    fn load_from_dir_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nowhere");
        assert!(matches!(
            CatalogStore::load_from_dir(missing),
            Err(LoadError::Read { .. })
        ));
    }

    #[tokio::test]
    async fn repo_port_delegates_to_store() {
        let store = test_fixtures::treatise_store();
        let repo: &dyn CatalogRepo = &store;

        assert!(repo.fighting_book_exists(book_id(1)).await.unwrap());
        assert!(!repo.chapter_exists(chapter_id(99)).await.unwrap());

        let (page, total) = repo
            .list_fighting_books(PageParams::new(1, 2))
            .await
            .unwrap();
        assert_eq!(titles(&page), vec!["Book A", "Book B"]);
        assert_eq!(total, 5);

        let chapters = repo.list_chapters_by_book(book_id(2)).await.unwrap();
        assert_eq!(chapters.len(), 3);

        let counts = repo.counts().await.unwrap();
        assert_eq!(counts.fighting_books, 5);
        assert_eq!(counts.sword_masters, 3);
    }
}
