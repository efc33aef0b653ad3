//! Repository port traits for catalog access.

use async_trait::async_trait;
use hema_domain::{
    Chapter, ChapterId, FightingBookId, FightingBookWithMaster, PageParams, Technique,
};
use serde::Serialize;

use super::error::RepoError;

/// Number of records held per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogCounts {
    pub sword_masters: usize,
    pub fighting_books: usize,
    pub chapters: usize,
    pub techniques: usize,
}

/// Read-only catalog queries.
///
/// Mirrors relational semantics: existence checks are separate from listing,
/// and paginated listings report the unfiltered total alongside the page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepo: Send + Sync {
    async fn fighting_book_exists(&self, id: FightingBookId) -> Result<bool, RepoError>;
    async fn chapter_exists(&self, id: ChapterId) -> Result<bool, RepoError>;

    async fn get_fighting_book(
        &self,
        id: FightingBookId,
    ) -> Result<Option<FightingBookWithMaster>, RepoError>;

    /// Returns one page of books ordered by title plus the total number of books.
    async fn list_fighting_books(
        &self,
        params: PageParams,
    ) -> Result<(Vec<FightingBookWithMaster>, usize), RepoError>;

    /// Chapters of a book ordered by `chapter_number`; empty when the book is unknown.
    async fn list_chapters_by_book(
        &self,
        book_id: FightingBookId,
    ) -> Result<Vec<Chapter>, RepoError>;

    /// Techniques of a chapter ordered by `order_in_chapter`; empty when the chapter is unknown.
    async fn list_techniques_by_chapter(
        &self,
        chapter_id: ChapterId,
    ) -> Result<Vec<Technique>, RepoError>;

    async fn counts(&self) -> Result<CatalogCounts, RepoError>;
}
