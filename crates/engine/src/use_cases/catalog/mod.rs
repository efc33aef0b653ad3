//! Catalog use cases.
//!
//! Browsing the treatise catalog: paginated book listing, book detail,
//! chapters of a book and techniques of a chapter. Listing children of a
//! parent first checks the parent exists, so an unknown parent is reported
//! as not found rather than as an empty list.

use std::sync::Arc;

use hema_domain::{
    Chapter, ChapterId, FightingBookId, FightingBookWithMaster, Page, PageParams, Technique,
};

use crate::infrastructure::ports::{CatalogCounts, CatalogRepo, RepoError};

/// Container for catalog use cases.
pub struct CatalogUseCases {
    pub browse: Arc<BrowseCatalog>,
}

impl CatalogUseCases {
    pub fn new(browse: Arc<BrowseCatalog>) -> Self {
        Self { browse }
    }
}

/// Read-only catalog queries.
pub struct BrowseCatalog {
    repo: Arc<dyn CatalogRepo>,
}

impl BrowseCatalog {
    pub fn new(repo: Arc<dyn CatalogRepo>) -> Self {
        Self { repo }
    }

    pub async fn list_fighting_books(
        &self,
        params: PageParams,
    ) -> Result<Page<FightingBookWithMaster>, CatalogError> {
        let (books, total_count) = self.repo.list_fighting_books(params).await?;
        Ok(Page::new(books, &params, total_count))
    }

    pub async fn get_fighting_book(
        &self,
        id: FightingBookId,
    ) -> Result<FightingBookWithMaster, CatalogError> {
        self.repo
            .get_fighting_book(id)
            .await?
            .ok_or(CatalogError::FightingBookNotFound(id))
    }

    pub async fn list_chapters(&self, book_id: FightingBookId) -> Result<Vec<Chapter>, CatalogError> {
        if !self.repo.fighting_book_exists(book_id).await? {
            return Err(CatalogError::FightingBookNotFound(book_id));
        }
        Ok(self.repo.list_chapters_by_book(book_id).await?)
    }

    pub async fn list_techniques(
        &self,
        chapter_id: ChapterId,
    ) -> Result<Vec<Technique>, CatalogError> {
        if !self.repo.chapter_exists(chapter_id).await? {
            return Err(CatalogError::ChapterNotFound(chapter_id));
        }
        Ok(self.repo.list_techniques_by_chapter(chapter_id).await?)
    }

    pub async fn counts(&self) -> Result<CatalogCounts, CatalogError> {
        Ok(self.repo.counts().await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Fighting book not found: {0}")]
    FightingBookNotFound(FightingBookId),
    #[error("Chapter not found: {0}")]
    ChapterNotFound(ChapterId),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockCatalogRepo;
    use crate::test_fixtures::{self, book_id, chapter_id};
    use mockall::predicate::*;

    fn browse(repo: MockCatalogRepo) -> BrowseCatalog {
        BrowseCatalog::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn list_wraps_page_with_totals() {
        let mut repo = MockCatalogRepo::new();
        let params = PageParams::new(2, 2);
        repo.expect_list_fighting_books()
            .with(eq(params))
            .returning(|_| {
                Ok((
                    vec![
                        test_fixtures::joined_book(3, "Book C", "Test Master 2"),
                        test_fixtures::joined_book(4, "Book D", "Test Master 3"),
                    ],
                    5,
                ))
            });

        let page = browse(repo).list_fighting_books(params).await.unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.page, 2);
        assert_eq!(page.page_size, 2);
        assert_eq!(page.total_count, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn empty_catalog_still_reports_one_page() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_list_fighting_books()
            .returning(|_| Ok((Vec::new(), 0)));

        let page = browse(repo)
            .list_fighting_books(PageParams::default())
            .await
            .unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn get_missing_book_is_not_found() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_fighting_book()
            .with(eq(book_id(9)))
            .returning(|_| Ok(None));

        let err = browse(repo).get_fighting_book(book_id(9)).await.unwrap_err();
        assert!(matches!(err, CatalogError::FightingBookNotFound(id) if id == book_id(9)));
    }

    #[tokio::test]
    async fn chapters_of_unknown_book_are_not_listed() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_fighting_book_exists()
            .with(eq(book_id(404)))
            .returning(|_| Ok(false));
        repo.expect_list_chapters_by_book().never();

        let err = browse(repo).list_chapters(book_id(404)).await.unwrap_err();
        assert!(matches!(err, CatalogError::FightingBookNotFound(_)));
    }

    #[tokio::test]
    async fn chapters_of_known_book_may_be_empty() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_fighting_book_exists().returning(|_| Ok(true));
        repo.expect_list_chapters_by_book()
            .with(eq(book_id(4)))
            .returning(|_| Ok(Vec::new()));

        let chapters = browse(repo).list_chapters(book_id(4)).await.unwrap();
        assert!(chapters.is_empty());
    }

    #[tokio::test]
    async fn techniques_of_unknown_chapter_are_not_found() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_chapter_exists().returning(|_| Ok(false));
        repo.expect_list_techniques_by_chapter().never();

        let err = browse(repo).list_techniques(chapter_id(99)).await.unwrap_err();
        assert!(matches!(err, CatalogError::ChapterNotFound(id) if id == chapter_id(99)));
    }

    #[tokio::test]
    async fn techniques_come_from_repo() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_chapter_exists().returning(|_| Ok(true));
        repo.expect_list_techniques_by_chapter()
            .with(eq(chapter_id(10)))
            .returning(|_| Ok(test_fixtures::techniques()[..1].to_vec()));

        let techniques = browse(repo).list_techniques(chapter_id(10)).await.unwrap();
        assert_eq!(techniques.len(), 1);
    }

    #[tokio::test]
    async fn repo_failures_propagate() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_fighting_book_exists()
            .returning(|_| Err(RepoError::database("fighting_book_exists", "boom")));

        let err = browse(repo).list_chapters(book_id(1)).await.unwrap_err();
        assert!(matches!(err, CatalogError::Repo(_)));
    }

    #[tokio::test]
    async fn real_store_behind_the_port() {
        let browse = BrowseCatalog::new(Arc::new(test_fixtures::treatise_store()));

        let chapters = browse.list_chapters(book_id(2)).await.unwrap();
        assert_eq!(chapters.len(), 3);

        let counts = browse.counts().await.unwrap();
        assert_eq!(counts.fighting_books, 5);
    }
}
