//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::SecondsFormat;
use serde::Serialize;
use std::sync::Arc;

use crate::app::App;
use crate::infrastructure::ports::CatalogCounts;
use crate::use_cases::catalog::CatalogError;
use hema_domain::{
    Chapter, ChapterId, FightingBookId, FightingBookWithMaster, Page, PageParams, Technique,
};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/healthz", get(health))
        .route("/api/fighting-books", get(list_fighting_books))
        .route("/api/fighting-books/", get(list_fighting_books))
        .route("/api/fighting-books/{id}", get(get_fighting_book))
        .route("/api/fighting-books/{id}/", get(invalid_book_id))
        .route("/api/fighting-books/{id}/chapters", get(list_chapters))
        .route("/api/fighting-books//chapters", get(invalid_book_id))
        .route("/api/chapters/{id}/techniques", get(list_techniques))
        .route("/api/chapters//techniques", get(invalid_chapter_id))
        .fallback(not_found)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
    counts: CatalogCounts,
}

async fn health(State(app): State<Arc<App>>) -> Result<Json<HealthResponse>, ApiError> {
    let counts = app.use_cases.catalog.browse.counts().await.map_err(|e| {
        tracing::error!(error = %e, "Health check failed");
        ApiError::Unavailable("catalog unhealthy")
    })?;

    let status = if app.environment.is_development() {
        format!("ok ({})", app.environment)
    } else {
        "ok".to_string()
    };

    Ok(Json(HealthResponse {
        status,
        timestamp: app
            .clock
            .now()
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        counts,
    }))
}

// =============================================================================
// Fighting books
// =============================================================================

/// Raw query pairs. Extracted as a list so repeated or malformed keys never
/// reject the request; the first occurrence of a key wins.
type QueryPairs = Vec<(String, String)>;

fn first_value<'a>(pairs: &'a QueryPairs, key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

async fn list_fighting_books(
    State(app): State<Arc<App>>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<Page<FightingBookWithMaster>>, ApiError> {
    let params = PageParams::parse(first_value(&query, "page"), first_value(&query, "page_size"));
    let page = app
        .use_cases
        .catalog
        .browse
        .list_fighting_books(params)
        .await?;
    Ok(Json(page))
}

async fn get_fighting_book(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<FightingBookWithMaster>, ApiError> {
    let id = parse_book_id(&id)?;
    let book = app.use_cases.catalog.browse.get_fighting_book(id).await?;
    Ok(Json(book))
}

async fn list_chapters(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Chapter>>, ApiError> {
    let id = parse_book_id(&id)?;
    let chapters = app.use_cases.catalog.browse.list_chapters(id).await?;
    Ok(Json(chapters))
}

// =============================================================================
// Chapters
// =============================================================================

async fn list_techniques(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Technique>>, ApiError> {
    let id = id
        .parse::<ChapterId>()
        .map_err(|_| ApiError::BadRequest("invalid chapter ID"))?;
    let techniques = app.use_cases.catalog.browse.list_techniques(id).await?;
    Ok(Json(techniques))
}

fn parse_book_id(raw: &str) -> Result<FightingBookId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest("invalid fighting book ID"))
}

/// Paths whose ID segment is empty or carries a trailing slash.
async fn invalid_book_id() -> ApiError {
    ApiError::BadRequest("invalid fighting book ID")
}

async fn invalid_chapter_id() -> ApiError {
    ApiError::BadRequest("invalid chapter ID")
}

async fn not_found() -> ApiError {
    ApiError::NotFound("not found")
}

// =============================================================================
// Errors
// =============================================================================

/// Handler errors. Bodies are short plain-text messages.
#[derive(Debug)]
pub enum ApiError {
    NotFound(&'static str),
    BadRequest(&'static str),
    Unavailable(&'static str),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg).into_response(),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::FightingBookNotFound(_) => ApiError::NotFound("fighting book not found"),
            CatalogError::ChapterNotFound(_) => ApiError::NotFound("chapter not found"),
            CatalogError::Repo(e) => ApiError::Internal(e.to_string()),
        }
    }
}
