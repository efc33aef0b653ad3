//! Catalog snapshot loading.
//!
//! A snapshot is four JSON arrays, one file per entity type. The bundled
//! snapshot is compiled into the binary; an external directory with the same
//! file names can replace it at startup.
//!
//! Loading is all-or-nothing: any unreadable file, parse failure, duplicate
//! ID or dangling parent reference aborts the whole load.

use std::collections::HashSet;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use hema_domain::{Chapter, DomainError, FightingBook, SwordMaster, Technique};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const SWORD_MASTERS_FILE: &str = "sword_masters.json";
pub const FIGHTING_BOOKS_FILE: &str = "fighting_books.json";
pub const CHAPTERS_FILE: &str = "chapters.json";
pub const TECHNIQUES_FILE: &str = "techniques.json";

const EMBEDDED_SWORD_MASTERS: &str = include_str!("../../data/sword_masters.json");
const EMBEDDED_FIGHTING_BOOKS: &str = include_str!("../../data/fighting_books.json");
const EMBEDDED_CHAPTERS: &str = include_str!("../../data/chapters.json");
const EMBEDDED_TECHNIQUES: &str = include_str!("../../data/techniques.json");

/// Where the catalog snapshot comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    /// The snapshot compiled into the binary.
    Embedded,
    /// A directory holding the four snapshot files.
    Directory(PathBuf),
}

/// Errors that abort catalog loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        source: serde_json::Error,
    },

    #[error("Duplicate {collection} id {id}")]
    DuplicateId { collection: &'static str, id: i64 },

    #[error("{collection} {id} references missing {field} {target}")]
    DanglingReference {
        collection: &'static str,
        id: i64,
        field: &'static str,
        target: i64,
    },

    #[error("Invalid {collection} {id}: {source}")]
    Invalid {
        collection: &'static str,
        id: i64,
        source: DomainError,
    },
}

/// Raw snapshot contents, validated but not yet indexed.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub sword_masters: Vec<SwordMaster>,
    pub fighting_books: Vec<FightingBook>,
    pub chapters: Vec<Chapter>,
    pub techniques: Vec<Technique>,
}

impl Snapshot {
    /// Reads and validates a snapshot from the given source.
    pub fn load(source: &SnapshotSource) -> Result<Self, LoadError> {
        let snapshot = match source {
            SnapshotSource::Embedded => Self::parse_embedded()?,
            SnapshotSource::Directory(dir) => Self::read_dir(dir)?,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn parse_embedded() -> Result<Self, LoadError> {
        Ok(Self {
            sword_masters: parse(SWORD_MASTERS_FILE, EMBEDDED_SWORD_MASTERS)?,
            fighting_books: parse(FIGHTING_BOOKS_FILE, EMBEDDED_FIGHTING_BOOKS)?,
            chapters: parse(CHAPTERS_FILE, EMBEDDED_CHAPTERS)?,
            techniques: parse(TECHNIQUES_FILE, EMBEDDED_TECHNIQUES)?,
        })
    }

    fn read_dir(dir: &Path) -> Result<Self, LoadError> {
        Ok(Self {
            sword_masters: read(dir, SWORD_MASTERS_FILE)?,
            fighting_books: read(dir, FIGHTING_BOOKS_FILE)?,
            chapters: read(dir, CHAPTERS_FILE)?,
            techniques: read(dir, TECHNIQUES_FILE)?,
        })
    }

    /// Checks ID uniqueness, parent references and per-entity invariants.
    pub fn validate(&self) -> Result<(), LoadError> {
        let masters = unique_ids("sword master", self.sword_masters.iter().map(|m| m.id))?;
        let books = unique_ids("fighting book", self.fighting_books.iter().map(|b| b.id))?;
        let chapters = unique_ids("chapter", self.chapters.iter().map(|c| c.id))?;
        unique_ids("technique", self.techniques.iter().map(|t| t.id))?;

        for book in &self.fighting_books {
            if !masters.contains(&book.sword_master_id) {
                return Err(LoadError::DanglingReference {
                    collection: "fighting book",
                    id: book.id.get(),
                    field: "sword_master_id",
                    target: book.sword_master_id.get(),
                });
            }
        }

        let mut numbering = HashSet::with_capacity(self.chapters.len());
        for chapter in &self.chapters {
            if !books.contains(&chapter.fighting_book_id) {
                return Err(LoadError::DanglingReference {
                    collection: "chapter",
                    id: chapter.id.get(),
                    field: "fighting_book_id",
                    target: chapter.fighting_book_id.get(),
                });
            }
            chapter.validate().map_err(|source| LoadError::Invalid {
                collection: "chapter",
                id: chapter.id.get(),
                source,
            })?;
            if !numbering.insert((chapter.fighting_book_id, chapter.chapter_number)) {
                return Err(LoadError::Invalid {
                    collection: "chapter",
                    id: chapter.id.get(),
                    source: DomainError::validation(format!(
                        "chapter_number {} is already used in fighting book {}",
                        chapter.chapter_number, chapter.fighting_book_id
                    )),
                });
            }
        }

        for technique in &self.techniques {
            if !chapters.contains(&technique.chapter_id) {
                return Err(LoadError::DanglingReference {
                    collection: "technique",
                    id: technique.id.get(),
                    field: "chapter_id",
                    target: technique.chapter_id.get(),
                });
            }
        }

        Ok(())
    }
}

fn parse<T: DeserializeOwned>(file: &'static str, contents: &str) -> Result<Vec<T>, LoadError> {
    serde_json::from_str(contents).map_err(|source| LoadError::Parse { file, source })
}

fn read<T: DeserializeOwned>(dir: &Path, file: &'static str) -> Result<Vec<T>, LoadError> {
    let path = dir.join(file);
    let contents =
        std::fs::read_to_string(&path).map_err(|source| LoadError::Read { path, source })?;
    parse(file, &contents)
}

fn unique_ids<I>(collection: &'static str, ids: I) -> Result<HashSet<I::Item>, LoadError>
where
    I: Iterator,
    I::Item: Copy + Eq + Hash + Into<i64>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(LoadError::DuplicateId {
                collection,
                id: id.into(),
            });
        }
    }
    Ok(seen)
}
