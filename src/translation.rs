//! Translation data model and providers.
//!
//! A translation is a read-only book/chapter/verse tree. Search only ever
//! borrows it, so providers hand out `Arc<Translation>` and every caller
//! shares the same loaded tree.
//!
//! # On-disk format
//!
//! [`DirectoryProvider`] reads `<root>/<code>.json`:
//!
//! ```json
//! {
//!   "translation": "개역개정",
//!   "code": "krv",
//!   "books": [
//!     { "id": 1, "name": "창세기", "abbr": "창",
//!       "chapters": [ { "chapter": 1, "verses": [ { "verse": 1, "text": "..." } ] } ] }
//!   ]
//! }
//! ```
//!
//! Verses may also carry `heading` and `footnotes`.

use crate::corpus::{book_by_id, BookId};
use crate::error::VerseError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub const DEFAULT_TRANSLATION_CODE: &str = "krv";

/// Catalog entry for a known translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TranslationInfo {
    pub code: &'static str,
    pub name: &'static str,
}

pub const TRANSLATIONS: [TranslationInfo; 3] = [
    TranslationInfo {
        code: "krv",
        name: "개역개정",
    },
    TranslationInfo {
        code: "kov",
        name: "개역한글",
    },
    TranslationInfo {
        code: "nkrv",
        name: "표준새번역",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footnote {
    pub marker: String,
    pub word: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub verse: u32,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub footnotes: Vec<Footnote>,
}

impl Verse {
    pub fn new(verse: u32, text: impl Into<String>) -> Self {
        Self {
            verse,
            text: text.into(),
            heading: None,
            footnotes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub chapter: u32,
    pub verses: Vec<Verse>,
}

impl Chapter {
    pub fn verse(&self, number: u32) -> Option<&Verse> {
        self.verses.iter().find(|v| v.verse == number)
    }
}

/// One book's subtree within a translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub abbr: String,
    pub chapters: Vec<Chapter>,
}

impl Book {
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.chapter == number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    #[serde(rename = "translation")]
    pub name: String,
    pub code: String,
    pub books: Vec<Book>,
}

impl Translation {
    pub fn from_json_str(code: &str, json: &str) -> Result<Self, VerseError> {
        serde_json::from_str(json).map_err(|e| VerseError::TranslationCorrupted {
            code: code.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn verse_count(&self) -> usize {
        self.books
            .iter()
            .flat_map(|b| b.chapters.iter())
            .map(|c| c.verses.len())
            .sum()
    }

    /// Log data-quality problems that search tolerates but callers should know about.
    fn audit(&self, requested: &str) {
        if self.code != requested {
            tracing::warn!(
                requested,
                found = %self.code,
                "translation file declares a different code"
            );
        }
        for book in &self.books {
            if book_by_id(book.id).is_none() {
                tracing::warn!(
                    code = %self.code,
                    book_id = book.id,
                    name = %book.name,
                    "book id outside the 66-book canon; it is only reachable by keyword"
                );
            }
        }
    }
}

/// Source of loaded translation trees.
///
/// Implementations must return a tree that stays unchanged for as long as
/// any caller holds the `Arc`.
pub trait TranslationProvider: Send + Sync {
    fn load(&self, code: &str) -> Result<Arc<Translation>, VerseError>;
}

/// Loads `<root>/<code>.json` and keeps every successfully loaded tree.
pub struct DirectoryProvider {
    root: PathBuf,
    cache: Mutex<HashMap<String, Arc<Translation>>>,
}

impl DirectoryProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Like [`DirectoryProvider::new`], but fails up front when `root` is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, VerseError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(VerseError::InvalidPath {
                path: root.display().to_string(),
            });
        }
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, code: &str) -> Result<PathBuf, VerseError> {
        validate_code(code)?;
        Ok(self.root.join(format!("{}.json", code)))
    }

    pub fn is_available(&self, code: &str) -> bool {
        self.path_for(code).map(|p| p.is_file()).unwrap_or(false)
    }

    fn cached(&self, code: &str) -> Option<Arc<Translation>> {
        let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.get(code).cloned()
    }
}

impl TranslationProvider for DirectoryProvider {
    fn load(&self, code: &str) -> Result<Arc<Translation>, VerseError> {
        if let Some(translation) = self.cached(code) {
            return Ok(translation);
        }

        let path = self.path_for(code)?;
        if !path.is_file() {
            return Err(VerseError::TranslationNotFound {
                code: code.to_string(),
                path: path.display().to_string(),
            });
        }
        let json = std::fs::read_to_string(&path)?;
        let translation = Translation::from_json_str(code, &json)?;
        translation.audit(code);
        tracing::info!(
            code,
            name = %translation.name,
            books = translation.books.len(),
            verses = translation.verse_count(),
            "loaded translation"
        );

        // Two threads may race to load the same code; the first insert wins
        // so every caller ends up sharing one tree.
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        let shared = cache
            .entry(code.to_string())
            .or_insert_with(|| Arc::new(translation))
            .clone();
        Ok(shared)
    }
}

fn validate_code(code: &str) -> Result<(), VerseError> {
    let valid = !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(VerseError::InvalidTranslationCode {
            code: code.to_string(),
        })
    }
}
