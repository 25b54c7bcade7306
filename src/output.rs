use crate::chosung::get_chosung;
use crate::corpus::{BookId, BookMeta, Testament};
use crate::query::{ParsedQuery, SearchResult, SearchScope};
use chrono::Utc;
use clap::ValueEnum;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

const SCHEMA_VERSION: &str = "1.0.0";

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Pretty,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
            OutputFormat::Pretty => "pretty",
        };
        write!(f, "{}", value)
    }
}

impl OutputFormat {
    /// `json` and `pretty` both emit the envelope
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Pretty)
    }
}

#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub schema_version: &'static str,
    pub execution_id: String,
    pub tool: &'static str,
    pub timestamp: String,
    pub partial: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub error: String,
    pub message: String,
    pub remediation: Option<String>,
}

#[derive(Serialize)]
pub struct VerseMatch {
    pub match_id: String,
    pub book_id: BookId,
    pub book_name: String,
    pub chapter: u32,
    pub verse: u32,
    pub reference: String,
    pub text: String,
}

impl VerseMatch {
    pub fn from_result(translation_code: &str, result: SearchResult) -> Self {
        Self {
            match_id: match_id(translation_code, result.book_id, result.chapter, result.verse),
            reference: result.reference(),
            book_id: result.book_id,
            book_name: result.book_name,
            chapter: result.chapter,
            verse: result.verse,
            text: result.text,
        }
    }
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub parsed: ParsedQuery,
    pub scope: SearchScope,
    pub translation: String,
    pub results: Vec<VerseMatch>,
    /// Matches found before display truncation
    pub total_count: u64,
}

#[derive(Serialize)]
pub struct ParseResponse {
    pub query: String,
    pub parsed: ParsedQuery,
}

#[derive(Serialize)]
pub struct BookEntry {
    pub id: BookId,
    pub name: &'static str,
    pub abbr: &'static str,
    pub chosung: String,
    pub chapters: u32,
    pub testament: Testament,
}

impl From<&BookMeta> for BookEntry {
    fn from(book: &BookMeta) -> Self {
        Self {
            id: book.id,
            name: book.name,
            abbr: book.abbr,
            chosung: get_chosung(book.name),
            chapters: book.chapters,
            testament: book.testament(),
        }
    }
}

#[derive(Serialize)]
pub struct BooksResponse {
    pub books: Vec<BookEntry>,
    pub total_count: u64,
}

#[derive(Serialize)]
pub struct ResolveResponse {
    pub token: String,
    pub book: Option<BookEntry>,
}

#[derive(Serialize)]
pub struct TranslationStatus {
    pub code: &'static str,
    pub name: &'static str,
    pub default: bool,
    pub available: bool,
}

#[derive(Serialize)]
pub struct TranslationsResponse {
    pub data_dir: String,
    pub translations: Vec<TranslationStatus>,
}

pub fn json_response_with_partial<T>(data: T, partial: bool) -> JsonResponse<T> {
    JsonResponse {
        schema_version: SCHEMA_VERSION,
        execution_id: execution_id(),
        tool: "versegrep",
        timestamp: Utc::now().to_rfc3339(),
        partial,
        data,
    }
}

pub fn execution_id() -> String {
    let timestamp = Utc::now().timestamp();
    let pid = std::process::id();
    format!("{:x}-{:x}", timestamp, pid)
}

/// Stable id for a verse within a translation
pub fn match_id(translation_code: &str, book_id: BookId, chapter: u32, verse: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(translation_code.as_bytes());
    hasher.update(b":");
    hasher.update(book_id.to_string().as_bytes());
    hasher.update(b":");
    hasher.update(chapter.to_string().as_bytes());
    hasher.update(b":");
    hasher.update(verse.to_string().as_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..8])
}
