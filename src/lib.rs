//! versegrep - Reference-aware verse search over Korean Bible translations.
//!
//! A single free-form query can be a scripture reference (`창 1:1-10`,
//! `창세기 1장 1절`, `창1:2-2:2`), a bare book (`로마서`, `롬`, `ㄹㅁㅅ`) or
//! a keyword (`사랑`). The query is classified once and resolved against an
//! in-memory translation tree.
//!
//! # Quick Start
//!
//! ```no_run
//! use versegrep::{search_bible, DirectoryProvider, SearchScope, TranslationProvider};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = DirectoryProvider::open("data")?;
//! let bible = provider.load("krv")?;
//! for hit in search_bible(&bible, "요 3:16", SearchScope::All) {
//!     println!("{} {}", hit.reference(), hit.text);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`chosung`] - Hangul initial-consonant extraction
//! - [`corpus`] - The 66-book catalog and book-token resolution
//! - [`query`] - Query classification and search resolution
//! - [`translation`] - Translation data model and providers
//! - [`error`] - Error types
//! - [`output`] - Response types and formatting

pub mod chosung;
pub mod corpus;
pub mod error;
pub mod output;
pub mod output_common;
pub mod query;
pub mod translation;

pub use chosung::{get_chosung, is_chosung};
pub use corpus::{book_by_id, book_name, resolve_book, BookId, BookMeta, Testament, BOOKS};
pub use error::VerseError;
pub use query::{
    parse_query, resolve, resolve_detailed, search_bible, ParsedQuery, Resolution, SearchResult,
    SearchScope, MAX_KEYWORD_RESULTS,
};
pub use translation::{
    Book, Chapter, DirectoryProvider, Footnote, Translation, TranslationProvider, Verse,
    DEFAULT_TRANSLATION_CODE, TRANSLATIONS,
};
