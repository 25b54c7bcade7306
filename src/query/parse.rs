//! Query classification.
//!
//! A raw query is tried against an ordered list of matchers, most specific
//! first. A matcher only succeeds when its pattern matches *and* its leading
//! book token resolves; otherwise the next, looser matcher gets a turn.
//! Anything left over is a keyword query.

use crate::corpus::{resolve_book, BookId};
use regex::{Captures, Regex};
use serde::Serialize;
use std::sync::LazyLock;

/// The shape of a query after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ParsedQuery {
    /// Whole book, e.g. `창세기`, `ㅊㅅㄱ`
    Book { book_id: BookId },
    /// e.g. `창 1`, `창세기 1장`
    Chapter { book_id: BookId, chapter: u32 },
    /// e.g. `창 1-3`
    ChapterRange {
        book_id: BookId,
        chapter_start: u32,
        chapter_end: u32,
    },
    /// e.g. `창 1:1`, `창세기 1장 1절`
    Verse {
        book_id: BookId,
        chapter: u32,
        verse: u32,
    },
    /// e.g. `창 1:1-10`
    Range {
        book_id: BookId,
        chapter: u32,
        verse_start: u32,
        verse_end: u32,
    },
    /// e.g. `창1:2-2:2`
    CrossChapterRange {
        book_id: BookId,
        chapter_start: u32,
        verse_start: u32,
        chapter_end: u32,
        verse_end: u32,
    },
    Keyword { keyword: String },
}

impl ParsedQuery {
    pub fn mode(&self) -> &'static str {
        match self {
            ParsedQuery::Book { .. } => "book",
            ParsedQuery::Chapter { .. } => "chapter",
            ParsedQuery::ChapterRange { .. } => "chapterRange",
            ParsedQuery::Verse { .. } => "verse",
            ParsedQuery::Range { .. } => "range",
            ParsedQuery::CrossChapterRange { .. } => "crossChapterRange",
            ParsedQuery::Keyword { .. } => "keyword",
        }
    }

    /// Book addressed by a reference query; `None` for keyword queries.
    pub fn book_id(&self) -> Option<BookId> {
        match self {
            ParsedQuery::Book { book_id }
            | ParsedQuery::Chapter { book_id, .. }
            | ParsedQuery::ChapterRange { book_id, .. }
            | ParsedQuery::Verse { book_id, .. }
            | ParsedQuery::Range { book_id, .. }
            | ParsedQuery::CrossChapterRange { book_id, .. } => Some(*book_id),
            ParsedQuery::Keyword { .. } => None,
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, ParsedQuery::Keyword { .. })
    }
}

type Matcher = fn(&str) -> Option<ParsedQuery>;

/// Precedence order; the first matcher to return a value wins.
const MATCHERS: [Matcher; 6] = [
    match_cross_chapter_range,
    match_verse_range,
    match_verse,
    match_chapter_range,
    match_chapter,
    match_book,
];

// `(.+?)` is the book token; digits are ASCII only so captures always parse.
static CROSS_CHAPTER_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(.+?)\s*([0-9]+)\s*[:장]\s*([0-9]+)\s*절?\s*[-~]\s*([0-9]+)\s*[:장]\s*([0-9]+)\s*절?$")
});
static VERSE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(.+?)\s*([0-9]+)\s*[:장]\s*([0-9]+)\s*[-~]\s*([0-9]+)\s*절?$")
});
static VERSE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(.+?)\s*([0-9]+)\s*[:장]\s*([0-9]+)\s*절?$"));
static CHAPTER_RANGE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(.+?)\s*([0-9]+)\s*[-~]\s*([0-9]+)\s*장?$"));
static CHAPTER: LazyLock<Regex> = LazyLock::new(|| compile(r"^(.+?)\s*([0-9]+)\s*장?$"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("reference pattern must compile")
}

/// Classify a raw query string.
///
/// Never fails: anything that is not a resolvable reference becomes a
/// keyword query, and blank input becomes an empty keyword.
///
/// ```
/// use versegrep::{parse_query, ParsedQuery};
///
/// assert_eq!(
///     parse_query("창 1:1-10"),
///     ParsedQuery::Range { book_id: 1, chapter: 1, verse_start: 1, verse_end: 10 }
/// );
/// assert_eq!(
///     parse_query("사랑"),
///     ParsedQuery::Keyword { keyword: "사랑".to_string() }
/// );
/// ```
pub fn parse_query(raw: &str) -> ParsedQuery {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedQuery::Keyword {
            keyword: String::new(),
        };
    }

    let parsed = MATCHERS
        .iter()
        .find_map(|matcher| matcher(trimmed))
        .unwrap_or_else(|| ParsedQuery::Keyword {
            keyword: trimmed.to_string(),
        });
    tracing::debug!(query = trimmed, mode = parsed.mode(), "classified query");
    parsed
}

/// Resolve capture group 1 as a book token.
fn book_token(caps: &Captures<'_>) -> Option<BookId> {
    resolve_book(caps.get(1)?.as_str().trim())
}

/// Numeric capture. The pattern only admits ASCII digits, so the one way
/// to fail is overflow, which saturates.
fn number(caps: &Captures<'_>, group: usize) -> u32 {
    caps.get(group)
        .map(|m| m.as_str().parse().unwrap_or(u32::MAX))
        .unwrap_or(0)
}

pub(crate) fn match_cross_chapter_range(input: &str) -> Option<ParsedQuery> {
    let caps = CROSS_CHAPTER_RANGE.captures(input)?;
    let book_id = book_token(&caps)?;
    Some(ParsedQuery::CrossChapterRange {
        book_id,
        chapter_start: number(&caps, 2),
        verse_start: number(&caps, 3),
        chapter_end: number(&caps, 4),
        verse_end: number(&caps, 5),
    })
}

pub(crate) fn match_verse_range(input: &str) -> Option<ParsedQuery> {
    let caps = VERSE_RANGE.captures(input)?;
    let book_id = book_token(&caps)?;
    Some(ParsedQuery::Range {
        book_id,
        chapter: number(&caps, 2),
        verse_start: number(&caps, 3),
        verse_end: number(&caps, 4),
    })
}

pub(crate) fn match_verse(input: &str) -> Option<ParsedQuery> {
    let caps = VERSE.captures(input)?;
    let book_id = book_token(&caps)?;
    Some(ParsedQuery::Verse {
        book_id,
        chapter: number(&caps, 2),
        verse: number(&caps, 3),
    })
}

pub(crate) fn match_chapter_range(input: &str) -> Option<ParsedQuery> {
    let caps = CHAPTER_RANGE.captures(input)?;
    let book_id = book_token(&caps)?;
    Some(ParsedQuery::ChapterRange {
        book_id,
        chapter_start: number(&caps, 2),
        chapter_end: number(&caps, 3),
    })
}

pub(crate) fn match_chapter(input: &str) -> Option<ParsedQuery> {
    let caps = CHAPTER.captures(input)?;
    let book_id = book_token(&caps)?;
    Some(ParsedQuery::Chapter {
        book_id,
        chapter: number(&caps, 2),
    })
}

pub(crate) fn match_book(input: &str) -> Option<ParsedQuery> {
    resolve_book(input).map(|book_id| ParsedQuery::Book { book_id })
}
