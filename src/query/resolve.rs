//! Turning a parsed query into verses.

use super::options::SearchScope;
use super::parse::{parse_query, ParsedQuery};
use crate::corpus::{book_name, BookId};
use crate::translation::{Book, Chapter, Translation, Verse};
use serde::Serialize;

/// Hard cap on keyword matches. Scanning stops as soon as it is reached.
pub const MAX_KEYWORD_RESULTS: usize = 3000;

/// One matching verse, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub book_id: BookId,
    pub book_name: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

impl SearchResult {
    fn new(book_id: BookId, book_name: &str, chapter: u32, verse: &Verse) -> Self {
        Self {
            book_id,
            book_name: book_name.to_string(),
            chapter,
            verse: verse.verse,
            text: verse.text.clone(),
        }
    }

    /// `창세기 1:1`
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book_name, self.chapter, self.verse)
    }
}

/// Parse `query` and resolve it against `translation`.
///
/// `scope` only narrows keyword searches.
pub fn search_bible(translation: &Translation, query: &str, scope: SearchScope) -> Vec<SearchResult> {
    resolve(translation, &parse_query(query), scope)
}

/// Resolve an already-parsed query. Misses of any kind yield an empty list.
pub fn resolve(translation: &Translation, parsed: &ParsedQuery, scope: SearchScope) -> Vec<SearchResult> {
    resolve_detailed(translation, parsed, scope).results
}

/// Matches plus whether a keyword scan stopped at [`MAX_KEYWORD_RESULTS`]
/// with verses in scope left unvisited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub results: Vec<SearchResult>,
    pub stopped_early: bool,
}

/// Like [`resolve`], but also reports an early keyword stop.
///
/// A keyword whose last match is the last verse in scope is complete even
/// when it yields exactly [`MAX_KEYWORD_RESULTS`] verses.
pub fn resolve_detailed(translation: &Translation, parsed: &ParsedQuery, scope: SearchScope) -> Resolution {
    match parsed {
        ParsedQuery::Keyword { keyword } => keyword_search(translation, keyword, scope),
        reference => Resolution {
            results: resolve_reference(translation, reference),
            stopped_early: false,
        },
    }
}

fn resolve_reference(translation: &Translation, parsed: &ParsedQuery) -> Vec<SearchResult> {
    let Some(book) = parsed.book_id().and_then(|id| translation.book(id)) else {
        return Vec::new();
    };
    let book_id = book.id;
    let emit = Emitter {
        book_id,
        name: book_name(book_id),
    };

    match *parsed {
        ParsedQuery::Book { .. } => book
            .chapters
            .iter()
            .flat_map(|c| emit.chapter(c, |_| true))
            .collect(),
        ParsedQuery::Chapter { chapter, .. } => match book.chapter(chapter) {
            Some(c) => emit.chapter(c, |_| true).collect(),
            None => Vec::new(),
        },
        ParsedQuery::ChapterRange {
            chapter_start,
            chapter_end,
            ..
        } => chapters_between(book, chapter_start, chapter_end)
            .flat_map(|c| emit.chapter(c, |_| true))
            .collect(),
        ParsedQuery::Verse { chapter, verse, .. } => book
            .chapter(chapter)
            .and_then(|c| c.verse(verse))
            .map(|v| vec![SearchResult::new(book_id, emit.name, chapter, v)])
            .unwrap_or_default(),
        ParsedQuery::Range {
            chapter,
            verse_start,
            verse_end,
            ..
        } => match book.chapter(chapter) {
            Some(c) => emit
                .chapter(c, move |v| (verse_start..=verse_end).contains(&v))
                .collect(),
            None => Vec::new(),
        },
        ParsedQuery::CrossChapterRange {
            chapter_start,
            verse_start,
            chapter_end,
            verse_end,
            ..
        } => chapters_between(book, chapter_start, chapter_end)
            .flat_map(|c| {
                let number = c.chapter;
                emit.chapter(c, move |v| {
                    !(number == chapter_start && v < verse_start)
                        && !(number == chapter_end && v > verse_end)
                })
            })
            .collect(),
        ParsedQuery::Keyword { .. } => Vec::new(),
    }
}

/// Chapters numbered within `[start, end]`, in stored order.
fn chapters_between(book: &Book, start: u32, end: u32) -> impl Iterator<Item = &Chapter> {
    book.chapters
        .iter()
        .filter(move |c| (start..=end).contains(&c.chapter))
}

struct Emitter {
    book_id: BookId,
    name: &'static str,
}

impl Emitter {
    fn chapter<'a, F>(&self, chapter: &'a Chapter, keep: F) -> impl Iterator<Item = SearchResult> + 'a
    where
        F: Fn(u32) -> bool + 'a,
    {
        let book_id = self.book_id;
        let name = self.name;
        let number = chapter.chapter;
        chapter
            .verses
            .iter()
            .filter(move |v| keep(v.verse))
            .map(move |v| SearchResult::new(book_id, name, number, v))
    }
}

fn keyword_search(translation: &Translation, keyword: &str, scope: SearchScope) -> Resolution {
    if keyword.is_empty() {
        return Resolution::default();
    }

    let mut verses = translation
        .books
        .iter()
        .filter(|b| scope.includes(b.id))
        .flat_map(|b| {
            b.chapters
                .iter()
                .flat_map(move |c| c.verses.iter().map(move |v| (b, c.chapter, v)))
        });

    let mut results = Vec::new();
    let mut scanned = 0usize;
    for (book, chapter, verse) in verses.by_ref() {
        scanned += 1;
        if !verse.text.contains(keyword) {
            continue;
        }
        results.push(SearchResult::new(book.id, &book.name, chapter, verse));
        if results.len() >= MAX_KEYWORD_RESULTS {
            break;
        }
    }

    // Only checks that a verse remains, never matches it.
    let stopped_early = results.len() >= MAX_KEYWORD_RESULTS && verses.next().is_some();
    if stopped_early {
        tracing::debug!(keyword, scanned, "keyword search stopped at the result cap");
    }
    Resolution {
        results,
        stopped_early,
    }
}
