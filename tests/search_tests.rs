//! Search tests against an on-disk translation fixture.
//!
//! Tests for:
//! - Loading a translation through DirectoryProvider
//! - Reference round trips for every verse in the fixture
//! - Keyword scope filtering and ordering
//! - Concurrent searches over one shared translation

use std::path::PathBuf;
use std::sync::Arc;
use versegrep::{
    get_chosung, parse_query, resolve_book, search_bible, DirectoryProvider, ParsedQuery,
    SearchScope, Translation, TranslationProvider, BOOKS,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture() -> Arc<Translation> {
    let provider = DirectoryProvider::open(fixtures_dir()).expect("fixtures dir");
    provider.load("tst").expect("load tst fixture")
}

#[test]
fn test_fixture_loads_with_optional_fields() {
    let bible = load_fixture();
    assert_eq!(bible.code, "tst");
    assert_eq!(bible.name, "테스트역");
    assert_eq!(bible.verse_count(), 15);

    let genesis = bible.book(1).unwrap();
    let first = genesis.chapter(1).and_then(|c| c.verse(1)).unwrap();
    assert_eq!(first.heading.as_deref(), Some("천지 창조"));

    let john = bible.book(43).unwrap();
    let footnotes = &john.chapter(3).and_then(|c| c.verse(16)).unwrap().footnotes;
    assert_eq!(footnotes[0].word, "독생자");
}

#[test]
fn test_every_verse_round_trips_by_reference() {
    let bible = load_fixture();
    for book in &bible.books {
        for chapter in &book.chapters {
            for verse in &chapter.verses {
                let query = format!("{} {}:{}", book.abbr, chapter.chapter, verse.verse);
                let results = search_bible(&bible, &query, SearchScope::All);
                assert_eq!(results.len(), 1, "query {}", query);
                assert_eq!(results[0].text, verse.text, "query {}", query);
            }
        }
    }
}

#[test]
fn test_verses_found_by_value_despite_gaps() {
    // 룻기 1 starts at verse 16 in the fixture
    let bible = load_fixture();
    let results = search_bible(&bible, "룻기 1장 17절", SearchScope::All);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].verse, 17);
    assert_eq!(search_bible(&bible, "룻 1", SearchScope::All).len(), 2);
    assert!(search_bible(&bible, "룻 1:1", SearchScope::All).is_empty());
}

#[test]
fn test_chosung_book_query() {
    let bible = load_fixture();
    let results = search_bible(&bible, "ㅊㅅㄱ", SearchScope::All);
    assert_eq!(results.len(), 8);
    assert!(results.iter().all(|r| r.book_name == "창세기"));
}

#[test]
fn test_cross_chapter_range_order() {
    let bible = load_fixture();
    let results = search_bible(&bible, "창 1:4-2:2", SearchScope::All);
    let positions: Vec<_> = results.iter().map(|r| (r.chapter, r.verse)).collect();
    assert_eq!(positions, vec![(1, 4), (1, 5), (2, 1), (2, 2)]);
}

#[test]
fn test_keyword_scope() {
    let bible = load_fixture();

    let all = search_bible(&bible, "사랑", SearchScope::All);
    let ids: Vec<_> = all.iter().map(|r| r.book_id).collect();
    assert_eq!(ids, vec![22, 43, 62, 62]);

    let old = search_bible(&bible, "사랑", SearchScope::Old);
    assert_eq!(old.len(), 1);
    assert!(old.iter().all(|r| r.book_id <= 39));

    let new = search_bible(&bible, "사랑", SearchScope::New);
    assert_eq!(new.len(), 3);
    assert!(new.iter().all(|r| r.book_id > 39));

    let one = search_bible(&bible, "사랑", SearchScope::Book(62));
    assert_eq!(one.len(), 2);
}

#[test]
fn test_keyword_counts_and_order() {
    let bible = load_fixture();
    let results = search_bible(&bible, "하나님", SearchScope::All);
    assert_eq!(results.len(), 11);
    let ids: Vec<_> = results.iter().map(|r| r.book_id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted, "keyword results follow canonical order");
    assert_eq!(search_bible(&bible, "하나님", SearchScope::Old).len(), 7);
}

#[test]
fn test_keyword_is_case_and_spacing_exact() {
    let bible = load_fixture();
    assert!(search_bible(&bible, "하 나 님", SearchScope::All).is_empty());
    assert!(search_bible(&bible, "사랑하사독생자", SearchScope::All).is_empty());
}

#[test]
fn test_out_of_range_reference_is_empty() {
    let bible = load_fixture();
    for query in ["창 9999", "창 9999:1", "창 1:9999", "창 50-60", "요 3:16-2:1"] {
        assert!(search_bible(&bible, query, SearchScope::All).is_empty(), "{}", query);
    }
}

#[test]
fn test_every_book_resolves_by_name_and_abbr() {
    for book in BOOKS.iter() {
        assert_eq!(resolve_book(book.name), Some(book.id));
        assert_eq!(resolve_book(book.abbr), Some(book.id));
        assert_eq!(parse_query(book.name), ParsedQuery::Book { book_id: book.id });
    }
}

#[test]
fn test_chosung_of_every_name_resolves_to_some_book() {
    for book in BOOKS.iter() {
        let chosung = get_chosung(book.name);
        let resolved = resolve_book(&chosung).expect("chosung of a name always resolves");
        assert_eq!(get_chosung(versegrep::book_name(resolved)), chosung);
    }
}

#[test]
fn test_concurrent_searches_share_one_tree() {
    let bible = load_fixture();
    let expected = search_bible(&bible, "하나님", SearchScope::All);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let bible = Arc::clone(&bible);
                s.spawn(move || search_bible(&bible, "하나님", SearchScope::All))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_provider_returns_same_tree() {
    let provider = DirectoryProvider::open(fixtures_dir()).unwrap();
    let first = provider.load("tst").unwrap();
    let second = provider.load("tst").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}
