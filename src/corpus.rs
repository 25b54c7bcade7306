//! Canonical book catalog and book-token resolution.
//!
//! Every translation shares the same 66-book addressing scheme, so the
//! catalog is a fixed table. The three lookup tables (full name,
//! abbreviation, chosung) are built on first use and are read-only after.

use crate::chosung::{get_chosung, is_chosung};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Canonical book number, 1..=66.
pub type BookId = u8;

pub const OLD_TESTAMENT_COUNT: usize = 39;
pub const NEW_TESTAMENT_COUNT: usize = 27;

/// Static metadata for one book of the canon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookMeta {
    pub id: BookId,
    pub name: &'static str,
    pub abbr: &'static str,
    pub chapters: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Testament {
    Old,
    New,
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Testament::Old => write!(f, "old"),
            Testament::New => write!(f, "new"),
        }
    }
}

impl Testament {
    pub fn of(id: BookId) -> Testament {
        if usize::from(id) <= OLD_TESTAMENT_COUNT {
            Testament::Old
        } else {
            Testament::New
        }
    }
}

impl BookMeta {
    pub fn testament(&self) -> Testament {
        Testament::of(self.id)
    }
}

const fn book(id: BookId, name: &'static str, abbr: &'static str, chapters: u32) -> BookMeta {
    BookMeta {
        id,
        name,
        abbr,
        chapters,
    }
}

#[rustfmt::skip]
pub static BOOKS: [BookMeta; OLD_TESTAMENT_COUNT + NEW_TESTAMENT_COUNT] = [
    book(1, "창세기", "창", 50),
    book(2, "출애굽기", "출", 40),
    book(3, "레위기", "레", 27),
    book(4, "민수기", "민", 36),
    book(5, "신명기", "신", 34),
    book(6, "여호수아", "수", 24),
    book(7, "사사기", "삿", 21),
    book(8, "룻기", "룻", 4),
    book(9, "사무엘상", "삼상", 31),
    book(10, "사무엘하", "삼하", 24),
    book(11, "열왕기상", "왕상", 22),
    book(12, "열왕기하", "왕하", 25),
    book(13, "역대상", "대상", 29),
    book(14, "역대하", "대하", 36),
    book(15, "에스라", "스", 10),
    book(16, "느헤미야", "느", 13),
    book(17, "에스더", "에", 10),
    book(18, "욥기", "욥", 42),
    book(19, "시편", "시", 150),
    book(20, "잠언", "잠", 31),
    book(21, "전도서", "전", 12),
    book(22, "아가", "아", 8),
    book(23, "이사야", "사", 66),
    book(24, "예레미야", "렘", 52),
    book(25, "예레미야애가", "애", 5),
    book(26, "에스겔", "겔", 48),
    book(27, "다니엘", "단", 12),
    book(28, "호세아", "호", 14),
    book(29, "요엘", "욜", 3),
    book(30, "아모스", "암", 9),
    book(31, "오바댜", "옵", 1),
    book(32, "요나", "욘", 4),
    book(33, "미가", "미", 7),
    book(34, "나훔", "나", 3),
    book(35, "하박국", "합", 3),
    book(36, "스바냐", "습", 3),
    book(37, "학개", "학", 2),
    book(38, "스가랴", "슥", 14),
    book(39, "말라기", "말", 4),
    book(40, "마태복음", "마", 28),
    book(41, "마가복음", "막", 16),
    book(42, "누가복음", "눅", 24),
    book(43, "요한복음", "요", 21),
    book(44, "사도행전", "행", 28),
    book(45, "로마서", "롬", 16),
    book(46, "고린도전서", "고전", 16),
    book(47, "고린도후서", "고후", 13),
    book(48, "갈라디아서", "갈", 6),
    book(49, "에베소서", "엡", 6),
    book(50, "빌립보서", "빌", 4),
    book(51, "골로새서", "골", 4),
    book(52, "데살로니가전서", "살전", 5),
    book(53, "데살로니가후서", "살후", 3),
    book(54, "디모데전서", "딤전", 6),
    book(55, "디모데후서", "딤후", 4),
    book(56, "디도서", "딛", 3),
    book(57, "빌레몬서", "몬", 1),
    book(58, "히브리서", "히", 13),
    book(59, "야고보서", "약", 5),
    book(60, "베드로전서", "벧전", 5),
    book(61, "베드로후서", "벧후", 3),
    book(62, "요한일서", "요일", 5),
    book(63, "요한이서", "요이", 1),
    book(64, "요한삼서", "요삼", 1),
    book(65, "유다서", "유", 1),
    book(66, "요한계시록", "계", 22),
];

struct BookIndex {
    by_name: HashMap<&'static str, BookId>,
    by_abbr: HashMap<&'static str, BookId>,
    by_chosung: HashMap<String, BookId>,
}

// Later books overwrite earlier ones on a shared chosung sequence
// (역대상/유다서, 욥기/아가, 요한일서/요한이서).
static INDEX: LazyLock<BookIndex> = LazyLock::new(|| {
    let mut index = BookIndex {
        by_name: HashMap::with_capacity(BOOKS.len()),
        by_abbr: HashMap::with_capacity(BOOKS.len()),
        by_chosung: HashMap::with_capacity(BOOKS.len()),
    };
    for book in BOOKS.iter() {
        index.by_name.insert(book.name, book.id);
        index.by_abbr.insert(book.abbr, book.id);
        index.by_chosung.insert(get_chosung(book.name), book.id);
    }
    index
});

/// Resolve a book token to its canonical id.
///
/// Tries the full name, then the abbreviation, and only when the whole
/// token is leading-consonant jamo, the chosung table. The token is matched
/// as given; callers trim it first.
///
/// ```
/// use versegrep::resolve_book;
///
/// assert_eq!(resolve_book("창세기"), Some(1));
/// assert_eq!(resolve_book("롬"), Some(45));
/// assert_eq!(resolve_book("ㅁㅌㅂㅇ"), Some(40));
/// assert_eq!(resolve_book("사랑"), None);
/// ```
pub fn resolve_book(token: &str) -> Option<BookId> {
    let index = &*INDEX;
    if let Some(id) = index.by_name.get(token) {
        return Some(*id);
    }
    if let Some(id) = index.by_abbr.get(token) {
        return Some(*id);
    }
    if is_chosung(token) {
        return index.by_chosung.get(token).copied();
    }
    None
}

pub fn book_by_id(id: BookId) -> Option<&'static BookMeta> {
    if id == 0 {
        return None;
    }
    BOOKS.get(usize::from(id) - 1)
}

/// Display name for a book id; empty for ids outside the canon.
pub fn book_name(id: BookId) -> &'static str {
    book_by_id(id).map(|b| b.name).unwrap_or("")
}

pub fn books_in(testament: Testament) -> impl Iterator<Item = &'static BookMeta> {
    BOOKS.iter().filter(move |b| b.testament() == testament)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_contiguous() {
        for (position, book) in BOOKS.iter().enumerate() {
            assert_eq!(usize::from(book.id), position + 1);
            assert!(book.chapters > 0, "{} has no chapters", book.name);
        }
    }

    #[test]
    fn test_names_and_abbrs_unique() {
        let index = &*INDEX;
        assert_eq!(index.by_name.len(), BOOKS.len());
        assert_eq!(index.by_abbr.len(), BOOKS.len());
    }

    #[test]
    fn test_testament_split() {
        assert_eq!(books_in(Testament::Old).count(), OLD_TESTAMENT_COUNT);
        assert_eq!(books_in(Testament::New).count(), NEW_TESTAMENT_COUNT);
        assert_eq!(Testament::of(39), Testament::Old);
        assert_eq!(Testament::of(40), Testament::New);
    }

    #[test]
    fn test_resolve_by_name_and_abbr() {
        for book in BOOKS.iter() {
            assert_eq!(resolve_book(book.name), Some(book.id), "name {}", book.name);
            assert_eq!(resolve_book(book.abbr), Some(book.id), "abbr {}", book.abbr);
        }
    }

    #[test]
    fn test_resolve_by_chosung() {
        let shadowed = [13, 18, 62];
        for book in BOOKS.iter().filter(|b| !shadowed.contains(&b.id)) {
            let chosung = get_chosung(book.name);
            assert!(is_chosung(&chosung));
            assert_eq!(resolve_book(&chosung), Some(book.id), "chosung {}", chosung);
        }
    }

    #[test]
    fn test_shared_chosung_prefers_later_book() {
        assert_eq!(resolve_book("ㅇㄷㅅ"), Some(65));
        assert_eq!(resolve_book("ㅇㄱ"), Some(22));
        assert_eq!(resolve_book("ㅇㅎㅇㅅ"), Some(63));
    }

    #[test]
    fn test_resolve_misses() {
        assert_eq!(resolve_book(""), None);
        assert_eq!(resolve_book("ㅅㄱ"), None);
        assert_eq!(resolve_book(" 창"), None);
        // one non-jamo character disables chosung matching entirely
        assert_eq!(resolve_book("ㅊㅅ기"), None);
    }

    #[test]
    fn test_book_by_id_bounds() {
        assert!(book_by_id(0).is_none());
        assert!(book_by_id(67).is_none());
        assert_eq!(book_by_id(66).map(|b| b.abbr), Some("계"));
        assert_eq!(book_name(45), "로마서");
        assert_eq!(book_name(200), "");
    }
}
