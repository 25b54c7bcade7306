//! Search scope.

use crate::corpus::{book_name, resolve_book, BookId, OLD_TESTAMENT_COUNT};
use crate::error::VerseError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Which books a keyword search visits. Reference queries ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchScope {
    #[default]
    All,
    /// Books 1..=39
    Old,
    /// Books 40..=66
    New,
    /// Exactly one book
    Book(BookId),
}

impl SearchScope {
    pub fn includes(&self, id: BookId) -> bool {
        match self {
            SearchScope::All => true,
            SearchScope::Old => usize::from(id) <= OLD_TESTAMENT_COUNT,
            SearchScope::New => usize::from(id) > OLD_TESTAMENT_COUNT,
            SearchScope::Book(book_id) => *book_id == id,
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchScope::All => write!(f, "all"),
            SearchScope::Old => write!(f, "old"),
            SearchScope::New => write!(f, "new"),
            SearchScope::Book(id) => write!(f, "{}", id),
        }
    }
}

/// Accepts `all`, `old`, `new`, a numeric book id, or any book token
/// [`resolve_book`] understands (`로마서`, `롬`, `ㄹㅁㅅ`).
impl FromStr for SearchScope {
    type Err = VerseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        match value.to_ascii_lowercase().as_str() {
            "all" => return Ok(SearchScope::All),
            "old" => return Ok(SearchScope::Old),
            "new" => return Ok(SearchScope::New),
            _ => {}
        }
        if let Ok(id) = value.parse::<BookId>() {
            if !book_name(id).is_empty() {
                return Ok(SearchScope::Book(id));
            }
        } else if let Some(id) = resolve_book(value) {
            return Ok(SearchScope::Book(id));
        }
        Err(VerseError::InvalidScope {
            scope: s.to_string(),
        })
    }
}

impl Serialize for SearchScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SearchScope::Book(id) => serializer.serialize_u8(*id),
            other => serializer.collect_str(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_includes() {
        assert!(SearchScope::All.includes(1));
        assert!(SearchScope::Old.includes(39));
        assert!(!SearchScope::Old.includes(40));
        assert!(SearchScope::New.includes(40));
        assert!(!SearchScope::New.includes(39));
        assert!(SearchScope::Book(45).includes(45));
        assert!(!SearchScope::Book(45).includes(46));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("all".parse::<SearchScope>().unwrap(), SearchScope::All);
        assert_eq!("OLD".parse::<SearchScope>().unwrap(), SearchScope::Old);
        assert_eq!(" new ".parse::<SearchScope>().unwrap(), SearchScope::New);
        assert_eq!("45".parse::<SearchScope>().unwrap(), SearchScope::Book(45));
        assert_eq!("로마서".parse::<SearchScope>().unwrap(), SearchScope::Book(45));
        assert_eq!("롬".parse::<SearchScope>().unwrap(), SearchScope::Book(45));
        assert_eq!("ㄹㅁㅅ".parse::<SearchScope>().unwrap(), SearchScope::Book(45));
    }

    #[test]
    fn test_from_str_rejects() {
        for bad in ["", "0", "67", "999", "mid", "사랑"] {
            let err = bad.parse::<SearchScope>().unwrap_err();
            assert_eq!(err.error_code(), "VG-E101", "scope {:?}", bad);
        }
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&SearchScope::Old).unwrap(), "\"old\"");
        assert_eq!(serde_json::to_string(&SearchScope::Book(3)).unwrap(), "3");
    }
}
