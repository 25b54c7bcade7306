//! Error types for versegrep.
//!
//! Parsing and resolution never fail; these errors cover the boundary work
//! around them. Error codes are organized by category:
//!
//! - **VG-E001 to VG-E099**: Translation data loading errors
//! - **VG-E100 to VG-E199**: Query and scope errors
//! - **VG-E300 to VG-E399**: Path and argument validation errors
//! - **VG-E900 to VG-E999**: Internal and miscellaneous errors

use thiserror::Error;

/// Main error type for versegrep operations.
#[derive(Error, Debug)]
pub enum VerseError {
    /// No data file exists for the requested translation.
    #[error("Translation '{code}' not found at {path}")]
    TranslationNotFound { code: String, path: String },

    /// The translation file exists but is not a valid translation tree.
    #[error("Translation '{code}' could not be parsed: {reason}")]
    TranslationCorrupted { code: String, reason: String },

    /// Translation code contains characters that are not allowed.
    #[error("Invalid translation code: {code}")]
    InvalidTranslationCode { code: String },

    /// Search scope is not all/old/new, a book id or a book name.
    #[error("Invalid search scope: {scope}")]
    InvalidScope { scope: String },

    /// Invalid path provided.
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error occurred.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl VerseError {
    /// Returns the error code for this error.
    pub const fn error_code(&self) -> &'static str {
        match self {
            VerseError::TranslationNotFound { .. } => "VG-E001",
            VerseError::TranslationCorrupted { .. } => "VG-E002",
            VerseError::InvalidTranslationCode { .. } => "VG-E003",
            VerseError::InvalidScope { .. } => "VG-E101",
            VerseError::InvalidPath { .. } => "VG-E301",
            VerseError::IoError(_) => "VG-E901",
            VerseError::JsonError(_) => "VG-E902",
        }
    }

    /// Returns the severity level for this error.
    pub const fn severity(&self) -> &'static str {
        match self {
            VerseError::InvalidScope { .. } => "warning",
            _ => "error",
        }
    }

    /// Returns remediation hints for this error, if available.
    pub const fn remediation(&self) -> Option<&'static str> {
        match self {
            VerseError::TranslationNotFound { .. } => {
                Some("Check --data-dir and that <code>.json exists for the translation.")
            }
            VerseError::TranslationCorrupted { .. } => {
                Some("Regenerate the translation JSON; it must contain translation, code and books.")
            }
            VerseError::InvalidTranslationCode { .. } => {
                Some("Translation codes use ASCII letters, digits, '-' and '_' only (e.g. krv).")
            }
            VerseError::InvalidScope { .. } => {
                Some("Valid scopes: all, old, new, a book id (1-66) or a book name/abbreviation.")
            }
            VerseError::InvalidPath { .. } => Some("Ensure the path exists and is a directory."),
            VerseError::IoError(_) => Some("Check file permissions and that the data directory is readable."),
            VerseError::JsonError(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            VerseError::TranslationNotFound {
                code: "krv".to_string(),
                path: "data/krv.json".to_string(),
            },
            VerseError::TranslationCorrupted {
                code: "krv".to_string(),
                reason: "eof".to_string(),
            },
            VerseError::InvalidTranslationCode {
                code: "../x".to_string(),
            },
            VerseError::InvalidScope {
                scope: "mid".to_string(),
            },
            VerseError::InvalidPath {
                path: "/nope".to_string(),
            },
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.error_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_display_includes_context() {
        let err = VerseError::TranslationNotFound {
            code: "kov".to_string(),
            path: "data/kov.json".to_string(),
        };
        assert_eq!(err.to_string(), "Translation 'kov' not found at data/kov.json");
        assert_eq!(err.severity(), "error");
        assert!(err.remediation().is_some());
    }

    #[test]
    fn test_scope_error_is_warning() {
        let err = VerseError::InvalidScope {
            scope: "mid".to_string(),
        };
        assert_eq!(err.severity(), "warning");
        assert_eq!(err.error_code(), "VG-E101");
    }
}
