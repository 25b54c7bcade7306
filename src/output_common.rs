//! Rendering shared by every command.

use crate::error::VerseError;
use crate::output::{json_response_with_partial, OutputFormat};
use serde::Serialize;

/// Wrap `data` in the response envelope and serialize it for `format`.
///
/// `Human` falls back to compact JSON; callers print human text themselves.
pub fn render_envelope<T: Serialize>(
    data: &T,
    partial: bool,
    format: OutputFormat,
) -> Result<String, VerseError> {
    let envelope = json_response_with_partial(data, partial);
    let rendered = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(&envelope)?,
        OutputFormat::Json | OutputFormat::Human => serde_json::to_string(&envelope)?,
    };
    Ok(rendered)
}

/// First line of every human listing.
pub fn format_total_header(total: u64) -> String {
    format!("total: {}", total)
}

/// Trailing lines of a human search listing.
///
/// `showing N of M` when `--limit` hid matches, then `partial: true` when a
/// keyword scan stopped at the result cap with verses left unvisited.
pub fn search_footer(shown: usize, total: u64, partial: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if (shown as u64) < total {
        lines.push(format!("showing {} of {}", shown, total));
    }
    if partial {
        lines.push("partial: true".to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_compact_vs_pretty() {
        let compact = render_envelope(&[1, 2], false, OutputFormat::Json).unwrap();
        let pretty = render_envelope(&[1, 2], false, OutputFormat::Pretty).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(value["data"], serde_json::json!([1, 2]));
        assert_eq!(value["partial"], false);
    }

    #[test]
    fn test_search_footer() {
        assert!(search_footer(3, 3, false).is_empty());
        assert_eq!(search_footer(10, 31, false), vec!["showing 10 of 31"]);
        assert_eq!(search_footer(3000, 3000, true), vec!["partial: true"]);
        assert_eq!(
            search_footer(5, 3000, true),
            vec!["showing 5 of 3000", "partial: true"]
        );
    }

    #[test]
    fn test_total_header_and_json_formats() {
        assert_eq!(format_total_header(3), "total: 3");
        assert!(OutputFormat::Pretty.is_json());
        assert!(OutputFormat::Json.is_json());
        assert!(!OutputFormat::Human.is_json());
    }
}
