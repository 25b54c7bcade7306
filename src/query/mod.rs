//! Query parsing and search resolution.
//!
//! This module provides the core search functionality for versegrep:
//!
//! - Classifying a free-form query as a reference or a keyword ([`parse_query`])
//! - Resolving a parsed query against a loaded translation ([`resolve`])
//! - Keyword scope filtering ([`SearchScope`])
//!
//! Both steps are pure: they read static tables and the borrowed
//! translation tree only, so concurrent searches need no coordination.

mod options;
mod parse;
mod resolve;

pub use options::SearchScope;
pub use parse::{parse_query, ParsedQuery};
pub use resolve::{
    resolve, resolve_detailed, search_bible, Resolution, SearchResult, MAX_KEYWORD_RESULTS,
};
