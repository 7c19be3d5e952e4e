//! Watch-list search index client (Meilisearch REST API).

pub mod client;
pub mod types;

pub use client::{IndexSearch, MeiliClient, MeiliError};

use crate::search::types::SearchFilter;

/// Markup wrapped around matched terms in highlighted fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightTags {
    pub pre: Option<String>,
    pub post: Option<String>,
}

/// Per-query options for a single index search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    pub limit: usize,
    pub filter: SearchFilter,
    /// Hits ranked below this score are dropped by the engine.
    pub ranking_score_threshold: Option<f64>,
    pub highlight: HighlightTags,
    pub attributes_to_highlight: Vec<&'static str>,
}
