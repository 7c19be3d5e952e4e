//! Query resolution: input normalization, cross-script transformation,
//! partitioned fan-out and candidate ranking.

pub mod engine;
pub mod format;
pub mod merge;
pub mod normalize;
pub mod translit;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use engine::{SanctionsSearch, SearchError, SearchSettings};

/// Client input rejected before any upstream call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid request body")]
    InvalidBody,

    #[error("query is too long")]
    QueryTooLong,

    #[error("invalid filter type")]
    InvalidFilterType,

    #[error("invalid filter country")]
    InvalidFilterCountry,
}
