use serde::{Deserialize, Serialize};

use super::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Individual,
    Entity,
}

impl SearchType {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchType::Individual => "individual",
            SearchType::Entity => "entity",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "individual" => Some(SearchType::Individual),
            "entity" => Some(SearchType::Entity),
            _ => None,
        }
    }
}

/// Jurisdiction partition of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Country {
    Au,
    Nz,
}

impl Country {
    pub const ALL: [Country; 2] = [Country::Au, Country::Nz];

    pub fn as_str(self) -> &'static str {
        match self {
            Country::Au => "au",
            Country::Nz => "nz",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "au" => Some(Country::Au),
            "nz" => Some(Country::Nz),
            _ => None,
        }
    }
}

/// One filter dimension: either open or pinned to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint<T> {
    Unconstrained,
    Only(T),
}

impl<T> Default for Constraint<T> {
    fn default() -> Self {
        Constraint::Unconstrained
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub kind: Constraint<SearchType>,
    pub country: Constraint<Country>,
}

/// `filter` as it arrives on the wire, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub country: Option<String>,
}

impl FilterParams {
    /// Validates both dimensions; an absent or empty value leaves the dimension open.
    pub fn to_filter(&self) -> Result<SearchFilter, ValidationError> {
        let kind = match present(&self.kind) {
            None => Constraint::Unconstrained,
            Some(v) => Constraint::Only(
                SearchType::parse(v).ok_or(ValidationError::InvalidFilterType)?,
            ),
        };
        let country = match present(&self.country) {
            None => Constraint::Unconstrained,
            Some(v) => Constraint::Only(
                Country::parse(v).ok_or(ValidationError::InvalidFilterCountry)?,
            ),
        };
        Ok(SearchFilter { kind, country })
    }

    /// Smart search has no default pipeline, so the type is mandatory.
    pub fn required_type(&self) -> Result<SearchType, ValidationError> {
        present(&self.kind)
            .and_then(SearchType::parse)
            .ok_or(ValidationError::InvalidFilterType)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Body shared by both search operations.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub q: String,
    #[serde(default)]
    pub filter: Option<FilterParams>,
    /// Number or numeric string; anything else falls back to the configured maximum.
    #[serde(default)]
    pub limit: Option<serde_json::Value>,
}

impl SearchRequest {
    pub fn requested_limit(&self) -> Option<f64> {
        match self.limit.as_ref()? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Picks the requested limit when it lies in `[1, max]`, else `max`.
pub fn resolve_limit(requested: Option<f64>, max: usize) -> usize {
    match requested {
        Some(n) if n.is_finite() && n >= 1.0 && n <= max as f64 => n as usize,
        _ => max,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_formatted: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub country: String,
    pub score: f64,
}

/// Results for one input line, paired with the original and the searched text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateGroup {
    /// Absent when translation produced more lines than the input had.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    pub x: String,
    pub candidates: Vec<Candidate>,
    /// Set when this line's search failed; `candidates` is then empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
