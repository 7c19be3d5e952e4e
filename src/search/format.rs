use super::types::Candidate;
use crate::meili::types::{Formatted, Hit};

/// Joins highlighted alias fragments into one display string.
pub const FRAGMENT_SEPARATOR: &str = "<br />";

/// Projects a raw index hit into the public candidate shape.
///
/// The highlighted `fts` aliases win over the highlighted name; a candidate
/// without any highlight carries only the plain name.
pub fn format_hit(hit: Hit) -> Candidate {
    Candidate {
        name_formatted: hit.formatted.and_then(highlighted_name),
        name: hit.name.unwrap_or_default(),
        kind: hit.kind.unwrap_or_default(),
        country: hit.country.unwrap_or_default(),
        score: hit.ranking_score,
    }
}

fn highlighted_name(formatted: Formatted) -> Option<String> {
    formatted
        .fts
        .map(|fts| fts.join(FRAGMENT_SEPARATOR))
        .filter(|text| !text.is_empty())
        .or(formatted.name)
        .filter(|text| !text.is_empty())
}
