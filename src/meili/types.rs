use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBody<'a> {
    pub q: &'a str,
    pub limit: usize,
    pub attributes_to_highlight: &'a [&'a str],
    pub show_ranking_score: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking_score_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_pre_tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_post_tag: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// One watch-list document as returned by the index.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Hit {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "_formatted")]
    pub formatted: Option<Formatted>,
    #[serde(rename = "_rankingScore", default)]
    pub ranking_score: f64,
}

/// Highlighted copies of the searchable fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Formatted {
    pub name: Option<String>,
    pub fts: Option<Highlight>,
}

/// `fts` is an array of aliases on the entities index, a plain string elsewhere.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Highlight {
    Many(Vec<String>),
    One(String),
}

impl Highlight {
    pub fn join(&self, separator: &str) -> String {
        match self {
            Highlight::Many(parts) => parts.join(separator),
            Highlight::One(text) => text.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub message: Option<String>,
    pub code: Option<String>,
}
