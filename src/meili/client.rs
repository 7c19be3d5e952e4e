use std::future::Future;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::SearchOptions;
use super::types::{ApiError, Hit, SearchBody, SearchResponse};
use crate::search::types::{Constraint, SearchFilter};
use crate::secret::ApiKey;

/// Index uids are `[a-zA-Z0-9_-]`; anything else is encoded before it reaches the path.
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

#[derive(Debug, thiserror::Error)]
pub enum MeiliError {
    #[error("Index not found: {0}")]
    IndexNotFound(String),

    #[error("Search API rate limit exceeded")]
    RateLimited,

    #[error("Search API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Abstraction over a partitioned watch-list search index.
/// Implemented by `MeiliClient` for production; mock implementations used in tests.
pub trait IndexSearch {
    fn search(
        &self,
        index: &str,
        query: &str,
        options: &SearchOptions,
    ) -> impl Future<Output = Result<Vec<Hit>, MeiliError>> + Send;
}

#[derive(Clone, Debug)]
pub struct MeiliClient {
    http: Client,
    api_key: ApiKey,
    base_url: String,
}

impl MeiliClient {
    pub fn new(http: Client, base_url: &Url, api_key: ApiKey) -> Self {
        Self {
            http,
            api_key,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self, index: &str) -> String {
        format!(
            "{}/indexes/{}/search",
            self.base_url,
            utf8_percent_encode(index, SEGMENT_ENCODE_SET)
        )
    }
}

impl IndexSearch for MeiliClient {
    async fn search(
        &self,
        index: &str,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<Hit>, MeiliError> {
        let body = SearchBody {
            q: query,
            limit: options.limit,
            attributes_to_highlight: &options.attributes_to_highlight,
            show_ranking_score: true,
            filter: filter_expression(&options.filter),
            ranking_score_threshold: options.ranking_score_threshold,
            highlight_pre_tag: options.highlight.pre.as_deref(),
            highlight_post_tag: options.highlight.post.as_deref(),
        };

        let response = self
            .http
            .post(self.search_url(index))
            .bearer_auth(self.api_key.expose())
            .header("User-Agent", crate::USER_AGENT)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!(index, "search API rate limited");
            return Err(MeiliError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let classified = classify_error(index, status.as_u16(), &text);
            warn!(index, error = %classified, "search API error");
            return Err(classified);
        }

        let body: SearchResponse = response.json().await?;
        debug!(index, hits = body.hits.len(), "index search complete");
        Ok(body.hits)
    }
}

/// Renders a filter in the engine's expression syntax, e.g. `type = entity AND country = nz`.
pub(crate) fn filter_expression(filter: &SearchFilter) -> Option<String> {
    let mut parts = Vec::new();

    if let Constraint::Only(kind) = filter.kind {
        parts.push(format!("type = {}", kind.as_str()));
    }
    if let Constraint::Only(country) = filter.country {
        parts.push(format!("country = {}", country.as_str()));
    }

    (!parts.is_empty()).then(|| parts.join(" AND "))
}

fn classify_error(index: &str, status: u16, text: &str) -> MeiliError {
    if let Ok(err) = serde_json::from_str::<ApiError>(text) {
        if err.code.as_deref() == Some("index_not_found") {
            return MeiliError::IndexNotFound(index.to_string());
        }
        if let Some(message) = err.message {
            return MeiliError::Api {
                code: status,
                message,
            };
        }
    }

    let snippet = &text[..text.floor_char_boundary(200)];
    MeiliError::Api {
        code: status,
        message: format!("HTTP {status}: {snippet}"),
    }
}
