use futures::future::join_all;
use tracing::{info, warn};

use super::format::format_hit;
use super::merge::search_candidates;
use super::normalize;
use super::translit::Scheme;
use super::types::{
    Candidate, CandidateGroup, FilterParams, SearchRequest, SearchType, resolve_limit,
};
use super::ValidationError;
use crate::meili::{HighlightTags, IndexSearch, MeiliError, SearchOptions};
use crate::translate::{Language, TranslateError, Translator};

/// Marker attached to a candidate group whose search failed.
const LINE_FAILED: &str = "search failed";

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("translation failed: {0}")]
    Translate(#[from] TranslateError),

    #[error("index search failed: {0}")]
    Index(#[from] MeiliError),
}

/// Tunables for both search operations.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    /// Index for direct and individual searches.
    pub index: String,
    pub entities_index: String,
    pub search_limit: usize,
    pub search_input_limit: usize,
    /// Per-partition limit for smart search.
    pub smart_search_limit: usize,
    pub smart_search_input_limit: usize,
    pub individual_threshold: Option<f64>,
    pub entity_threshold: Option<f64>,
    pub highlight: HighlightTags,
    pub scheme: Scheme,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            index: "sanctions".to_string(),
            entities_index: "entities".to_string(),
            search_limit: 10,
            search_input_limit: 100,
            smart_search_limit: 5,
            smart_search_input_limit: 1000,
            individual_threshold: None,
            entity_threshold: None,
            highlight: HighlightTags::default(),
            scheme: Scheme::default(),
        }
    }
}

/// Resolves name queries against the watch-list index.
///
/// Holds long-lived collaborator clients; every call works on fresh,
/// request-local state.
pub struct SanctionsSearch<S, T> {
    index: S,
    translator: T,
    settings: SearchSettings,
}

impl<S, T> SanctionsSearch<S, T>
where
    S: IndexSearch + Sync,
    T: Translator + Sync,
{
    pub fn new(index: S, translator: T, settings: SearchSettings) -> Self {
        Self {
            index,
            translator,
            settings,
        }
    }

    /// Single-query lookup with the caller's filter, no translation or partition merge.
    pub async fn direct(&self, request: &SearchRequest) -> Result<Vec<Candidate>, SearchError> {
        let Some(query) = normalize::query(&request.q, self.settings.search_input_limit)? else {
            return Ok(Vec::new());
        };
        let filter = request
            .filter
            .as_ref()
            .map(FilterParams::to_filter)
            .transpose()?
            .unwrap_or_default();
        let limit = resolve_limit(request.requested_limit(), self.settings.search_limit);

        info!(query, limit, "direct search");

        let index = &self.settings.index;
        let options = SearchOptions {
            filter,
            ..self.options(index, limit, None)
        };
        let hits = self.index.search(index, query, &options).await?;

        Ok(hits.into_iter().map(format_hit).collect())
    }

    /// Multi-line lookup; `filter.type` selects the individual or entity pipeline.
    pub async fn smart(&self, request: &SearchRequest) -> Result<Vec<CandidateGroup>, SearchError> {
        let lines = normalize::lines(&request.q, self.settings.smart_search_input_limit)?;
        if lines.is_empty() {
            return Ok(Vec::new());
        }

        let kind = request
            .filter
            .as_ref()
            .ok_or(ValidationError::InvalidFilterType)?
            .required_type()?;

        info!(lines = lines.len(), kind = kind.as_str(), "smart search");

        match kind {
            SearchType::Individual => self.individuals(lines).await,
            SearchType::Entity => self.entities(lines).await,
        }
    }

    /// Translates all lines in one call, then romanizes and searches each
    /// translated line. Groups pair with the original lines by position.
    async fn individuals(&self, original: Vec<String>) -> Result<Vec<CandidateGroup>, SearchError> {
        let Some(translated) = self
            .translator
            .translate(&original.join("\n"), Language::Ru)
            .await?
        else {
            info!("translation returned no text");
            return Ok(Vec::new());
        };

        let lines = normalize::split_lines(&translated);
        if lines.len() != original.len() {
            warn!(
                original = original.len(),
                translated = lines.len(),
                "translation changed line count, pairing by position"
            );
        }

        let index = &self.settings.index;
        let options = self.options(
            index,
            self.settings.smart_search_limit,
            self.settings.individual_threshold,
        );

        let searches: Vec<_> = lines
            .into_iter()
            .enumerate()
            .map(|(idx, line)| {
                let q = original.get(idx).cloned();
                let x = self.settings.scheme.transliterate(&line);
                let options = &options;
                async move {
                    let outcome =
                        search_candidates(&self.index, index, &x, SearchType::Individual, options)
                            .await;
                    (q, x, outcome)
                }
            })
            .collect();

        collect_groups(join_all(searches).await)
    }

    /// Searches each line as an organisation name; groups pair 1:1 with the input.
    async fn entities(&self, original: Vec<String>) -> Result<Vec<CandidateGroup>, SearchError> {
        let index = &self.settings.entities_index;
        let options = self.options(
            index,
            self.settings.smart_search_limit,
            self.settings.entity_threshold,
        );

        let searches: Vec<_> = original
            .into_iter()
            .map(|q| {
                let x = normalize::clean_entity_name(&q);
                let options = &options;
                async move {
                    let outcome =
                        search_candidates(&self.index, index, &x, SearchType::Entity, options)
                            .await;
                    (Some(q), x, outcome)
                }
            })
            .collect();

        collect_groups(join_all(searches).await)
    }

    fn options(&self, index: &str, limit: usize, threshold: Option<f64>) -> SearchOptions {
        let mut attributes_to_highlight = vec!["name"];
        if index == self.settings.entities_index {
            attributes_to_highlight.push("fts");
        }

        SearchOptions {
            limit,
            ranking_score_threshold: threshold,
            highlight: self.settings.highlight.clone(),
            attributes_to_highlight,
            ..SearchOptions::default()
        }
    }
}

/// Builds groups in line order. A failed line keeps its slot with an error
/// marker; only when every line fails does the request fail.
fn collect_groups(
    outcomes: Vec<(Option<String>, String, Result<Vec<Candidate>, MeiliError>)>,
) -> Result<Vec<CandidateGroup>, SearchError> {
    let mut groups = Vec::with_capacity(outcomes.len());
    let mut first_err = None;

    for (q, x, outcome) in outcomes {
        match outcome {
            Ok(candidates) => groups.push(CandidateGroup {
                q,
                x,
                candidates,
                error: None,
            }),
            Err(e) => {
                warn!(query = %x, error = %e, "line search failed");
                groups.push(CandidateGroup {
                    q,
                    x,
                    candidates: Vec::new(),
                    error: Some(LINE_FAILED.to_string()),
                });
                first_err.get_or_insert(e);
            }
        }
    }

    if let Some(e) = first_err
        && groups.iter().all(|g| g.error.is_some())
    {
        return Err(e.into());
    }

    Ok(groups)
}
