//! Service configuration, read once from the environment at start-up.
//!
//! Empty variables are treated as unset.

use std::env;

use url::Url;

use crate::meili::HighlightTags;
use crate::search::SearchSettings;
use crate::search::translit::Scheme;
use crate::secret::ApiKey;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("{name} is not a valid URL: {source}")]
    InvalidUrl {
        name: &'static str,
        source: url::ParseError,
    },

    #[error("{name} is not a valid number: '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{0} must be greater than 0")]
    NotPositive(&'static str),

    #[error("{name} must be between 0 and 1: '{value}'")]
    ThresholdOutOfRange { name: &'static str, value: String },

    #[error("unknown transliteration scheme: '{0}' (expected icao_doc_9303 or gost_52535)")]
    UnknownScheme(String),
}

#[derive(Debug)]
pub struct Config {
    pub meili_url: Url,
    pub meili_api_key: ApiKey,
    pub translate_url: Url,
    pub translate_api_key: Option<ApiKey>,
    pub search: SearchSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let vars = Vars(lookup);
        let defaults = SearchSettings::default();

        let scheme = match vars.get("TRANSLITERATION_SCHEME") {
            Some(name) => Scheme::from_name(&name).ok_or(ConfigError::UnknownScheme(name))?,
            None => defaults.scheme,
        };

        let search = SearchSettings {
            index: vars.get("MEILISEARCH_INDEX").unwrap_or(defaults.index),
            entities_index: vars
                .get("MEILISEARCH_ENTITIES_INDEX")
                .unwrap_or(defaults.entities_index),
            search_limit: vars.limit("SEARCH_RESULTS_LIMIT", defaults.search_limit)?,
            search_input_limit: vars.limit("SEARCH_INPUT_LIMIT", defaults.search_input_limit)?,
            smart_search_limit: vars
                .limit("SMART_SEARCH_RESULTS_LIMIT", defaults.smart_search_limit)?,
            smart_search_input_limit: vars
                .limit("SMART_SEARCH_INPUT_LIMIT", defaults.smart_search_input_limit)?,
            individual_threshold: vars.threshold("INDIVIDUAL_SEARCH_RANKING_THRESHOLD")?,
            entity_threshold: vars.threshold("ENTITY_SEARCH_RANKING_THRESHOLD")?,
            highlight: HighlightTags {
                pre: vars.get("HIGHLIGHT_PRE_TAG"),
                post: vars.get("HIGHLIGHT_POST_TAG"),
            },
            scheme,
        };

        Ok(Self {
            meili_url: vars.url("MEILISEARCH_API_URL")?,
            meili_api_key: ApiKey::new(vars.required("MEILISEARCH_API_KEY")?),
            translate_url: vars.url("TRANSLATE_API_URL")?,
            translate_api_key: vars.get("TRANSLATE_API_KEY").map(ApiKey::new),
            search,
        })
    }
}

struct Vars<F>(F);

impl<F: Fn(&str) -> Option<String>> Vars<F> {
    fn get(&self, name: &str) -> Option<String> {
        (self.0)(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn required(&self, name: &'static str) -> Result<String, ConfigError> {
        self.get(name).ok_or(ConfigError::Missing(name))
    }

    fn url(&self, name: &'static str) -> Result<Url, ConfigError> {
        Url::parse(&self.required(name)?).map_err(|source| ConfigError::InvalidUrl { name, source })
    }

    fn limit(&self, name: &'static str, default: usize) -> Result<usize, ConfigError> {
        let Some(value) = self.get(name) else {
            return Ok(default);
        };
        let n: usize = value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value })?;
        if n == 0 {
            return Err(ConfigError::NotPositive(name));
        }
        Ok(n)
    }

    /// Ranking scores live in `[0, 1]`.
    fn threshold(&self, name: &'static str) -> Result<Option<f64>, ConfigError> {
        let Some(value) = self.get(name) else {
            return Ok(None);
        };
        match value.parse::<f64>() {
            Ok(n) if (0.0..=1.0).contains(&n) => Ok(Some(n)),
            Ok(_) => Err(ConfigError::ThresholdOutOfRange { name, value }),
            Err(_) => Err(ConfigError::InvalidNumber { name, value }),
        }
    }
}
