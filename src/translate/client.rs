use std::future::Future;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use super::{Language, SOURCE_LANGUAGE};
use crate::secret::ApiKey;

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Translation API rate limit exceeded")]
    RateLimited,

    #[error("Translation API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Translates text from [`SOURCE_LANGUAGE`] into a target language.
///
/// `Ok(None)` means the service answered but produced no text; callers treat
/// that as "nothing to search", not as a failure.
pub trait Translator {
    fn translate(
        &self,
        text: &str,
        target: Language,
    ) -> impl Future<Output = Result<Option<String>, TranslateError>> + Send;
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: Language,
    target: Language,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
    error: Option<String>,
}

/// Client for a LibreTranslate-compatible `/translate` endpoint.
#[derive(Clone, Debug)]
pub struct TranslateClient {
    http: Client,
    api_key: Option<ApiKey>,
    base_url: String,
}

impl TranslateClient {
    pub fn new(http: Client, base_url: &Url, api_key: Option<ApiKey>) -> Self {
        Self {
            http,
            api_key,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }
}

impl Translator for TranslateClient {
    async fn translate(
        &self,
        text: &str,
        target: Language,
    ) -> Result<Option<String>, TranslateError> {
        let request = TranslateRequest {
            q: text,
            source: SOURCE_LANGUAGE,
            target,
            format: "text",
            api_key: self.api_key.as_ref().map(ApiKey::expose),
        };

        let response = self
            .http
            .post(format!("{}/translate", self.base_url))
            .header("User-Agent", crate::USER_AGENT)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("translation API rate limited");
            return Err(TranslateError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<TranslateResponse>(&text) {
                Ok(TranslateResponse {
                    error: Some(error), ..
                }) => error,
                _ => format!("HTTP {status}: {}", &text[..text.floor_char_boundary(200)]),
            };
            warn!(status = %status, "translation API error");
            return Err(TranslateError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let body: TranslateResponse = response.json().await?;
        let translated = body.translated_text.filter(|t| !t.trim().is_empty());
        debug!(
            target_lang = target.code(),
            empty = translated.is_none(),
            "translation complete"
        );
        Ok(translated)
    }
}
