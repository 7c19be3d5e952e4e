//! Machine translation of watch-list queries.

pub mod client;

pub use client::{TranslateClient, TranslateError, Translator};

use serde::Serialize;

/// Queries always arrive in this language; only the target varies.
pub const SOURCE_LANGUAGE: Language = Language::Uk;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Uk,
    Ru,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Uk => "uk",
            Language::Ru => "ru",
        }
    }
}
