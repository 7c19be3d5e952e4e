//! Scripted collaborators for engine and HTTP surface tests.

use std::sync::Mutex;
use std::time::Duration;

use crate::meili::types::Hit;
use crate::meili::{IndexSearch, MeiliError, SearchOptions};
use crate::search::types::{Constraint, Country};
use crate::translate::{Language, TranslateError, Translator};

#[derive(Debug, Clone)]
pub(crate) struct Call {
    pub index: String,
    pub query: String,
    pub options: SearchOptions,
}

impl Call {
    pub fn country(&self) -> Option<Country> {
        match self.options.filter.country {
            Constraint::Only(country) => Some(country),
            Constraint::Unconstrained => None,
        }
    }
}

type Respond = dyn Fn(&Call) -> Result<Vec<Hit>, MeiliError> + Send + Sync;
type Delay = dyn Fn(&Call) -> Duration + Send + Sync;

pub(crate) struct MockIndex {
    respond: Box<Respond>,
    delay: Box<Delay>,
    calls: Mutex<Vec<Call>>,
}

impl MockIndex {
    pub fn new(
        respond: impl Fn(&Call) -> Result<Vec<Hit>, MeiliError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            delay: Box::new(|_| Duration::ZERO),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(|_| Ok(Vec::new()))
    }

    pub fn with_delay(mut self, delay: impl Fn(&Call) -> Duration + Send + Sync + 'static) -> Self {
        self.delay = Box::new(delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl IndexSearch for MockIndex {
    async fn search(
        &self,
        index: &str,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<Hit>, MeiliError> {
        let call = Call {
            index: index.to_string(),
            query: query.to_string(),
            options: options.clone(),
        };
        self.calls.lock().unwrap().push(call.clone());

        let delay = (self.delay)(&call);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        (self.respond)(&call)
    }
}

type Translate = dyn Fn(&str) -> Result<Option<String>, TranslateError> + Send + Sync;

pub(crate) struct MockTranslator {
    translate: Box<Translate>,
    calls: Mutex<Vec<(String, Language)>>,
}

impl MockTranslator {
    pub fn new(
        translate: impl Fn(&str) -> Result<Option<String>, TranslateError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            translate: Box::new(translate),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(text: Option<&str>) -> Self {
        let text = text.map(str::to_string);
        Self::new(move |_| Ok(text.clone()))
    }

    pub fn calls(&self) -> Vec<(String, Language)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        target: Language,
    ) -> Result<Option<String>, TranslateError> {
        self.calls.lock().unwrap().push((text.to_string(), target));
        (self.translate)(text)
    }
}

pub(crate) fn hit(name: &str, kind: &str, country: &str, score: f64) -> Hit {
    Hit {
        name: Some(name.to_string()),
        kind: Some(kind.to_string()),
        country: Some(country.to_string()),
        formatted: None,
        ranking_score: score,
    }
}

pub(crate) fn upstream_down() -> MeiliError {
    MeiliError::Api {
        code: 503,
        message: "service unavailable".into(),
    }
}
