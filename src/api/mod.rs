//! HTTP surface: `POST /search` and `POST /smart-search`.

mod errors;

pub use errors::ApiError;

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::meili::IndexSearch;
use crate::search::types::{Candidate, CandidateGroup, SearchRequest};
use crate::search::{SanctionsSearch, ValidationError};
use crate::translate::Translator;

#[derive(Debug, Serialize)]
pub struct Results<T> {
    pub results: Vec<T>,
}

pub fn router<S, T>(engine: Arc<SanctionsSearch<S, T>>) -> Router
where
    S: IndexSearch + Send + Sync + 'static,
    T: Translator + Send + Sync + 'static,
{
    Router::new()
        .route("/search", post(search::<S, T>))
        .route("/smart-search", post(smart_search::<S, T>))
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}

async fn search<S, T>(
    State(engine): State<Arc<SanctionsSearch<S, T>>>,
    body: Bytes,
) -> Result<Json<Results<Candidate>>, ApiError>
where
    S: IndexSearch + Send + Sync,
    T: Translator + Send + Sync,
{
    let request = parse_request(&body)?;
    let results = engine.direct(&request).await?;
    Ok(Json(Results { results }))
}

async fn smart_search<S, T>(
    State(engine): State<Arc<SanctionsSearch<S, T>>>,
    body: Bytes,
) -> Result<Json<Results<CandidateGroup>>, ApiError>
where
    S: IndexSearch + Send + Sync,
    T: Translator + Send + Sync,
{
    let request = parse_request(&body)?;
    let results = engine.smart(&request).await?;
    Ok(Json(Results { results }))
}

fn parse_request(body: &[u8]) -> Result<SearchRequest, ValidationError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "rejecting request body");
        ValidationError::InvalidBody
    })
}
