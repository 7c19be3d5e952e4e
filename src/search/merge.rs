use futures::future::join_all;

use super::format::format_hit;
use super::types::{Candidate, Constraint, Country, SearchFilter, SearchType};
use crate::meili::{IndexSearch, MeiliError, SearchOptions};

/// Fans a query out over every jurisdiction partition and merges the hits.
///
/// All partitions are queried concurrently with the same type filter, limit
/// and threshold taken from `base`. Hits are formatted and sorted by score,
/// highest first; ties keep partition order. The limit applies per partition
/// and is not re-applied after merging, so up to `Country::ALL.len() * limit`
/// candidates come back.
///
/// Every partition runs to completion before the outcome is decided; the
/// first partition error is returned.
pub async fn search_candidates<S: IndexSearch>(
    search: &S,
    index: &str,
    query: &str,
    kind: SearchType,
    base: &SearchOptions,
) -> Result<Vec<Candidate>, MeiliError> {
    let partitions = Country::ALL.map(|country| {
        let options = SearchOptions {
            filter: SearchFilter {
                kind: Constraint::Only(kind),
                country: Constraint::Only(country),
            },
            ..base.clone()
        };
        async move { search.search(index, query, &options).await }
    });

    let mut candidates = Vec::new();
    for outcome in join_all(partitions).await {
        candidates.extend(outcome?.into_iter().map(format_hit));
    }

    sort_by_score(&mut candidates);
    Ok(candidates)
}

fn sort_by_score(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
}
