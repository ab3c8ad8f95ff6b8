// src/query/search.rs

//! Free-text search over department names and service titles.

use crate::models::{Department, ResultKind, SearchResult, Service};
use crate::utils::{contains_folded, fold_case, is_blank};

/// Find departments and services whose name contains the query.
///
/// Matching is a case-insensitive contiguous substring test. A blank query
/// yields no results. Department hits come first, then service hits, each
/// group in catalog order.
pub fn search(departments: &[Department], services: &[Service], query: &str) -> Vec<SearchResult> {
    if is_blank(query) {
        return Vec::new();
    }
    let needle = fold_case(query);

    let department_hits = departments
        .iter()
        .filter(|d| contains_folded(&d.name, &needle))
        .map(|d| SearchResult {
            id: d.id.clone(),
            kind: ResultKind::Department,
            name: d.name.clone(),
        });

    let service_hits = services
        .iter()
        .filter(|s| contains_folded(&s.title, &needle))
        .map(|s| SearchResult {
            id: s.id.clone(),
            kind: ResultKind::Service,
            name: s.title.clone(),
        });

    let results: Vec<SearchResult> = department_hits.chain(service_hits).collect();
    log::debug!("Search '{}' matched {} entries", query, results.len());
    results
}
