use super::filter::apply_filters;
use super::pagination::paginate;
use super::search::search;
use super::sort::sort_records;
use super::types::{QueryResult, QuerySpec};
use crate::dataset::types::{Dataset, FacetIndex, Record};

/// Runs search, filter, sort and pagination over `records`, in that order.
///
/// Search, filter and sort are skipped when their part of `spec` is absent;
/// pagination always runs. `records` is never modified.
pub fn run_query(records: &[Record], spec: &QuerySpec) -> QueryResult {
    let mut candidates: Vec<&Record> = records.iter().collect();

    if let Some(query) = spec.search.as_deref() {
        candidates = search(candidates, query);
        tracing::debug!("search {:?} kept {} records", query, candidates.len());
    }

    if !spec.filters.is_empty() {
        candidates = apply_filters(candidates, &spec.filters);
        tracing::debug!("filters kept {} records", candidates.len());
    }

    if let Some(sort) = spec.sort {
        candidates = sort_records(candidates, sort);
    }

    let (page, pagination) = paginate(&candidates, spec.page, spec.page_size);

    QueryResult {
        items: page.into_iter().cloned().collect(),
        pagination,
    }
}

/// Runs `spec` against the dataset's records.
pub fn query(dataset: &Dataset, spec: &QuerySpec) -> QueryResult {
    run_query(&dataset.records, spec)
}

/// Read accessor for the precomputed filter options.
pub fn get_facets(dataset: &Dataset) -> &FacetIndex {
    &dataset.facets
}
