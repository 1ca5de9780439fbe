use super::types::{
    ErrorResponse, FilterOptionsResponse, HealthResponse, SalesParams, SalesResponse, MAX_LIMIT,
};
use crate::dataset::loader::SharedDataset;
use crate::dataset::normalizer::parse_leading_int;
use crate::query::dates::parse_calendar_date;
use crate::query::pipeline::{get_facets, query};
use crate::query::types::{
    AgeBounds, DateBounds, FilterSpec, QuerySpec, SortDirection, SortKey, SortSpec, DEFAULT_PAGE,
    DEFAULT_PAGE_SIZE,
};
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

const AGE_MIN_DEFAULT: u32 = 0;
const AGE_MAX_DEFAULT: u32 = 999;

pub async fn handle_sales(
    params: Result<Query<SalesParams>, QueryRejection>,
    Extension(shared): Extension<Arc<SharedDataset>>,
) -> Response {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!("Malformed sales query string: {}", rejection);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_error(
                    "Invalid query parameters",
                    rejection.body_text(),
                )),
            )
                .into_response();
        }
    };

    let spec = match build_query_spec(&params) {
        Ok(spec) => spec,
        Err(message) => {
            tracing::debug!("Rejected sales query: {}", message);
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response();
        }
    };

    let dataset = match shared.get().await {
        Ok(dataset) => dataset,
        Err(err) => {
            tracing::error!("Failed to load dataset: {}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Failed to retrieve data", err)),
            )
                .into_response();
        }
    };

    let result = query(&dataset, &spec);
    tracing::debug!(
        "Sales query matched {} records, returning page {}/{}",
        result.pagination.total_records,
        result.pagination.page,
        result.pagination.total_pages
    );

    Json(SalesResponse {
        success: true,
        data: result.items,
        pagination: result.pagination,
        filters: get_facets(&dataset),
    })
    .into_response()
}

pub async fn handle_filter_options(
    Extension(shared): Extension<Arc<SharedDataset>>,
) -> Response {
    match shared.get().await {
        Ok(dataset) => Json(FilterOptionsResponse {
            success: true,
            filters: get_facets(&dataset),
        })
        .into_response(),
        Err(err) => {
            tracing::error!("Failed to load filter options: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to load filter options")),
            )
                .into_response()
        }
    }
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn handle_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Route not found")),
    )
}

/// Validates the raw parameters and converts them into a `QuerySpec`.
///
/// Only `page` and `limit` can be rejected; every other parameter degrades to
/// "not supplied" when it cannot be understood.
pub fn build_query_spec(params: &SalesParams) -> Result<QuerySpec, &'static str> {
    let page = match non_blank(&params.page) {
        Some(raw) => match raw.parse::<i64>() {
            Ok(page) if page >= 1 => page as usize,
            _ => return Err("Invalid page number"),
        },
        None => DEFAULT_PAGE,
    };

    let page_size = match non_blank(&params.limit) {
        Some(raw) => match raw.parse::<i64>() {
            Ok(limit) if (1..=MAX_LIMIT).contains(&limit) => limit as usize,
            _ => return Err("Invalid limit"),
        },
        None => DEFAULT_PAGE_SIZE,
    };

    let age_min = non_blank(&params.age_min);
    let age_max = non_blank(&params.age_max);
    let age = if age_min.is_some() || age_max.is_some() {
        Some(AgeBounds {
            min: parse_bound(age_min, AGE_MIN_DEFAULT),
            max: parse_bound(age_max, AGE_MAX_DEFAULT),
        })
    } else {
        None
    };

    let dates = DateBounds {
        from: non_blank(&params.date_from).and_then(parse_calendar_date),
        to: non_blank(&params.date_to).and_then(parse_calendar_date),
    };

    let filters = FilterSpec {
        regions: split_list(&params.region),
        genders: split_list(&params.gender),
        age,
        categories: split_list(&params.category),
        tags: split_list(&params.tags),
        payment_methods: split_list(&params.payment_method),
        dates: (!dates.is_unbounded()).then_some(dates),
    };

    let sort = non_blank(&params.sort_by).and_then(|raw| match raw.parse::<SortKey>() {
        Ok(key) => Some(SortSpec {
            key,
            direction: params
                .sort_order
                .as_deref()
                .map(SortDirection::parse_lenient)
                .unwrap_or_default(),
        }),
        Err(err) => {
            tracing::debug!("Ignoring sort: {}", err);
            None
        }
    });

    Ok(QuerySpec {
        search: non_blank(&params.search).map(str::to_string),
        filters,
        sort,
        page,
        page_size,
    })
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn split_list(value: &Option<String>) -> Vec<String> {
    non_blank(value)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Reads the leading integer of an age bound (`"40abc"` -> 40).
///
/// A missing bound, or one that reads as zero, takes `default`.
fn parse_bound(raw: Option<&str>, default: u32) -> u32 {
    match raw.map(parse_leading_int) {
        Some(0) | None => default,
        Some(bound) => bound,
    }
}
