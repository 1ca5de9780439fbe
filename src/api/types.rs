//! API Data Types
//!
//! Query parameters accepted by the HTTP endpoints and the JSON envelopes they return.

use crate::dataset::types::{FacetIndex, Record};
use crate::query::types::PageMeta;
use serde::{Deserialize, Serialize};

pub const ENDPOINT_SALES: &str = "/api/sales";
pub const ENDPOINT_FILTER_OPTIONS: &str = "/api/filters/options";
pub const ENDPOINT_HEALTH: &str = "/health";

/// Largest page size a client may request.
pub const MAX_LIMIT: i64 = 100;

/// Raw query string of `GET /api/sales`.
///
/// Everything arrives as text; multi-valued filters are comma-separated.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesParams {
    pub search: Option<String>,
    pub region: Option<String>,
    pub gender: Option<String>,
    pub age_min: Option<String>,
    pub age_max: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub payment_method: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SalesResponse<'a> {
    pub success: bool,
    pub data: Vec<Record>,
    pub pagination: PageMeta,
    pub filters: &'a FacetIndex,
}

#[derive(Debug, Serialize)]
pub struct FilterOptionsResponse<'a> {
    pub success: bool,
    pub filters: &'a FacetIndex,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            error: None,
        }
    }

    pub fn with_error(message: &str, error: impl ToString) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            error: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
