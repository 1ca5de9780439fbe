//! Dataset Types
//!
//! The typed record produced at the ingestion boundary and the facet summary
//! derived from the full record set.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A raw CSV row keyed by column header. Columns may be absent.
pub type RawRow = HashMap<String, String>;

/// One normalized sales transaction.
///
/// Every field is always populated: strings default to empty, numbers to zero.
/// Downstream stages never need presence checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub customer_id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub gender: String,
    /// `0` means unknown.
    pub age: u32,
    pub region: String,
    pub customer_type: String,
    pub product_id: String,
    pub product_name: String,
    pub brand: String,
    pub category: String,
    pub tags: Vec<String>,
    pub quantity: u32,
    pub price_per_unit: f64,
    pub discount_percentage: f64,
    pub total_amount: f64,
    pub final_amount: f64,
    pub date: String,
    pub payment_method: String,
    pub order_status: String,
    pub delivery_type: String,
    pub store_id: String,
    pub store_location: String,
    pub salesperson_id: String,
    pub employee_name: String,
}

/// Inclusive age bounds observed across the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

/// Lexical min/max over the non-empty date strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub from: String,
    pub to: String,
}

/// Precomputed filter options. Every list is sorted ascending without duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetIndex {
    pub regions: Vec<String>,
    pub genders: Vec<String>,
    pub categories: Vec<String>,
    pub payment_methods: Vec<String>,
    pub tags: Vec<String>,
    pub age_range: AgeRange,
    /// `None` when no record carries a date.
    pub date_range: Option<DateSpan>,
}

/// The immutable record set together with its facet index.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub facets: FacetIndex,
}

/// Failure to build the dataset. Fatal to the process; there is no degraded state.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read dataset source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset source {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("dataset load task aborted: {0}")]
    Join(#[from] tokio::task::JoinError),
}
