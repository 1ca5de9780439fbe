use crate::dataset::types::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Inclusive age criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBounds {
    pub min: u32,
    pub max: u32,
}

/// Calendar date criterion. `to` covers the whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateBounds {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateBounds {
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// The seven independent filter criteria. An empty set or `None` always passes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    pub regions: Vec<String>,
    pub genders: Vec<String>,
    pub age: Option<AgeBounds>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub payment_methods: Vec<String>,
    pub dates: Option<DateBounds>,
}

impl FilterSpec {
    /// True when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
            && self.genders.is_empty()
            && self.age.is_none()
            && self.categories.is_empty()
            && self.tags.is_empty()
            && self.payment_methods.is_empty()
            && self.dates.map_or(true, |d| d.is_unbounded())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Quantity,
    CustomerName,
}

impl FromStr for SortKey {
    type Err = String;

    /// Case-insensitive: `date`, `quantity`, `customerName`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "quantity" => Ok(SortKey::Quantity),
            "customername" => Ok(SortKey::CustomerName),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `desc` in any case selects descending; everything else is ascending.
    pub fn parse_lenient(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// A single request against the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    pub search: Option<String>,
    pub filters: FilterSpec,
    /// `None` keeps the dataset order.
    pub sort: Option<SortSpec>,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            search: None,
            filters: FilterSpec::default(),
            sort: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: usize,
    pub page_size: usize,
    pub total_records: usize,
    pub total_pages: usize,
}

/// One bounded page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub items: Vec<Record>,
    pub pagination: PageMeta,
}
