use super::dates::parse_calendar_date;
use super::types::{SortDirection, SortKey, SortSpec};
use crate::dataset::types::Record;
use std::cmp::Reverse;

/// Orders records by `spec`.
///
/// The ascending order is stable; descending is that exact sequence reversed,
/// so ties come out in reverse input order.
pub fn sort_records<'a>(mut records: Vec<&'a Record>, spec: SortSpec) -> Vec<&'a Record> {
    match spec.key {
        // Dates are parsed once per record rather than once per comparison.
        // Unparsable dates sort before every valid date.
        SortKey::Date => {
            let mut keyed: Vec<_> = records
                .into_iter()
                .map(|record| (parse_calendar_date(&record.date), record))
                .collect();
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
            records = keyed.into_iter().map(|(_, record)| record).collect();
        }
        SortKey::Quantity => records.sort_by_key(|record| record.quantity),
        // Lowercased names are computed once per record.
        SortKey::CustomerName => {
            let mut keyed: Vec<_> = records
                .into_iter()
                .map(|record| (name_key(&record.customer_name), record))
                .collect();
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
            records = keyed.into_iter().map(|(_, record)| record).collect();
        }
    }

    if spec.direction == SortDirection::Desc {
        records.reverse();
    }
    records
}

/// Sort key for customer names: case-insensitive first, and on a tie
/// lowercase before uppercase (`alice` < `Alice`).
pub fn name_key(name: &str) -> (String, Reverse<&str>) {
    (name.to_lowercase(), Reverse(name))
}
