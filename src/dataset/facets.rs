use super::types::{AgeRange, DateSpan, FacetIndex, Record};
use std::collections::BTreeSet;

/// Slider bounds reported when no record carries a known age.
pub const DEFAULT_AGE_RANGE: AgeRange = AgeRange { min: 18, max: 75 };

/// Builds the facet index in one pass over `records`.
///
/// The result depends only on the set of records, not on their order.
pub fn build_facet_index(records: &[Record]) -> FacetIndex {
    let mut regions = BTreeSet::new();
    let mut genders = BTreeSet::new();
    let mut categories = BTreeSet::new();
    let mut payment_methods = BTreeSet::new();
    let mut tags = BTreeSet::new();
    let mut ages: Option<(u32, u32)> = None;
    let mut dates: Option<(&str, &str)> = None;

    for record in records {
        insert_non_empty(&mut regions, &record.region);
        insert_non_empty(&mut genders, &record.gender);
        insert_non_empty(&mut categories, &record.category);
        insert_non_empty(&mut payment_methods, &record.payment_method);
        for tag in &record.tags {
            insert_non_empty(&mut tags, tag);
        }

        if record.age > 0 {
            ages = Some(match ages {
                Some((min, max)) => (min.min(record.age), max.max(record.age)),
                None => (record.age, record.age),
            });
        }

        if !record.date.is_empty() {
            let date = record.date.as_str();
            dates = Some(match dates {
                Some((from, to)) => (from.min(date), to.max(date)),
                None => (date, date),
            });
        }
    }

    FacetIndex {
        regions: regions.into_iter().collect(),
        genders: genders.into_iter().collect(),
        categories: categories.into_iter().collect(),
        payment_methods: payment_methods.into_iter().collect(),
        tags: tags.into_iter().collect(),
        age_range: ages
            .map(|(min, max)| AgeRange { min, max })
            .unwrap_or(DEFAULT_AGE_RANGE),
        date_range: dates.map(|(from, to)| DateSpan {
            from: from.to_string(),
            to: to.to_string(),
        }),
    }
}

fn insert_non_empty(set: &mut BTreeSet<String>, value: &str) {
    if !value.is_empty() && !set.contains(value) {
        set.insert(value.to_string());
    }
}
