use super::dates::parse_calendar_date;
use super::types::{AgeBounds, DateBounds, FilterSpec};
use crate::dataset::types::Record;

/// Keeps the records that pass every active criterion. Input order is preserved.
pub fn apply_filters<'a>(records: Vec<&'a Record>, spec: &FilterSpec) -> Vec<&'a Record> {
    if spec.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| matches_filters(record, spec))
        .collect()
}

/// The single predicate behind `apply_filters`: AND across criteria,
/// OR within a multi-select criterion. Stops at the first failing criterion.
pub fn matches_filters(record: &Record, spec: &FilterSpec) -> bool {
    one_of(&spec.regions, &record.region)
        && one_of(&spec.genders, &record.gender)
        && spec.age.map_or(true, |bounds| age_within(record.age, bounds))
        && one_of(&spec.categories, &record.category)
        && any_tag(&spec.tags, &record.tags)
        && one_of(&spec.payment_methods, &record.payment_method)
        && spec.dates.map_or(true, |bounds| date_within(&record.date, bounds))
}

fn one_of(allowed: &[String], value: &str) -> bool {
    allowed.is_empty() || allowed.iter().any(|candidate| candidate == value)
}

fn any_tag(wanted: &[String], tags: &[String]) -> bool {
    wanted.is_empty() || tags.iter().any(|tag| wanted.contains(tag))
}

fn age_within(age: u32, bounds: AgeBounds) -> bool {
    age >= bounds.min && age <= bounds.max
}

/// With no bound set every record passes. Once a bound is set, a record whose
/// date does not parse is excluded.
fn date_within(raw: &str, bounds: DateBounds) -> bool {
    if bounds.is_unbounded() {
        return true;
    }
    let Some(date) = parse_calendar_date(raw) else {
        return false;
    };
    // `to` is inclusive of the whole day: date < to + 1 day
    bounds.from.map_or(true, |from| date >= from) && bounds.to.map_or(true, |to| date <= to)
}
