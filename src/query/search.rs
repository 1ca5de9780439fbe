use crate::dataset::types::Record;
use regex::RegexBuilder;

/// A compiled, literal, case-insensitive search query.
#[derive(Debug)]
pub enum QueryMatcher {
    Pattern(regex::Regex),
    /// Used when the escaped pattern exceeds the regex size limits.
    /// Holds the lowercased query.
    Lowercase(String),
}

impl QueryMatcher {
    pub fn is_match(&self, haystack: &str) -> bool {
        match self {
            QueryMatcher::Pattern(re) => re.is_match(haystack),
            QueryMatcher::Lowercase(needle) => haystack.to_lowercase().contains(needle.as_str()),
        }
    }
}

/// Compiles the query as a literal, case-insensitive matcher.
///
/// Returns `None` only for an empty or whitespace-only query.
pub fn compile_query(query: &str) -> Option<QueryMatcher> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    match RegexBuilder::new(&regex::escape(trimmed))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(QueryMatcher::Pattern(re)),
        Err(err) => {
            tracing::debug!(
                "Search query of {} bytes not compiled ({}), matching as plain text",
                trimmed.len(),
                err
            );
            Some(QueryMatcher::Lowercase(trimmed.to_lowercase()))
        }
    }
}

/// Keeps records whose customer name or phone number contains `query`.
///
/// Metacharacters in `query` match themselves. Input order is preserved.
pub fn search<'a>(records: Vec<&'a Record>, query: &str) -> Vec<&'a Record> {
    let Some(matcher) = compile_query(query) else {
        return records;
    };
    records
        .into_iter()
        .filter(|record| {
            matcher.is_match(&record.customer_name) || matcher.is_match(&record.phone_number)
        })
        .collect()
}
