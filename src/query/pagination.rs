use super::types::PageMeta;

/// Slices one page out of `records`.
///
/// `total_pages` is at least 1 and the requested page is clamped into
/// `[1, total_pages]`, so an out-of-range request lands on the nearest page.
/// `page_size` is reported as given; a zero size is treated as 1 for slicing.
pub fn paginate<T: Clone>(records: &[T], page: usize, page_size: usize) -> (Vec<T>, PageMeta) {
    let total_records = records.len();
    let effective_size = page_size.max(1);
    let total_pages = total_records.div_ceil(effective_size).max(1);
    let page = page.clamp(1, total_pages);

    let start = ((page - 1) * effective_size).min(total_records);
    let end = start.saturating_add(effective_size).min(total_records);

    (
        records[start..end].to_vec(),
        PageMeta {
            page,
            page_size,
            total_records,
            total_pages,
        },
    )
}
