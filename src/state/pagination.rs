use crate::error::{AppError, Result};

/// Return the `page_number`-th slice of `results`, `page_size` items wide.
///
/// Pages start at 1. Pages past the end are empty rather than an error; page 0
/// is rejected so that an off-by-one in the caller is not hidden.
pub fn page<T>(results: &[T], page_number: usize, page_size: usize) -> Result<&[T]> {
    if page_number < 1 {
        return Err(AppError::InvalidPage(page_number));
    }

    let start = (page_number - 1)
        .saturating_mul(page_size)
        .min(results.len());
    let end = page_number.saturating_mul(page_size).min(results.len());
    Ok(&results[start..end])
}

/// Number of pages needed to show `total` items, `page_size` at a time.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}
