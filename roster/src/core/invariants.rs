//! Structural invariants every derived view must satisfy.

use crate::core::derive::DerivedView;
use crate::core::paginate::total_pages;

/// Check a derived view against the pagination rules:
/// - `1 <= current_page <= max(1, total_pages)`
/// - `filtered_count <= raw_count`
/// - `total_pages == ceil(filtered_count / page_size)`
/// - visible rows equal the remainder of the filtered list for this page, capped at `page_size`
pub fn validate_view_invariants(
    view: &DerivedView,
    raw_count: usize,
    page_size: usize,
) -> Vec<String> {
    let mut errors = Vec::new();

    if view.current_page == 0 || view.current_page > view.total_pages.max(1) {
        errors.push(format!(
            "current_page {} outside 1..={}",
            view.current_page,
            view.total_pages.max(1)
        ));
    }

    if view.filtered_count > raw_count {
        errors.push(format!(
            "filtered_count {} exceeds raw count {}",
            view.filtered_count, raw_count
        ));
    }

    let expected_pages = total_pages(view.filtered_count, page_size);
    if view.total_pages != expected_pages {
        errors.push(format!(
            "total_pages {} but {} rows at {} per page need {}",
            view.total_pages, view.filtered_count, page_size, expected_pages
        ));
    }

    let skipped = view.current_page.saturating_sub(1).saturating_mul(page_size);
    let expected_rows = view.filtered_count.saturating_sub(skipped).min(page_size);
    if view.visible_records.len() != expected_rows {
        errors.push(format!(
            "page {} shows {} rows, expected {}",
            view.current_page,
            view.visible_records.len(),
            expected_rows
        ));
    }

    errors
}
