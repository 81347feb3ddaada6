//! Fixed-size pagination and page navigation.

use serde::Serialize;

/// Rows per page unless configuration says otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub visible: &'a [T],
    pub total_pages: usize,
}

/// Number of pages needed for `count` items; 0 when there are none.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Clamp `page` into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slice `items` to the 1-based `current_page`.
///
/// Pages outside the list yield an empty slice; clamping is the caller's job.
pub fn paginate<T>(items: &[T], page_size: usize, current_page: usize) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    Page {
        visible: &items[start..end],
        total_pages,
    }
}

/// A pagination-bar action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Previous,
    Next,
    GoTo(usize),
}

impl PageRequest {
    /// Resolve the request against the current page, clamped to the valid range.
    pub fn resolve(self, current_page: usize, total_pages: usize) -> usize {
        let target = match self {
            PageRequest::Previous => current_page.saturating_sub(1),
            PageRequest::Next => current_page.saturating_add(1),
            PageRequest::GoTo(page) => page,
        };
        clamp_page(target, total_pages)
    }
}

/// Link state for rendering a pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub pages: Vec<usize>,
    pub current_page: usize,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

impl PageLinks {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            pages: (1..=total_pages).collect(),
            current_page,
            previous_disabled: current_page <= 1,
            next_disabled: current_page >= total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn twenty_five_items_split_ten_ten_five() {
        let items: Vec<u32> = (1..=25).collect();
        let first = paginate(&items, 10, 1);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.visible.len(), 10);
        assert_eq!(paginate(&items, 10, 2).visible.len(), 10);
        assert_eq!(paginate(&items, 10, 3).visible, &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn out_of_range_page_yields_empty_slice() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(paginate(&items, 10, 2).visible.is_empty());
        assert!(paginate(&items, 10, usize::MAX).visible.is_empty());
        assert!(paginate::<u32>(&[], 10, 1).visible.is_empty());
    }

    #[test]
    fn pages_concatenate_to_the_full_list() {
        let items: Vec<u32> = (0..37).collect();
        let total = total_pages(items.len(), 10);
        let rebuilt: Vec<u32> = (1..=total)
            .flat_map(|page| paginate(&items, 10, page).visible.to_vec())
            .collect();
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn navigation_clamps_to_valid_range() {
        assert_eq!(PageRequest::Previous.resolve(1, 3), 1);
        assert_eq!(PageRequest::Previous.resolve(3, 3), 2);
        assert_eq!(PageRequest::Next.resolve(3, 3), 3);
        assert_eq!(PageRequest::Next.resolve(1, 3), 2);
        assert_eq!(PageRequest::GoTo(99).resolve(1, 3), 3);
        assert_eq!(PageRequest::GoTo(0).resolve(2, 3), 1);
        assert_eq!(PageRequest::Next.resolve(1, 0), 1);
    }

    #[test]
    fn page_links_disable_edges() {
        let links = PageLinks::new(1, 3);
        assert_eq!(links.pages, vec![1, 2, 3]);
        assert!(links.previous_disabled);
        assert!(!links.next_disabled);
        let last = PageLinks::new(3, 3);
        assert!(!last.previous_disabled);
        assert!(last.next_disabled);
        let empty = PageLinks::new(1, 0);
        assert!(empty.pages.is_empty());
        assert!(empty.next_disabled);
    }
}
