//! Page composition for listing endpoints
//!
//! Provides a pure, rendering-agnostic paginator shared by all services.
//! Page numbers are 1-based; out-of-range numbers clamp to the nearest
//! valid page instead of erroring, so a stale link never turns into a 404.

use serde::Serialize;

/// One page of an ordered collection.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// Items on this page, at most `page_size` of them.
    pub items: Vec<T>,
    /// 1-based page number after clamping.
    pub number: u32,
    /// Total number of items across all pages.
    pub total_count: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// Total number of pages; an empty collection still has one (empty) page.
    pub fn total_pages(&self, page_size: usize) -> u32 {
        page_count(self.total_count, page_size)
    }
}

fn page_count(total: u64, page_size: usize) -> u32 {
    let size = page_size.max(1) as u64;
    (total.div_ceil(size).max(1)).min(u32::MAX as u64) as u32
}

/// Slice an ordered collection into the requested page.
///
/// `page_number` is 1-based and clamps into `1..=total_pages`; `page_size`
/// is a fixed configuration value, never caller-controlled. The input order
/// is preserved, so callers are responsible for sorting before paginating.
pub fn paginate<T>(items: Vec<T>, page_size: usize, page_number: u32) -> Page<T> {
    let size = page_size.max(1);
    let total_count = items.len() as u64;
    let total_pages = page_count(total_count, size);
    let number = page_number.clamp(1, total_pages);

    let start = (number as usize - 1) * size;
    let page_items: Vec<T> = items.into_iter().skip(start).take(size).collect();

    Page {
        items: page_items,
        number,
        total_count,
        has_next: number < total_pages,
        has_previous: number > 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_thirteen_items_into_ten_and_three() {
        let first = paginate((0..13).collect::<Vec<_>>(), 10, 1);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.items[0], 0);
        assert!(first.has_next);
        assert!(!first.has_previous);

        let second = paginate((0..13).collect::<Vec<_>>(), 10, 2);
        assert_eq!(second.items, vec![10, 11, 12]);
        assert_eq!(second.total_count, 13);
        assert!(!second.has_next);
        assert!(second.has_previous);
    }

    #[test]
    fn clamps_out_of_range_page_numbers() {
        let past_end = paginate((0..13).collect::<Vec<_>>(), 10, 99);
        assert_eq!(past_end.number, 2);
        assert_eq!(past_end.items, vec![10, 11, 12]);

        let before_start = paginate((0..13).collect::<Vec<_>>(), 10, 0);
        assert_eq!(before_start.number, 1);
        assert_eq!(before_start.items.len(), 10);
    }

    #[test]
    fn empty_collection_yields_one_empty_page() {
        let page = paginate(Vec::<i32>::new(), 10, 3);
        assert_eq!(page.number, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert!(!page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let page = paginate((0..20).collect::<Vec<_>>(), 10, 2);
        assert_eq!(page.items.len(), 10);
        assert!(!page.has_next);
        assert_eq!(page.total_pages(10), 2);
    }

    #[test]
    fn preserves_input_order_within_a_page() {
        let page = paginate(vec!["c", "b", "a"], 2, 1);
        assert_eq!(page.items, vec!["c", "b"]);
    }
}
