//! Page-number window math for paginated list controls.
//!
//! Pages are 1-based. Page 1 and the last page are fixed buttons outside the
//! window; the window is the run of numbered buttons between them.

use crate::constants::{DEFAULT_VISIBLE_COUNT, FIRST_PAGE, MAX_VISIBLE_COUNT};
use crate::types::{PageAction, PageWindow};

/// Compute the middle window of page buttons.
///
/// Negative `total_pages` is treated as 0. With one page or fewer the window
/// is empty and callers should hide page controls entirely. `visible_count`
/// is capped at `MAX_VISIBLE_COUNT`.
pub fn compute_window(current_page: i64, total_pages: i64, visible_count: usize) -> PageWindow {
    let total_pages = total_pages.max(0);
    if total_pages <= 1 {
        return PageWindow::default();
    }

    // At most MAX_VISIBLE_COUNT, so the cast is lossless.
    let visible = visible_count.min(MAX_VISIBLE_COUNT) as i64;
    let last_middle = total_pages - 1;

    let mut start = current_page.saturating_sub(visible / 2).max(2);
    let end = start.saturating_add(visible).saturating_sub(1).min(last_middle);

    // Window touches the end: slide it left so it stays `visible` wide.
    if end == last_middle && start > 2 {
        start = end.saturating_sub(visible).saturating_add(1).max(2);
    }

    let visible_pages: Vec<i64> = (start..=end).collect();
    let show_leading_ellipsis = visible_pages.first().is_some_and(|&p| p > 2);
    let show_trailing_ellipsis = visible_pages.last().is_some_and(|&p| p < last_middle);

    PageWindow {
        visible_pages,
        show_leading_ellipsis,
        show_trailing_ellipsis,
    }
}

/// `compute_window` with `DEFAULT_VISIBLE_COUNT` middle buttons.
pub fn compute_default_window(current_page: i64, total_pages: i64) -> PageWindow {
    compute_window(current_page, total_pages, DEFAULT_VISIBLE_COUNT)
}

/// Everything a list screen needs to draw its pagination controls.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaginationBar {
    pub current_page: i64,
    /// Display total. At least 1: an empty list still shows page "1".
    pub total_pages: i64,
    pub window: PageWindow,
    /// Whether a separate last-page button is drawn (only when there is more than one page).
    pub show_last: bool,
    pub first_highlighted: bool,
    pub last_highlighted: bool,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl PaginationBar {
    pub fn new(current_page: i64, total_pages: i64, visible_count: usize) -> Self {
        let display_total = total_pages.max(FIRST_PAGE);
        let show_last = display_total > FIRST_PAGE;

        PaginationBar {
            current_page,
            total_pages: display_total,
            window: compute_window(current_page, total_pages, visible_count),
            show_last,
            first_highlighted: current_page == FIRST_PAGE,
            last_highlighted: show_last && current_page == display_total,
            prev_disabled: current_page <= FIRST_PAGE,
            next_disabled: current_page >= display_total,
        }
    }

    /// False when there is a single page; page controls are not drawn then.
    pub fn is_navigable(&self) -> bool {
        self.total_pages > FIRST_PAGE
    }

    /// Whether `page` is drawn highlighted.
    pub fn is_highlighted(&self, page: i64) -> bool {
        page == self.current_page
    }

    /// Target page for a click, or `None` when the control is disabled or
    /// would land on the current page. The caller performs the fetch.
    pub fn resolve(&self, action: PageAction) -> Option<i64> {
        let target = match action {
            PageAction::First => FIRST_PAGE,
            PageAction::Last => self.total_pages,
            PageAction::Previous if self.prev_disabled => return None,
            PageAction::Previous => self.current_page - 1,
            PageAction::Next if self.next_disabled => return None,
            PageAction::Next => self.current_page + 1,
            PageAction::Goto(page) => page,
        };

        let target = clamp_page(target, self.total_pages);
        (target != self.current_page).then_some(target)
    }
}

/// Number of pages needed for `item_count` items.
pub fn total_pages(item_count: usize, per_page: usize) -> i64 {
    let pages = item_count.div_ceil(per_page.max(1));
    i64::try_from(pages).unwrap_or(i64::MAX)
}

/// Clamp a requested page into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: i64, total_pages: i64) -> i64 {
    page.clamp(FIRST_PAGE, total_pages.max(FIRST_PAGE))
}

/// Slice bounds `[start, end)` of `page` within an already-fetched list.
pub fn page_bounds(item_count: usize, per_page: usize, page: i64) -> (usize, usize) {
    let per_page = per_page.max(1);
    let page_index = usize::try_from(page.saturating_sub(FIRST_PAGE)).unwrap_or(0);
    let start = page_index.saturating_mul(per_page).min(item_count);
    let end = start.saturating_add(per_page).min(item_count);
    (start, end)
}
