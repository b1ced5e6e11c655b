//! Paging - Page Window Math and Typed Page Entry
//!
//! Pure logic behind the page navigator: the sliding window of page
//! buttons, the displayed item range, and validation of direct page-number
//! entry. The GPUI component only renders what these functions compute.

use snafu::Snafu;

use crate::constants::PAGE_WINDOW_LEN;

/// Compute the contiguous window of page numbers to render as buttons.
///
/// A fixed-width window of [`PAGE_WINDOW_LEN`] pages slides with the current
/// page, clamping to the first or last pages near either boundary. The
/// current page is always inside the window.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= PAGE_WINDOW_LEN {
        (1..=total_pages).collect()
    } else if current_page <= 3 {
        (1..=PAGE_WINDOW_LEN).collect()
    } else if current_page >= total_pages - 2 {
        (total_pages - (PAGE_WINDOW_LEN - 1)..=total_pages).collect()
    } else {
        (current_page - 2..=current_page + 2).collect()
    }
}

/// Number of pages needed for `total_items` at `items_per_page` per page.
///
/// At least 1 so that `current_page` always has a valid home.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 1;
    }
    total_items.div_ceil(items_per_page).max(1)
}

/// The 1-based item range shown as "{start}-{end} of {total}".
///
/// Start is 0 when there are no items at all.
pub fn item_range(current_page: usize, items_per_page: usize, total_items: usize) -> (usize, usize) {
    if total_items == 0 {
        return (0, 0);
    }
    let start = (current_page - 1) * items_per_page + 1;
    let end = (current_page * items_per_page).min(total_items);
    (start, end)
}

/// Whether a page-change request may proceed.
///
/// Out-of-range targets and requests while a load is in progress are
/// rejected silently; the navigation callback must not fire for them.
pub fn can_change_page(target: usize, total_pages: usize, loading: bool) -> bool {
    !loading && target >= 1 && target <= total_pages
}

/// Validation failures for typed page-number entry.
///
/// Shown inline next to the input; never surfaced as a crash.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum PageEntryError {
    #[snafu(display("Please enter a page number"))]
    Missing,

    #[snafu(display("Please enter a valid number"))]
    NotANumber,

    #[snafu(display("Page must be between 1 and {total_pages}"))]
    OutOfRange { total_pages: usize },
}

/// Text state of the "go to page" input.
///
/// A keystroke clears a previously shown error without re-validating;
/// validation only runs on explicit submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageEntry {
    raw: String,
    error: Option<PageEntryError>,
}

impl PageEntry {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn error(&self) -> Option<&PageEntryError> {
        self.error.as_ref()
    }

    /// Append a typed character, clearing any stale error.
    pub fn push_char(&mut self, ch: char) {
        self.error = None;
        self.raw.push(ch);
    }

    /// Remove the last character, clearing any stale error.
    pub fn backspace(&mut self) {
        self.error = None;
        self.raw.pop();
    }

    /// Clear text and error, e.g. after a committed page change.
    pub fn reset(&mut self) {
        self.raw.clear();
        self.error = None;
    }

    /// Validate the current text against `[1, total_pages]`.
    ///
    /// Returns the parsed page on success; otherwise records the error for
    /// inline display and returns `None`.
    pub fn submit(&mut self, total_pages: usize) -> Option<usize> {
        let trimmed = self.raw.trim();
        if trimmed.is_empty() {
            self.error = Some(PageEntryError::Missing);
            return None;
        }
        let Ok(page) = trimmed.parse::<i64>() else {
            self.error = Some(PageEntryError::NotANumber);
            return None;
        };
        if page < 1 || page > total_pages as i64 {
            self.error = Some(PageEntryError::OutOfRange { total_pages });
            return None;
        }
        self.error = None;
        Some(page as usize)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_is_exact_for_small_totals() {
        for total in 0..=5 {
            for current in 1..=total.max(1) {
                assert_eq!(
                    page_window(current, total),
                    (1..=total).collect::<Vec<_>>(),
                    "current={current} total={total}"
                );
            }
        }
    }

    #[test]
    fn window_clamps_at_start() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(3, 10), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_clamps_at_end() {
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(8, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn window_slides_in_the_middle() {
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn window_always_contains_current_and_has_len_five() {
        for total in 6..40 {
            for current in 1..=total {
                let window = page_window(current, total);
                assert_eq!(window.len(), 5, "current={current} total={total}");
                assert!(window.contains(&current), "current={current} total={total}");
                assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
            }
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 25), 1);
        assert_eq!(total_pages(25, 25), 1);
        assert_eq!(total_pages(26, 25), 2);
        assert_eq!(total_pages(193, 25), 8);
    }

    #[test]
    fn item_range_math() {
        assert_eq!(item_range(1, 25, 193), (1, 25));
        assert_eq!(item_range(8, 25, 193), (176, 193));
        assert_eq!(item_range(1, 25, 0), (0, 0));
        assert_eq!(item_range(1, 25, 10), (1, 10));
    }

    #[test]
    fn out_of_range_changes_are_rejected() {
        assert!(!can_change_page(0, 10, false));
        assert!(!can_change_page(11, 10, false));
        assert!(can_change_page(1, 10, false));
        assert!(can_change_page(10, 10, false));
    }

    #[test]
    fn changes_are_rejected_while_loading() {
        assert!(!can_change_page(5, 10, true));
    }

    #[test]
    fn re_requesting_the_displayed_page_is_allowed() {
        // Submitting the page already shown counts as a reload, not a
        // suppressed no-op; only range and loading reject a request.
        for displayed in 1..=10 {
            assert!(can_change_page(displayed, 10, false));
        }
    }

    #[test]
    fn submit_empty_reports_missing() {
        let mut entry = PageEntry::default();
        assert_eq!(entry.submit(10), None);
        assert_eq!(
            entry.error().map(ToString::to_string),
            Some("Please enter a page number".to_string())
        );

        entry.raw = "   ".to_string();
        assert_eq!(entry.submit(10), None);
        assert_eq!(entry.error(), Some(&PageEntryError::Missing));
    }

    #[test]
    fn submit_non_numeric_reports_invalid() {
        let mut entry = PageEntry::default();
        for ch in "abc".chars() {
            entry.push_char(ch);
        }
        assert_eq!(entry.submit(10), None);
        assert_eq!(
            entry.error().map(ToString::to_string),
            Some("Please enter a valid number".to_string())
        );
    }

    #[test]
    fn submit_out_of_range_reports_bounds() {
        let mut entry = PageEntry::default();
        entry.push_char('0');
        assert_eq!(entry.submit(10), None);
        assert_eq!(
            entry.error().map(ToString::to_string),
            Some("Page must be between 1 and 10".to_string())
        );

        entry.reset();
        for ch in "11".chars() {
            entry.push_char(ch);
        }
        assert_eq!(entry.submit(10), None);
        assert_eq!(entry.error(), Some(&PageEntryError::OutOfRange { total_pages: 10 }));
    }

    #[test]
    fn submit_valid_returns_page() {
        let mut entry = PageEntry::default();
        entry.push_char('7');
        assert_eq!(entry.submit(10), Some(7));
        assert_eq!(entry.error(), None);
    }

    #[test]
    fn keystroke_clears_error_without_revalidating() {
        let mut entry = PageEntry::default();
        entry.submit(10);
        assert!(entry.error().is_some());

        entry.push_char('x');
        assert_eq!(entry.error(), None, "error cleared on keystroke");

        // Still invalid, but only the next submit reports it.
        assert_eq!(entry.submit(10), None);
        assert_eq!(entry.error(), Some(&PageEntryError::NotANumber));
    }

    #[test]
    fn reset_clears_text_and_error() {
        let mut entry = PageEntry::default();
        entry.push_char('9');
        entry.submit(3);
        entry.reset();
        assert_eq!(entry.raw(), "");
        assert_eq!(entry.error(), None);
    }
}
