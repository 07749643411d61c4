pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 1-based page position over a filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub per_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Pager { page: 1, per_page: DEFAULT_PAGE_SIZE }
    }
}

impl Pager {
    pub fn with_page_size(per_page: usize) -> Self {
        Pager { page: 1, per_page: per_page.max(1) }
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.per_page).max(1)
    }

    /// Re-establish `1 <= page <= total_pages` after any mutation.
    pub fn clamp(&mut self, total: usize) {
        let max = self.total_pages(total);
        if self.page < 1 {
            self.page = 1;
        }
        if self.page > max {
            self.page = max;
        }
    }

    /// Half-open slice bounds `[start, end)` into the filtered view.
    pub fn bounds(&self, total: usize) -> (usize, usize) {
        let start = (self.page.max(1) - 1) * self.per_page;
        let start = start.min(total);
        let end = (start + self.per_page).min(total);
        (start, end)
    }
}

/// Everything the pagination controls need, precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current: usize,
    pub total_pages: usize,
    /// Numbered buttons: at most five, centered on the current page.
    pub pages: Vec<usize>,
    pub has_prev: bool,
    pub has_next: bool,
    pub start_record: usize,
    pub end_record: usize,
    pub total_records: usize,
    /// Controls are hidden entirely when the view fits on one page.
    pub visible: bool,
}

impl PageWindow {
    pub fn build(pager: &Pager, total_records: usize) -> Self {
        let total_pages = pager.total_pages(total_records);
        let current = pager.page.clamp(1, total_pages);

        let mut start_page = current.saturating_sub(2).max(1);
        let end_page = (start_page + 4).min(total_pages);
        if end_page - start_page < 4 {
            start_page = end_page.saturating_sub(4).max(1);
        }
        let pages = (start_page..=end_page).collect();

        let (lo, hi) = pager.bounds(total_records);
        PageWindow {
            current,
            total_pages,
            pages,
            has_prev: current > 1,
            has_next: current < total_pages,
            start_record: if total_records == 0 { 0 } else { lo + 1 },
            end_record: hi,
            total_records,
            visible: total_records > pager.per_page,
        }
    }

    /// Range label shown under the table.
    pub fn summary(&self) -> String {
        format!(
            "Showing {}-{} of {} records",
            self.start_record, self.end_record, self.total_records
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(page: usize, per_page: usize) -> Pager {
        Pager { page, per_page }
    }

    #[test]
    fn clamp_pulls_page_back_into_range() {
        let mut p = pager(9, 10);
        p.clamp(23);
        assert_eq!(p.page, 3);

        let mut p = pager(5, 10);
        p.clamp(0);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn bounds_partition_the_view() {
        let total = 23;
        let mut covered = Vec::new();
        for page in 1..=3 {
            let (lo, hi) = pager(page, 10).bounds(total);
            covered.extend(lo..hi);
        }
        assert_eq!(covered, (0..23).collect::<Vec<_>>());
    }

    #[test]
    fn bounds_last_page_is_short() {
        assert_eq!(pager(3, 10).bounds(23), (20, 23));
        assert_eq!(pager(1, 10).bounds(8), (0, 8));
        assert_eq!(pager(1, 10).bounds(0), (0, 0));
    }

    #[test]
    fn window_is_centered_and_clamped() {
        // 12 pages of data, current in the middle
        let w = PageWindow::build(&pager(6, 10), 120);
        assert_eq!(w.pages, vec![4, 5, 6, 7, 8]);

        // pinned to the left edge
        let w = PageWindow::build(&pager(1, 10), 120);
        assert_eq!(w.pages, vec![1, 2, 3, 4, 5]);
        assert!(!w.has_prev);
        assert!(w.has_next);

        // pinned to the right edge
        let w = PageWindow::build(&pager(12, 10), 120);
        assert_eq!(w.pages, vec![8, 9, 10, 11, 12]);
        assert!(w.has_prev);
        assert!(!w.has_next);
    }

    #[test]
    fn window_shorter_than_five_pages() {
        let w = PageWindow::build(&pager(1, 10), 23);
        assert_eq!(w.pages, vec![1, 2, 3]);
        assert_eq!(w.total_pages, 3);
    }

    #[test]
    fn controls_hidden_when_view_fits_one_page() {
        let w = PageWindow::build(&pager(1, 10), 8);
        assert!(!w.visible);
        assert_eq!(w.summary(), "Showing 1-8 of 8 records");

        let w = PageWindow::build(&pager(1, 10), 10);
        assert!(!w.visible);

        let w = PageWindow::build(&pager(1, 10), 11);
        assert!(w.visible);
    }

    #[test]
    fn summary_for_empty_view() {
        let w = PageWindow::build(&pager(1, 10), 0);
        assert_eq!(w.summary(), "Showing 0-0 of 0 records");
        assert_eq!(w.pages, vec![1]);
        assert!(!w.visible);
    }

    #[test]
    fn summary_mid_view() {
        let w = PageWindow::build(&pager(2, 10), 23);
        assert_eq!(w.summary(), "Showing 11-20 of 23 records");
        let w = PageWindow::build(&pager(3, 10), 23);
        assert_eq!(w.summary(), "Showing 21-23 of 23 records");
    }
}
