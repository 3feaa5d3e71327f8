//! Scroll-offset viewport over a growing list.
//!
//! Pure data: knows which rows are on screen for a given height, nothing about
//! rendering or fetching. The pagination trigger consumes the
//! [`VisibleWindow`] it produces.

/// The slice of rows currently on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibleWindow {
    /// Index of the first row in view.
    pub first_visible: usize,
    /// Number of rows in view.
    pub visible_count: usize,
}

impl VisibleWindow {
    pub fn new(first_visible: usize, visible_count: usize) -> Self {
        Self {
            first_visible,
            visible_count,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Viewport {
    /// Total number of rows, including any trailing status row.
    pub total_rows: usize,
    /// Index of the first row drawn.
    pub scroll_offset: usize,
}

impl Viewport {
    pub fn new(total_rows: usize) -> Self {
        Self {
            total_rows,
            scroll_offset: 0,
        }
    }

    /// Update the row count. Rows only ever get appended while scrolling, but a
    /// refresh shrinks the list, so the offset is clamped.
    pub fn set_total_rows(&mut self, total_rows: usize) {
        self.total_rows = total_rows;
        if self.scroll_offset >= total_rows {
            self.scroll_offset = total_rows.saturating_sub(1);
        }
    }

    /// Rows visible for a viewport `height` rows tall.
    pub fn window(&self, height: usize) -> VisibleWindow {
        if self.total_rows == 0 || height == 0 {
            return VisibleWindow::new(self.scroll_offset, 0);
        }
        let remaining = self.total_rows.saturating_sub(self.scroll_offset);
        VisibleWindow::new(self.scroll_offset, remaining.min(height))
    }

    pub fn rows_below(&self, height: usize) -> usize {
        self.total_rows
            .saturating_sub(self.scroll_offset + height.min(self.total_rows))
    }

    pub fn set_scroll_offset(&mut self, offset: usize) {
        self.scroll_offset = offset.min(self.total_rows.saturating_sub(1));
    }

    /// Scroll just enough to bring `row_idx` into view.
    pub fn scroll_to_visible(&mut self, row_idx: usize, height: usize) {
        if height == 0 {
            return;
        }

        let scroll_end = self.scroll_offset + height;

        if row_idx < self.scroll_offset {
            self.scroll_offset = row_idx;
        } else if row_idx >= scroll_end {
            self.scroll_offset = row_idx.saturating_sub(height - 1);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_rows == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_empty() {
        let viewport = Viewport::new(0);
        let window = viewport.window(10);
        assert_eq!(window.visible_count, 0);
    }

    #[test]
    fn test_window_fits_all() {
        let viewport = Viewport::new(5);
        let window = viewport.window(10);
        assert_eq!(window, VisibleWindow::new(0, 5));
    }

    #[test]
    fn test_window_middle() {
        let mut viewport = Viewport::new(20);
        viewport.set_scroll_offset(5);
        let window = viewport.window(5);

        assert_eq!(window, VisibleWindow::new(5, 5));
        assert_eq!(viewport.rows_below(5), 10);
    }

    #[test]
    fn test_window_tail_is_partial() {
        let mut viewport = Viewport::new(12);
        viewport.set_scroll_offset(10);
        assert_eq!(viewport.window(5), VisibleWindow::new(10, 2));
        assert_eq!(viewport.rows_below(5), 0);
    }

    #[test]
    fn test_scroll_to_visible() {
        let mut viewport = Viewport::new(20);
        viewport.scroll_to_visible(15, 5);
        assert_eq!(viewport.scroll_offset, 11);

        viewport.scroll_to_visible(3, 5);
        assert_eq!(viewport.scroll_offset, 3);
    }

    #[test]
    fn test_set_total_rows_clamps_offset() {
        let mut viewport = Viewport::new(20);
        viewport.set_scroll_offset(15);

        viewport.set_total_rows(10);
        assert_eq!(viewport.scroll_offset, 9);

        viewport.set_total_rows(0);
        assert_eq!(viewport.scroll_offset, 0);
    }
}
