use infiniscroll_core::{Viewport, VisibleWindow};

/// Selection plus scroll position of the on-screen list.
///
/// Row counts include the trailing footer row, so the footer can be selected
/// and scrolled into view like any record.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    selected: Option<usize>,
    viewport: Viewport,
    height: usize,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn scroll_offset(&self) -> usize {
        self.viewport.scroll_offset
    }

    pub fn window(&self) -> VisibleWindow {
        self.viewport.window(self.height)
    }

    pub fn rows_below(&self) -> usize {
        self.viewport.rows_below(self.height)
    }

    /// Called from render once the list area is known.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.follow_selection();
    }

    pub fn set_total_rows(&mut self, total_rows: usize) {
        self.viewport.set_total_rows(total_rows);
        self.selected = match self.selected {
            _ if total_rows == 0 => None,
            Some(idx) => Some(idx.min(total_rows - 1)),
            None => Some(0),
        };
        self.follow_selection();
    }

    pub fn select_next(&mut self) {
        self.move_by(1);
    }

    pub fn select_prev(&mut self) {
        self.move_by(-1);
    }

    pub fn page_down(&mut self) {
        self.move_by(self.height.max(1) as isize);
    }

    pub fn page_up(&mut self) {
        self.move_by(-(self.height.max(1) as isize));
    }

    pub fn jump_to_first(&mut self) {
        if !self.viewport.is_empty() {
            self.selected = Some(0);
            self.follow_selection();
        }
    }

    pub fn jump_to_last(&mut self) {
        if !self.viewport.is_empty() {
            self.selected = Some(self.viewport.total_rows - 1);
            self.follow_selection();
        }
    }

    pub fn reset(&mut self) {
        self.selected = None;
        self.viewport = Viewport::new(0);
    }

    fn move_by(&mut self, delta: isize) {
        let total = self.viewport.total_rows;
        if total == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0) as isize;
        let target = (current + delta).clamp(0, total as isize - 1);
        self.selected = Some(target as usize);
        self.follow_selection();
    }

    fn follow_selection(&mut self) {
        if let Some(idx) = self.selected {
            self.viewport.scroll_to_visible(idx, self.height);
        }
    }
}
