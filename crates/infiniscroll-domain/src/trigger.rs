use infiniscroll_core::VisibleWindow;

/// Decides when the visible part of the list is close enough to the end of
/// loaded data that the next page should be requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollTrigger {
    /// Rows of lookahead; 0 fires only once the last loaded row is on screen.
    pub prefetch_distance: usize,
}

impl ScrollTrigger {
    pub fn new(prefetch_distance: usize) -> Self {
        Self { prefetch_distance }
    }

    pub fn is_near_end(&self, window: VisibleWindow, loaded: usize) -> bool {
        window
            .first_visible
            .saturating_add(window.visible_count)
            .saturating_add(self.prefetch_distance)
            >= loaded
    }
}
