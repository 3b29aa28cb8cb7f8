// Page scroll state
//
// The page is one tall column of lines; this tracks which line sits at
// the top of the viewport. Unlike a log view there is no auto-follow:
// a landing page opens at the top and stays where the reader left it,
// with dimensions re-clamped every frame as animations change heights.

/// Scroll state for the page column
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    /// Line index at the top of the viewport
    offset: usize,

    /// Total number of lines in the composed page
    total: usize,

    /// Number of lines visible in the viewport
    viewport: usize,
}

impl PageScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scroll up by `lines` (one for keys, a few for the mouse wheel)
    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Scroll down by `lines`, clamped to the bottom of the page
    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = (self.offset + lines).min(self.max_offset());
    }

    /// Scroll up by a viewport's worth
    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport.max(1));
    }

    /// Scroll down by a viewport's worth
    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport.max(1));
    }

    /// Jump to top
    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    /// Jump to bottom
    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Put `line` at the top of the viewport, clamped so the page never
    /// overscrolls. Used by the menu to jump to a section heading.
    pub fn jump_to(&mut self, line: usize) {
        self.offset = line.min(self.max_offset());
    }

    /// Get current scroll offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Lines visible at once, as of the last dimension update
    pub fn viewport(&self) -> usize {
        self.viewport
    }

    /// How far down the page sits, 0 at the top and 100 at the bottom
    pub fn percent(&self) -> usize {
        if self.max_offset() == 0 {
            100
        } else {
            self.offset * 100 / self.max_offset()
        }
    }

    /// Check if the whole page already fits the viewport
    pub fn fits(&self) -> bool {
        self.total <= self.viewport
    }

    /// Maximum valid offset
    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}
