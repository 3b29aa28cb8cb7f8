/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.
use ratatui::layout::Rect;

/// Maximum width of the centered page column, in cells. Body text wider
/// than this stops reading like a page.
const MAX_CONTENT_WIDTH: u16 = 96;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: stacked cards, menu-only navigation
    Compact,
    /// 60-99 cols: comfortable column, still menu-only navigation
    Normal,
    /// 100+ cols: inline nav links and side-by-side feature cards
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    /// Whether the nav bar shows its links inline; below this the links
    /// move into the menu overlay.
    pub fn inline_nav(&self) -> bool {
        self.at_least(Breakpoint::Wide)
    }

    /// Whether feature cards render side by side instead of stacked.
    pub fn cards_side_by_side(&self) -> bool {
        self.at_least(Breakpoint::Wide)
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

/// Centered content column inside `area`, like a page's max-width
/// container: full width minus margins on narrow terminals, capped and
/// centered on wide ones.
pub fn page_column(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(MAX_CONTENT_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
