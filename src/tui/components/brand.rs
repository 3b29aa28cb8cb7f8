//! Animated brand line for the hero
//!
//! Composes the typing animator and cursor blink into a single styled
//! line. The line is padded to a fixed width so centered alignment does
//! not shift sideways while the suffix grows and shrinks.

use crate::motion::{CursorBlink, TypingAnimator};
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Block cursor glyph shown after the typed suffix
const CURSOR_GLYPH: &str = "▌";

/// Fixed display width of the brand line in columns
///
/// Base label plus the widest suffix plus one cursor cell. Every
/// rendered frame pads out to exactly this width.
pub fn brand_width(animator: &TypingAnimator) -> u16 {
    let widest_suffix = animator
        .suffixes()
        .iter()
        .map(|s| s.width())
        .max()
        .unwrap_or(0);
    (animator.base().width() + widest_suffix + 1) as u16
}

/// Screen region the centered brand line occupies inside `area`
///
/// Used for pointer hit-testing: hovering this rect pauses the typing
/// animation.
pub fn brand_rect(animator: &TypingAnimator, area: Rect) -> Rect {
    let width = brand_width(animator).min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    Rect::new(x, area.y, width, 1)
}

/// Build the brand line for the current animation state
pub fn brand_line(animator: &TypingAnimator, cursor: &CursorBlink, theme: &Theme) -> Line<'static> {
    let rendered = animator.rendered();
    // rendered() always starts with the base label, so the typed suffix
    // is whatever follows it.
    let suffix = rendered[animator.base().len()..].to_string();

    let cursor_cell = if cursor.is_visible() { CURSOR_GLYPH } else { " " };

    // Pad the tail so the total width never changes between frames.
    let widest_suffix = animator
        .suffixes()
        .iter()
        .map(|s| s.width())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(widest_suffix.saturating_sub(suffix.width()));

    Line::from(vec![
        Span::styled(
            animator.base().to_string(),
            Style::default().fg(theme.brand).add_modifier(Modifier::BOLD),
        ),
        Span::styled(suffix, Style::default().fg(theme.foreground)),
        Span::styled(cursor_cell.to_string(), Style::default().fg(theme.cursor)),
        Span::raw(padding),
    ])
}
