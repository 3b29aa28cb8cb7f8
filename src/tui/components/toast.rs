//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a fixed duration.
//! Renders in the bottom-right corner on top of all other content.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// A toast notification that auto-dismisses
pub struct Toast {
    /// Message to display
    pub message: String,
    /// When the toast disappears
    expires_at: Instant,
}

impl Toast {
    /// Create a new toast expiring two seconds after `now`
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            expires_at: now + TOAST_DURATION,
        }
    }

    /// When the toast should be removed, for the redraw timer
    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Render the toast in the bottom-right corner
    ///
    /// Uses `Clear` widget to ensure toast is visible on top of other content.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // Add 4 for padding (2 chars each side) and border
        let width = (self.message.len() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3; // 1 line of text + 2 for borders

        // Position: bottom-right corner, offset by 2 cells from edge
        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);

        let toast_area = Rect::new(x, y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.highlight))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        // Clear the area first so toast appears on top
        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_duration() {
        let now = Instant::now();
        let toast = Toast::new("copied to clipboard", now);

        assert!(!toast.is_expired(now));
        assert!(!toast.is_expired(now + Duration::from_millis(1999)));
        assert!(toast.is_expired(now + Duration::from_secs(2)));
        assert!(toast.is_expired(now + Duration::from_secs(5)));
    }

    #[test]
    fn test_toast_deadline_matches_expiry() {
        let now = Instant::now();
        let toast = Toast::new("x", now);

        assert_eq!(toast.expires_at(), now + TOAST_DURATION);
        assert!(toast.is_expired(toast.expires_at()));
    }
}
