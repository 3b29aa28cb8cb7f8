//! Code snippet block with copy affordance
//!
//! The page body is composed as plain lines rather than nested widgets,
//! so the snippet frame is drawn by hand with box-drawing characters.
//! The top border carries the language label on the left and the copy
//! hint on the right; the hint flips to "copied!" for a short window
//! after a copy, then resets on its own deadline.

use crate::config::Snippet;
use crate::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::BorderType,
};
use std::time::{Duration, Instant};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A rendered snippet plus its transient copied state
pub struct SnippetBlock {
    snippet: Snippet,
    /// When the snippet was last copied, cleared after `reset`
    copied_at: Option<Instant>,
    /// How long the "copied!" confirmation stays up
    reset: Duration,
}

impl SnippetBlock {
    pub fn new(snippet: Snippet, reset: Duration) -> Self {
        Self {
            snippet,
            copied_at: None,
            reset,
        }
    }

    /// Raw text handed to the clipboard on copy
    pub fn code(&self) -> &str {
        &self.snippet.code
    }

    pub fn is_copied(&self) -> bool {
        self.copied_at.is_some()
    }

    /// Record a copy at `now`, restarting the confirmation window
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Clear the confirmation once its window has passed
    pub fn advance(&mut self, now: Instant) {
        if let Some(copied_at) = self.copied_at {
            if now >= copied_at + self.reset {
                self.copied_at = None;
            }
        }
    }

    /// Deadline for reverting the hint, if a confirmation is showing
    pub fn next_deadline(&self) -> Option<Instant> {
        self.copied_at.map(|copied_at| copied_at + self.reset)
    }

    /// Total rows the block occupies: code lines plus two border rows
    pub fn height(&self) -> u16 {
        self.snippet.code.lines().count() as u16 + 2
    }

    /// Compose the framed block at the given width
    ///
    /// `focused` switches the border to the highlight color so the copy
    /// key visibly targets this block.
    pub fn display_lines(&self, width: u16, theme: &Theme, focused: bool) -> Vec<Line<'static>> {
        let (top_left, top_right, bottom_left, bottom_right) = corners(theme.border_type);
        // Columns between the two corner cells.
        let inner = width.saturating_sub(2) as usize;

        let border_color = if focused { theme.highlight } else { theme.border };
        let border = Style::default().fg(border_color);

        let label = format!(" {} ", self.snippet.display_label());
        let (hint, hint_style) = if self.is_copied() {
            (
                " copied! ".to_string(),
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (" y copy ".to_string(), Style::default().fg(theme.muted))
        };

        // Drop the hint first, then the label, when the frame is too
        // narrow to hold them.
        let mut label = label;
        let mut hint = hint;
        if 2 + label.width() + hint.width() > inner {
            hint.clear();
        }
        if 2 + label.width() > inner {
            label.clear();
        }
        let fill = inner.saturating_sub(2 + label.width() + hint.width());

        let mut lines = Vec::with_capacity(self.snippet.code.lines().count() + 2);

        lines.push(Line::from(vec![
            Span::styled(format!("{top_left}─"), border),
            Span::styled(label, Style::default().fg(theme.foreground)),
            Span::styled("─".repeat(fill), border),
            Span::styled(hint, hint_style),
            Span::styled(format!("─{top_right}"), border),
        ]));

        let code_style = Style::default().fg(theme.code_fg).bg(theme.code_bg);
        // One space of padding inside each border cell.
        let text_width = inner.saturating_sub(2);
        for code_line in self.snippet.code.lines() {
            let (clipped, used) = clip(code_line, text_width);
            lines.push(Line::from(vec![
                Span::styled("│".to_string(), border),
                Span::styled(
                    format!(" {clipped}{} ", " ".repeat(text_width - used)),
                    code_style,
                ),
                Span::styled("│".to_string(), border),
            ]));
        }

        lines.push(Line::from(Span::styled(
            format!("{bottom_left}{}{bottom_right}", "─".repeat(inner)),
            border,
        )));

        lines
    }
}

fn corners(border_type: BorderType) -> (&'static str, &'static str, &'static str, &'static str) {
    match border_type {
        BorderType::Rounded => ("╭", "╮", "╰", "╯"),
        _ => ("┌", "┐", "└", "┘"),
    }
}

/// Cut `text` to at most `max` display columns on a character boundary
fn clip(text: &str, max: usize) -> (String, usize) {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        out.push(ch);
    }
    (out, used)
}
