//! Hero section
//!
//! The animated centerpiece: brand line with the typing suffix and
//! blinking cursor, a headline whose words enter staggered, and the
//! tagline once the headline has settled. The section always renders
//! the same rows at a given width so scroll offsets never jump
//! mid-animation.

use super::{wrap_text, SectionCtx};
use crate::config::{MotionConfig, SiteContent};
use crate::motion::{earliest, CursorBlink, Reveal, TypingAnimator, WordState};
use crate::tui::components::brand;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

pub struct Hero {
    brand: TypingAnimator,
    cursor: CursorBlink,
    headline: Reveal,
    tagline: String,
}

impl Hero {
    /// Row of the brand line within this section's display lines
    pub const BRAND_ROW: u16 = 1;

    pub fn new(
        content: &SiteContent,
        motion: &MotionConfig,
        reduce_motion: bool,
        now: Instant,
    ) -> Self {
        Self {
            brand: TypingAnimator::new(
                content.brand.clone(),
                content.suffixes(),
                motion.typing_timing(),
                reduce_motion,
                now,
            ),
            cursor: CursorBlink::new(motion.cursor_blink(), reduce_motion, now),
            headline: Reveal::new(&content.headline, motion.reveal_timing(), reduce_motion),
            tagline: content.tagline.clone(),
        }
    }

    pub fn advance(&mut self, now: Instant) {
        self.brand.step(now);
        self.cursor.step(now);
    }

    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        earliest(
            earliest(self.brand.next_deadline(), self.cursor.next_deadline()),
            self.headline.next_deadline(now),
        )
    }

    /// Start the headline entrance. One-shot, safe to call every frame.
    pub fn notify_visible(&mut self, now: Instant) {
        self.headline.trigger(now);
    }

    pub fn brand(&self) -> &TypingAnimator {
        &self.brand
    }

    /// Hover pause for the typing animation
    pub fn set_brand_paused(&mut self, paused: bool) {
        if paused {
            self.brand.pause();
        } else {
            self.brand.resume();
        }
    }

    pub fn display_lines(&self, ctx: &SectionCtx) -> Vec<Line<'static>> {
        let mut lines = vec![Line::default()];

        // BRAND_ROW
        lines.push(brand::brand_line(&self.brand, &self.cursor, ctx.theme).centered());
        lines.push(Line::default());

        lines.extend(self.headline_lines(ctx));
        lines.push(Line::default());

        // Tagline rows are composed blank until the headline settles so
        // the section height never changes underneath the scroll state.
        let settled = self.headline.is_settled(ctx.now);
        for row in wrap_text(&self.tagline, ctx.width as usize) {
            if settled {
                lines.push(
                    Line::from(Span::styled(row, Style::default().fg(ctx.theme.muted)))
                        .centered(),
                );
            } else {
                lines.push(Line::default());
            }
        }
        lines.push(Line::default());

        lines.push(Line::from(Span::styled("▾", Style::default().fg(ctx.theme.muted))).centered());
        lines.push(Line::default());

        lines
    }

    /// Headline words wrapped to the column, each styled by its reveal
    /// stage. Hidden words render as spaces so rows keep their width.
    fn headline_lines(&self, ctx: &SectionCtx) -> Vec<Line<'static>> {
        let width = ctx.width as usize;
        let mut rows: Vec<Vec<usize>> = Vec::new();
        let mut row: Vec<usize> = Vec::new();
        let mut used = 0;

        for (i, word) in self.headline.words().iter().enumerate() {
            let w = word.width();
            if !row.is_empty() && used + 1 + w > width {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            used += if row.is_empty() { w } else { 1 + w };
            row.push(i);
        }
        if !row.is_empty() {
            rows.push(row);
        }

        rows.into_iter()
            .map(|indices| {
                let mut spans = Vec::with_capacity(indices.len() * 2);
                for (pos, i) in indices.into_iter().enumerate() {
                    if pos > 0 {
                        spans.push(Span::raw(" "));
                    }
                    let word = &self.headline.words()[i];
                    spans.push(match self.headline.state_of(i, ctx.now) {
                        WordState::Hidden => Span::raw(" ".repeat(word.width())),
                        WordState::Entering => Span::styled(
                            word.clone(),
                            Style::default()
                                .fg(ctx.theme.foreground)
                                .add_modifier(Modifier::DIM),
                        ),
                        WordState::Settled => Span::styled(
                            word.clone(),
                            Style::default()
                                .fg(ctx.theme.heading)
                                .add_modifier(Modifier::BOLD),
                        ),
                    });
                }
                Line::from(spans).centered()
            })
            .collect()
    }
}
