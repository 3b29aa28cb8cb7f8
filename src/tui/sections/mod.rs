//! Page sections
//!
//! The landing page is a vertical stack of sections, each composing its
//! own slice of styled lines every frame. Sections that animate expose
//! the same `advance`/`next_deadline` pair as the motion primitives so
//! the app can fold everything into one redraw timer.

pub mod features;
pub mod hero;
pub mod install;
pub mod links;

pub use features::Features;
pub use hero::Hero;
pub use install::Install;
pub use links::Links;

use crate::theme::Theme;
use crate::tui::layout::Breakpoint;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Stable identity of each section, used by the menu to jump around
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    Features,
    Install,
    Links,
}

impl SectionId {
    /// Page order, also the menu order
    pub const ALL: [SectionId; 4] = [
        SectionId::Hero,
        SectionId::Features,
        SectionId::Install,
        SectionId::Links,
    ];

    /// Label shown in the menu overlay
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Hero => "top",
            SectionId::Features => "features",
            SectionId::Install => "install",
            SectionId::Links => "links",
        }
    }
}

/// Per-frame inputs shared by every section renderer
pub struct SectionCtx<'a> {
    pub theme: &'a Theme,
    pub bp: Breakpoint,
    /// Content column width in cells
    pub width: u16,
    pub now: Instant,
    /// Which snippet the copy key targets, if any
    pub focused_snippet: Option<usize>,
}

/// One section of the page
pub enum Section {
    Hero(Hero),
    Features(Features),
    Install(Install),
    Links(Links),
}

impl Section {
    pub fn id(&self) -> SectionId {
        match self {
            Section::Hero(_) => SectionId::Hero,
            Section::Features(_) => SectionId::Features,
            Section::Install(_) => SectionId::Install,
            Section::Links(_) => SectionId::Links,
        }
    }

    /// Run any due transitions in the section's animations
    pub fn advance(&mut self, now: Instant) {
        match self {
            Section::Hero(hero) => hero.advance(now),
            Section::Install(install) => install.advance(now),
            Section::Features(_) | Section::Links(_) => {}
        }
    }

    /// Earliest pending animation deadline in this section
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        match self {
            Section::Hero(hero) => hero.next_deadline(now),
            Section::Install(install) => install.next_deadline(),
            Section::Features(_) | Section::Links(_) => None,
        }
    }

    /// Called when any part of the section is inside the viewport
    pub fn notify_visible(&mut self, now: Instant) {
        if let Section::Hero(hero) = self {
            hero.notify_visible(now);
        }
    }

    pub fn display_lines(&self, ctx: &SectionCtx) -> Vec<Line<'static>> {
        match self {
            Section::Hero(hero) => hero.display_lines(ctx),
            Section::Features(features) => features.display_lines(ctx),
            Section::Install(install) => install.display_lines(ctx),
            Section::Links(links) => links.display_lines(ctx),
        }
    }

    pub fn hero(&self) -> Option<&Hero> {
        match self {
            Section::Hero(hero) => Some(hero),
            _ => None,
        }
    }

    pub fn hero_mut(&mut self) -> Option<&mut Hero> {
        match self {
            Section::Hero(hero) => Some(hero),
            _ => None,
        }
    }

    pub fn install_mut(&mut self) -> Option<&mut Install> {
        match self {
            Section::Install(install) => Some(install),
            _ => None,
        }
    }

    pub fn install(&self) -> Option<&Install> {
        match self {
            Section::Install(install) => Some(install),
            _ => None,
        }
    }
}

/// Section heading: the title plus a muted rule underneath
pub(super) fn heading(text: &str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "─".repeat(text.width()),
            Style::default().fg(theme.border),
        )),
    ]
}

/// Greedy word-wrap on display width
///
/// A single word wider than `width` gets a line of its own rather than
/// being split mid-word.
pub(super) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
