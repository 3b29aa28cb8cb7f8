// TUI application state
//
// This module holds everything the page needs between frames: the
// sections with their animations, scroll position, overlay and toast
// state, and the layout facts recorded at draw time that input
// hit-testing reads back.

use super::clipboard::copy_to_clipboard;
use super::components::Toast;
use super::menu::{MenuAction, MenuOverlay};
use super::scroll::PageScroll;
use super::sections::{Features, Hero, Install, Links, Section, SectionId};
use crate::config::{Config, SiteContent};
use crate::logging::LogBuffer;
use crate::motion::earliest;
use crate::theme::Theme;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Debounce duration for action keys
/// Prevents rapid-fire triggers on terminals that don't send release events
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// Mouse wheel scroll step in lines; keys scroll a single line
pub const SCROLL_STEP: usize = 3;

/// Where a section landed in the composed page on the last frame
#[derive(Debug, Clone, Copy)]
pub struct SectionRow {
    pub id: SectionId,
    /// First line of the section within the page
    pub first: usize,
    /// Number of lines the section occupied
    pub count: usize,
}

/// Main application state for the TUI
pub struct App {
    /// Resolved color theme
    pub theme: Theme,

    /// Page copy as configured
    pub content: SiteContent,

    /// Page sections in display order
    pub sections: Vec<Section>,

    /// Line-wise viewport over the composed page
    pub scroll: PageScroll,

    /// Open menu overlay, if any
    pub menu: Option<MenuOverlay>,

    /// Active toast, if any
    pub toast: Option<Toast>,

    /// Snippet targeted by the copy key
    pub focused_snippet: Option<usize>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Log buffer for the session
    pub log_buffer: LogBuffer,

    /// Section positions recorded by the last draw
    pub section_rows: Vec<SectionRow>,

    /// Screen cells of the brand line on the last frame, for hover
    pub brand_rect: Option<Rect>,

    /// Whether the pointer currently rests on the brand line
    hovering_brand: bool,

    /// Last time an action key was triggered (for debouncing)
    last_action_time: Option<Instant>,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer, now: Instant) -> Self {
        let content = config.content.clone();
        let sections = vec![
            Section::Hero(Hero::new(
                &content,
                &config.motion,
                config.reduce_motion,
                now,
            )),
            Section::Features(Features::new(&content)),
            Section::Install(Install::new(&content, &config.motion)),
            Section::Links(Links::new(&content)),
        ];
        let focused_snippet = (!content.snippets.is_empty()).then_some(0);

        Self {
            theme: Theme::by_name(&config.theme),
            content,
            sections,
            scroll: PageScroll::new(),
            menu: None,
            toast: None,
            focused_snippet,
            should_quit: false,
            log_buffer,
            section_rows: Vec::new(),
            brand_rect: None,
            hovering_brand: false,
            last_action_time: None,
        }
    }

    // ── Animation clock ──────────────────────────────────────────────

    /// Run every due animation transition and drop expired overlays
    pub fn advance(&mut self, now: Instant) {
        for section in &mut self.sections {
            section.advance(now);
        }
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.is_expired(now))
        {
            self.toast = None;
        }
    }

    /// Earliest instant anything on screen changes by itself
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        let mut next = None;
        for section in &self.sections {
            next = earliest(next, section.next_deadline(now));
        }
        earliest(next, self.toast.as_ref().map(Toast::expires_at))
    }

    /// Store the layout the draw pass produced, then fire visibility
    /// triggers for every section overlapping the viewport.
    pub fn record_layout(
        &mut self,
        rows: Vec<SectionRow>,
        brand_rect: Option<Rect>,
        now: Instant,
    ) {
        self.section_rows = rows;
        self.brand_rect = brand_rect;

        let top = self.scroll.offset();
        let bottom = top + self.scroll.viewport();
        for row in self.section_rows.clone() {
            if row.first < bottom && row.first + row.count > top {
                if let Some(section) = self.sections.iter_mut().find(|s| s.id() == row.id) {
                    section.notify_visible(now);
                }
            }
        }
    }

    // ── Navigation ───────────────────────────────────────────────────

    pub fn open_menu(&mut self) {
        self.menu = Some(MenuOverlay::new());
    }

    /// Route a key to the open menu and apply the result
    pub fn apply_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::None => {}
            MenuAction::Close => self.menu = None,
            MenuAction::Navigate(id) => {
                self.menu = None;
                self.jump_to_section(id);
            }
        }
    }

    /// Put a section's first line at the top of the viewport
    pub fn jump_to_section(&mut self, id: SectionId) {
        if let Some(row) = self.section_rows.iter().find(|row| row.id == id) {
            self.scroll.jump_to(row.first);
        }
    }

    // ── Snippets ─────────────────────────────────────────────────────

    fn snippet_count(&self) -> usize {
        self.sections
            .iter()
            .find_map(Section::install)
            .map(Install::snippet_count)
            .unwrap_or(0)
    }

    pub fn focus_next_snippet(&mut self) {
        let count = self.snippet_count();
        if count == 0 {
            return;
        }
        self.focused_snippet = Some(match self.focused_snippet {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    pub fn focus_prev_snippet(&mut self) {
        let count = self.snippet_count();
        if count == 0 {
            return;
        }
        self.focused_snippet = Some(match self.focused_snippet {
            Some(i) => (i + count - 1) % count,
            None => count - 1,
        });
    }

    /// Copy the focused snippet to the system clipboard
    ///
    /// Success shows up in the block's own header; only failure raises
    /// a toast, and the page keeps running either way.
    pub fn copy_focused_snippet(&mut self, now: Instant) {
        let Some(index) = self.focused_snippet else {
            return;
        };
        let Some(install) = self.sections.iter_mut().find_map(Section::install_mut) else {
            return;
        };
        let Some(block) = install.block_mut(index) else {
            return;
        };
        match copy_to_clipboard(block.code()) {
            Ok(()) => block.mark_copied(now),
            Err(err) => {
                tracing::warn!("clipboard copy failed: {err:#}");
                self.toast = Some(Toast::new(format!("copy failed: {err}"), now));
            }
        }
    }

    // ── Hover ────────────────────────────────────────────────────────

    /// Track whether the pointer sits on the brand line, pausing and
    /// resuming the typing animation on changes.
    pub fn set_brand_hover(&mut self, hovering: bool) {
        if self.hovering_brand == hovering {
            return;
        }
        self.hovering_brand = hovering;
        if let Some(hero) = self.sections.iter_mut().find_map(Section::hero_mut) {
            hero.set_brand_paused(hovering);
        }
    }

    pub fn is_hovering_brand(&self) -> bool {
        self.hovering_brand
    }

    // ── Theme ────────────────────────────────────────────────────────

    /// Cycle to the next built-in theme
    pub fn next_theme(&mut self) {
        let names = Theme::all_names();
        let current = names
            .iter()
            .position(|name| *name == self.theme.name)
            .unwrap_or(0);
        self.theme = Theme::by_name(names[(current + 1) % names.len()]);
        tracing::debug!(theme = %self.theme.name, "switched theme");
    }

    // ── Input support ────────────────────────────────────────────────

    /// Check if an action should be debounced
    /// Returns true if action should be blocked (too soon since last action)
    pub fn should_debounce_action(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_action_time {
            if now.duration_since(last) < ACTION_DEBOUNCE {
                return true;
            }
        }
        self.last_action_time = Some(now);
        false
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
