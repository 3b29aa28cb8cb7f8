//! Menu overlay
//!
//! Centered section jumper opened with `m`. While open it absorbs all
//! input so the page underneath cannot scroll; the caller applies the
//! returned action.

use crate::theme::Theme;
use crate::tui::sections::SectionId;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// What the app should do after the menu saw a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Key consumed, menu stays open
    None,
    /// Close without navigating
    Close,
    /// Close and jump the page to a section
    Navigate(SectionId),
}

pub struct MenuOverlay {
    entries: Vec<SectionId>,
    selected: usize,
}

impl MenuOverlay {
    pub fn new() -> Self {
        Self {
            entries: SectionId::ALL.to_vec(),
            selected: 0,
        }
    }

    pub fn selected(&self) -> SectionId {
        self.entries[self.selected]
    }

    /// Handle a key while the menu is open. Every key is consumed.
    pub fn handle_input(&mut self, key: KeyEvent) -> MenuAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = if self.selected == 0 {
                    self.entries.len() - 1
                } else {
                    self.selected - 1
                };
                MenuAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % self.entries.len();
                MenuAction::None
            }
            KeyCode::Enter => MenuAction::Navigate(self.entries[self.selected]),
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => MenuAction::Close,
            _ => MenuAction::None,
        }
    }

    /// Render the overlay centered in `area`
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let inner_width = self
            .entries
            .iter()
            .map(|id| id.label().width())
            .max()
            .unwrap_or(0) as u16
            + 6;
        let width = (inner_width + 2).min(area.width);
        let height = (self.entries.len() as u16 + 2).min(area.height);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let menu_area = Rect::new(x, y, width, height);

        let lines: Vec<Line> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, id)| {
                if i == self.selected {
                    Line::from(Span::styled(
                        format!(" ▸ {} ", id.label()),
                        Style::default()
                            .fg(theme.selection_fg)
                            .bg(theme.selection)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("   {} ", id.label()),
                        Style::default().fg(theme.foreground),
                    ))
                }
            })
            .collect();

        let block = Block::default()
            .title(" menu ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.highlight))
            .style(Style::default().bg(theme.background));

        f.render_widget(Clear, menu_area);
        f.render_widget(Paragraph::new(lines).block(block), menu_area);
    }
}

impl Default for MenuOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_selection_moves_and_wraps() {
        let mut menu = MenuOverlay::new();
        assert_eq!(menu.selected(), SectionId::Hero);

        menu.handle_input(key(KeyCode::Char('j')));
        assert_eq!(menu.selected(), SectionId::Features);
        menu.handle_input(key(KeyCode::Down));
        assert_eq!(menu.selected(), SectionId::Install);

        // Wrap off the bottom, then back off the top.
        menu.handle_input(key(KeyCode::Char('j')));
        menu.handle_input(key(KeyCode::Char('j')));
        assert_eq!(menu.selected(), SectionId::Hero);
        menu.handle_input(key(KeyCode::Char('k')));
        assert_eq!(menu.selected(), SectionId::Links);
        menu.handle_input(key(KeyCode::Up));
        assert_eq!(menu.selected(), SectionId::Install);
    }

    #[test]
    fn test_enter_navigates_to_the_selection() {
        let mut menu = MenuOverlay::new();
        menu.handle_input(key(KeyCode::Char('j')));
        assert_eq!(
            menu.handle_input(key(KeyCode::Enter)),
            MenuAction::Navigate(SectionId::Features)
        );
    }

    #[test]
    fn test_escape_and_toggle_close_without_navigating() {
        let mut menu = MenuOverlay::new();
        assert_eq!(menu.handle_input(key(KeyCode::Esc)), MenuAction::Close);
        assert_eq!(menu.handle_input(key(KeyCode::Char('m'))), MenuAction::Close);
        assert_eq!(menu.handle_input(key(KeyCode::Char('q'))), MenuAction::Close);
    }

    #[test]
    fn test_unknown_keys_are_absorbed() {
        let mut menu = MenuOverlay::new();
        for code in [
            KeyCode::Char('y'),
            KeyCode::Char('t'),
            KeyCode::PageDown,
            KeyCode::Home,
            KeyCode::Tab,
        ] {
            assert_eq!(menu.handle_input(key(code)), MenuAction::None);
            assert_eq!(menu.selected(), SectionId::Hero);
        }
    }
}
