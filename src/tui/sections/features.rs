//! Features section
//!
//! Static cards, one per configured feature. Wide terminals lay the
//! cards out side by side in equal columns; narrower ones stack them.

use super::{heading, wrap_text, SectionCtx};
use crate::config::{FeatureCard, SiteContent};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Spacing between card columns in the side-by-side layout
const COLUMN_GAP: usize = 2;

pub struct Features {
    cards: Vec<FeatureCard>,
}

impl Features {
    pub fn new(content: &SiteContent) -> Self {
        Self {
            cards: content.features.clone(),
        }
    }

    pub fn display_lines(&self, ctx: &SectionCtx) -> Vec<Line<'static>> {
        let mut lines = vec![Line::default()];
        lines.extend(heading("features", ctx.theme));
        lines.push(Line::default());

        if self.cards.is_empty() {
            return lines;
        }

        if ctx.bp.cards_side_by_side() && self.cards.len() > 1 {
            lines.extend(self.columns(ctx));
        } else {
            lines.extend(self.stacked(ctx));
        }

        lines.push(Line::default());
        lines
    }

    /// One card under the other, blurb indented beneath its title
    fn stacked(&self, ctx: &SectionCtx) -> Vec<Line<'static>> {
        let title_style = Style::default()
            .fg(ctx.theme.foreground)
            .add_modifier(Modifier::BOLD);
        let blurb_style = Style::default().fg(ctx.theme.muted);
        let blurb_width = (ctx.width as usize).saturating_sub(2);

        let mut lines = Vec::new();
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                format!("▪ {}", card.title),
                title_style,
            )));
            for row in wrap_text(&card.blurb, blurb_width) {
                lines.push(Line::from(Span::styled(format!("  {row}"), blurb_style)));
            }
        }
        lines
    }

    /// All cards side by side, each wrapped inside its own column
    fn columns(&self, ctx: &SectionCtx) -> Vec<Line<'static>> {
        let count = self.cards.len();
        let total_gap = COLUMN_GAP * (count - 1);
        let col_width = ((ctx.width as usize).saturating_sub(total_gap) / count).max(8);

        let title_style = Style::default()
            .fg(ctx.theme.foreground)
            .add_modifier(Modifier::BOLD);
        let blurb_style = Style::default().fg(ctx.theme.muted);

        // Per card: title row then wrapped blurb rows, as styled cells.
        let cells: Vec<Vec<(String, Style)>> = self
            .cards
            .iter()
            .map(|card| {
                let mut rows = vec![(format!("▪ {}", card.title), title_style)];
                for row in wrap_text(&card.blurb, col_width) {
                    rows.push((row, blurb_style));
                }
                rows
            })
            .collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(0);

        (0..height)
            .map(|row| {
                let mut spans = Vec::with_capacity(count * 2);
                for (col, card_rows) in cells.iter().enumerate() {
                    if col > 0 {
                        spans.push(Span::raw(" ".repeat(COLUMN_GAP)));
                    }
                    let (text, style) = card_rows
                        .get(row)
                        .cloned()
                        .unwrap_or_else(|| (String::new(), blurb_style));
                    let pad = col_width.saturating_sub(text.width());
                    spans.push(Span::styled(format!("{text}{}", " ".repeat(pad)), style));
                }
                Line::from(spans)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crate::tui::layout::Breakpoint;
    use std::time::Instant;

    fn ctx(theme: &Theme, bp: Breakpoint, width: u16) -> SectionCtx {
        SectionCtx {
            theme,
            bp,
            width,
            now: Instant::now(),
            focused_snippet: None,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_wide_layout_puts_all_titles_on_one_row() {
        let features = Features::new(&SiteContent::default());
        let theme = Theme::default();
        let lines = features.display_lines(&ctx(&theme, Breakpoint::Wide, 96));

        let titles: Vec<String> = SiteContent::default()
            .features
            .iter()
            .map(|c| c.title.clone())
            .collect();
        let row = lines
            .iter()
            .map(line_text)
            .find(|text| text.contains(&titles[0]))
            .expect("title row present");
        for title in &titles {
            assert!(row.contains(title), "missing {title}");
        }
    }

    #[test]
    fn test_stacked_layout_puts_titles_on_separate_rows() {
        let features = Features::new(&SiteContent::default());
        let theme = Theme::default();
        let lines = features.display_lines(&ctx(&theme, Breakpoint::Normal, 70));

        let texts: Vec<String> = lines.iter().map(line_text).collect();
        for card in &SiteContent::default().features {
            let holding: Vec<&String> = texts
                .iter()
                .filter(|text| text.contains(&card.title))
                .collect();
            assert_eq!(holding.len(), 1);
            // No other title shares the row.
            for other in &SiteContent::default().features {
                if other.title != card.title {
                    assert!(!holding[0].contains(&other.title));
                }
            }
        }
    }

    #[test]
    fn test_rows_never_exceed_the_column_width() {
        let features = Features::new(&SiteContent::default());
        let theme = Theme::default();
        for (bp, width) in [(Breakpoint::Wide, 96u16), (Breakpoint::Normal, 60)] {
            for line in features.display_lines(&ctx(&theme, bp, width)) {
                assert!(line.width() <= width as usize, "{bp:?} row too wide");
            }
        }
    }

    #[test]
    fn test_no_cards_renders_just_the_heading() {
        let mut content = SiteContent::default();
        content.features.clear();
        let features = Features::new(&content);
        let theme = Theme::default();
        let lines = features.display_lines(&ctx(&theme, Breakpoint::Normal, 60));
        assert_eq!(lines.len(), 4); // blank, heading, rule, blank
    }
}
