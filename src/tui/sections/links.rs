//! Links section and footer
//!
//! Terminal pages cannot click, so the links print their full URLs in
//! an aligned list. Ends with the version footer.

use super::{heading, SectionCtx};
use crate::config::{NavLink, SiteContent, VERSION};
use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

pub struct Links {
    links: Vec<NavLink>,
}

impl Links {
    pub fn new(content: &SiteContent) -> Self {
        Self {
            links: content.links.clone(),
        }
    }

    pub fn display_lines(&self, ctx: &SectionCtx) -> Vec<Line<'static>> {
        let mut lines = vec![Line::default()];
        lines.extend(heading("links", ctx.theme));
        lines.push(Line::default());

        // Pad labels so the URLs line up in a column.
        let label_width = self
            .links
            .iter()
            .map(|link| link.label.width())
            .max()
            .unwrap_or(0);
        for link in &self.links {
            let pad = label_width - link.label.width() + 2;
            lines.push(Line::from(vec![
                Span::styled(link.label.clone(), Style::default().fg(ctx.theme.link)),
                Span::raw(" ".repeat(pad)),
                Span::styled(link.url.clone(), Style::default().fg(ctx.theme.muted)),
            ]));
        }

        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                format!("marquee v{VERSION}"),
                Style::default().fg(ctx.theme.muted),
            ))
            .centered(),
        );
        lines.push(Line::default());

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crate::tui::layout::Breakpoint;
    use std::time::Instant;

    fn ctx(theme: &Theme) -> SectionCtx {
        SectionCtx {
            theme,
            bp: Breakpoint::Normal,
            width: 80,
            now: Instant::now(),
            focused_snippet: None,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_every_link_prints_label_and_url() {
        let links = Links::new(&SiteContent::default());
        let theme = Theme::default();
        let texts: Vec<String> = links
            .display_lines(&ctx(&theme))
            .iter()
            .map(line_text)
            .collect();

        for link in &SiteContent::default().links {
            assert!(texts
                .iter()
                .any(|t| t.contains(&link.label) && t.contains(&link.url)));
        }
    }

    #[test]
    fn test_urls_line_up_in_one_column() {
        let links = Links::new(&SiteContent::default());
        let theme = Theme::default();
        let columns: Vec<usize> = links
            .display_lines(&ctx(&theme))
            .iter()
            .map(line_text)
            .filter_map(|t| t.find("https://"))
            .collect();
        assert_eq!(columns.len(), SiteContent::default().links.len());
        assert!(columns.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_footer_carries_the_version() {
        let links = Links::new(&SiteContent::default());
        let theme = Theme::default();
        let page: String = links
            .display_lines(&ctx(&theme))
            .iter()
            .map(|l| line_text(l))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(page.contains(&format!("marquee v{VERSION}")));
    }
}
