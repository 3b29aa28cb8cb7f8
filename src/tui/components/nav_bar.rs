// Nav bar component
//
// Renders the brand name on the left and, on wide terminals, the site
// links inline on the right. Narrow terminals collapse the links into
// a menu hint instead.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the nav bar across the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let theme = &app.theme;

    let left = format!(" {}", app.content.brand);

    let mut right_spans: Vec<Span> = Vec::new();
    if app.menu.is_some() {
        // Open-state marker, shown regardless of breakpoint.
        right_spans.push(Span::styled(
            "✕ menu (esc) ",
            Style::default().fg(theme.highlight),
        ));
    } else if bp.inline_nav() {
        for (i, link) in app.content.links.iter().enumerate() {
            if i > 0 {
                right_spans.push(Span::styled(" · ", Style::default().fg(theme.muted)));
            }
            right_spans.push(Span::styled(
                link.label.clone(),
                Style::default().fg(theme.link),
            ));
        }
        right_spans.push(Span::raw(" "));
    } else {
        right_spans.push(Span::styled(
            "≡ menu (m) ",
            Style::default().fg(theme.muted),
        ));
    }

    let right_width: usize = right_spans.iter().map(|s| s.content.width()).sum();
    let filler = (area.width as usize).saturating_sub(left.width() + right_width);

    let mut spans = vec![
        Span::styled(
            left,
            Style::default().fg(theme.brand).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(filler)),
    ];
    spans.extend(right_spans);

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(bar, area);
}
