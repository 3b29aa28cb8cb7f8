// Status bar component
//
// Renders key hints at the bottom plus a scroll percentage on the
// right. Hints adapt to terminal width.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the status bar with key hints and scroll position
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let theme = &app.theme;

    let hints = if app.menu.is_some() {
        " ↑/↓ select │ enter jump │ esc close".to_string()
    } else if bp.at_least(Breakpoint::Normal) {
        " j/k scroll │ tab snippet │ y copy │ t theme │ m menu │ q quit".to_string()
    } else {
        // Compact format for narrow terminals
        " j/k │ y copy │ m │ q".to_string()
    };

    let position = if app.scroll.fits() {
        String::new()
    } else {
        format!("{:>3}% ", app.scroll.percent())
    };

    let filler = (area.width as usize).saturating_sub(hints.width() + position.width());

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(hints, Style::default().fg(theme.muted)),
        Span::raw(" ".repeat(filler)),
        Span::styled(position, Style::default().fg(theme.muted)),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(bar, area);
}
