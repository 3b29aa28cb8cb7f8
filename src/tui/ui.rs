// UI rendering logic
//
// Composes the whole page as one column of styled lines, renders the
// visible slice, and records where everything landed so input
// hit-testing and the menu can work in page coordinates.

use super::app::{App, SectionRow};
use super::components::{brand, nav_bar, status_bar};
use super::layout::{self, Breakpoint};
use super::sections::{Hero, Section, SectionCtx};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Paragraph},
    Frame,
};
use std::time::Instant;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App, now: Instant) {
    let area = f.area();

    // Fill the whole terminal with the theme background first.
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    // Split the terminal into three vertical sections:
    // - Nav bar (1 line plus its hairline)
    // - Page column (fills remaining space)
    // - Status bar (hairline plus 1 line)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    let column = layout::page_column(chunks[1]);
    let bp = Breakpoint::from_width(area.width);

    // Compose every section at the current instant, tracking where each
    // one starts in page coordinates.
    let mut page: Vec<Line> = Vec::new();
    let mut rows: Vec<SectionRow> = Vec::new();
    {
        let ctx = SectionCtx {
            theme: &app.theme,
            bp,
            width: column.width,
            now,
            focused_snippet: app.focused_snippet,
        };
        for section in &app.sections {
            let lines = section.display_lines(&ctx);
            rows.push(SectionRow {
                id: section.id(),
                first: page.len(),
                count: lines.len(),
            });
            page.extend(lines);
        }
    }

    app.scroll
        .update_dimensions(page.len(), column.height as usize);
    let offset = app.scroll.offset();

    let paragraph = Paragraph::new(Text::from(page))
        .style(
            Style::default()
                .fg(app.theme.foreground)
                .bg(app.theme.background),
        )
        .scroll((offset as u16, 0));
    f.render_widget(paragraph, column);

    // The brand line's screen cells, when it is scrolled into view.
    let brand_rect = app
        .sections
        .iter()
        .find_map(Section::hero)
        .and_then(|hero| {
            let hero_first = rows.first().map(|row| row.first)?;
            let line = hero_first + Hero::BRAND_ROW as usize;
            let visible = line >= offset && line < offset + column.height as usize;
            visible.then(|| {
                let row_area =
                    Rect::new(column.x, column.y + (line - offset) as u16, column.width, 1);
                brand::brand_rect(hero.brand(), row_area)
            })
        });

    app.record_layout(rows, brand_rect, now);

    nav_bar::render(f, chunks[0], app);
    status_bar::render(f, chunks[2], app);

    if let Some(menu) = &app.menu {
        menu.render(f, area, &app.theme);
    }
    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
}
