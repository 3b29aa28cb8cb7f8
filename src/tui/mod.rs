// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, mouse, animation deadlines)
// - Rendering the page
//
// The loop races a short input poll (10 ms) against the earliest
// animation deadline in tokio::select!, so a due transition never
// waits out a full poll interval. The poll wakes the loop even when
// nothing is animating; state only moves when a widget's own deadline
// passes, so those wakeups just redraw.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod menu;
pub mod scroll;
pub mod sections;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, SCROLL_STEP};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::Position;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done. Mouse capture is enabled for wheel scrolling and the
/// hover-pause on the brand line.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, log_buffer, Instant::now());

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Each iteration advances due animations, draws one frame, and then
/// waits on tokio::select! for input (polled at 10 ms) or the earliest
/// animation deadline. The deadline arm holds at most one sleep and
/// never completes when nothing is scheduled (reduced motion); the
/// input poll still wakes the loop on its own cadence.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        let now = Instant::now();
        app.advance(now);

        terminal
            .draw(|f| ui::draw(f, app, now))
            .context("Failed to draw terminal")?;

        if app.should_quit {
            break;
        }

        let deadline = app.next_deadline(Instant::now());
        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Next animation transition
            _ = wait_for_deadline(deadline) => {}
        }
    }

    Ok(())
}

/// Sleep until the given deadline, or forever when nothing is pending
async fn wait_for_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => futures::future::pending::<()>().await,
    }
}

/// Handle keyboard input
/// Layered dispatch: Menu overlay → Global keys → Page keys
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Layer 1: the open menu absorbs everything (scroll lock)
    if handle_menu_input(app, &key_event) {
        return;
    }

    // Layer 2: global action keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 3: page scrolling. These repeat freely, no debounce.
    if key_event.kind != KeyEventKind::Press {
        return;
    }
    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll.scroll_down(1),
        KeyCode::PageUp => app.scroll.page_up(),
        KeyCode::PageDown => app.scroll.page_down(),
        KeyCode::Home | KeyCode::Char('g') => app.scroll.to_top(),
        KeyCode::End | KeyCode::Char('G') => app.scroll.to_bottom(),
        _ => {}
    }
}

/// Handle menu input - returns true if the menu absorbed the input
fn handle_menu_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut menu) = app.menu else {
        return false;
    };
    if key_event.kind != KeyEventKind::Press {
        return true;
    }
    let action = menu.handle_input(*key_event);
    app.apply_menu_action(action);
    true
}

/// Handle global keys - returns true if handled
/// Action keys are debounced for terminals that repeat Press events
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }
    let now = Instant::now();

    match key_event.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if !app.should_debounce_action(now) {
                app.quit();
            }
            true
        }
        // Menu overlay
        KeyCode::Char('m') => {
            if !app.should_debounce_action(now) {
                app.open_menu();
            }
            true
        }
        // Theme cycling
        KeyCode::Char('t') => {
            if !app.should_debounce_action(now) {
                app.next_theme();
            }
            true
        }
        // Copy the focused snippet
        KeyCode::Char('y') | KeyCode::Enter => {
            if !app.should_debounce_action(now) {
                app.copy_focused_snippet(now);
            }
            true
        }
        // Snippet focus cycling
        KeyCode::Tab => {
            app.focus_next_snippet();
            true
        }
        KeyCode::BackTab => {
            app.focus_prev_snippet();
            true
        }
        _ => false,
    }
}

/// Handle mouse input
///
/// Wheel scrolling is locked out while the menu is open; pointer motion
/// drives the hover pause on the brand line.
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::ScrollUp => {
            if app.menu.is_none() {
                app.scroll.scroll_up(SCROLL_STEP);
            }
        }
        MouseEventKind::ScrollDown => {
            if app.menu.is_none() {
                app.scroll.scroll_down(SCROLL_STEP);
            }
        }
        MouseEventKind::Moved => {
            let hovering = app.brand_rect.is_some_and(|rect| {
                rect.contains(Position::new(mouse_event.column, mouse_event.row))
            });
            app.set_brand_hover(hovering);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton};

    fn app() -> App {
        let mut app = App::new(&Config::default(), LogBuffer::new(), Instant::now());
        // Give the page something to scroll against.
        app.scroll.update_dimensions(100, 20);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_scroll_keys_move_the_page() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.scroll.offset(), 2);
        handle_key_event(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.scroll.offset(), 1);

        handle_key_event(&mut app, key(KeyCode::End));
        assert_eq!(app.scroll.offset(), 80);
        handle_key_event(&mut app, key(KeyCode::Home));
        assert_eq!(app.scroll.offset(), 0);

        handle_key_event(&mut app, key(KeyCode::PageDown));
        assert_eq!(app.scroll.offset(), 20);
    }

    #[test]
    fn test_open_menu_locks_page_keys() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('m')));
        assert!(app.menu.is_some());

        // j now moves the menu selection, not the page.
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.scroll.offset(), 0);

        // Wheel scrolling is locked too.
        handle_mouse_event(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert_eq!(app.scroll.offset(), 0);

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(app.menu.is_none());
    }

    #[test]
    fn test_quit_key_sets_the_flag() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_cycles_snippet_focus_without_debounce() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focused_snippet, Some(1));
        handle_key_event(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.focused_snippet, Some(0));
    }

    #[test]
    fn test_wheel_scrolls_in_steps() {
        let mut app = app();
        handle_mouse_event(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert_eq!(app.scroll.offset(), SCROLL_STEP);
    }

    #[test]
    fn test_pointer_motion_toggles_brand_hover() {
        let mut app = app();
        app.brand_rect = Some(ratatui::layout::Rect::new(10, 3, 14, 1));

        handle_mouse_event(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::Moved,
                column: 12,
                row: 3,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert!(app.is_hovering_brand());

        handle_mouse_event(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::Moved,
                column: 12,
                row: 10,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert!(!app.is_hovering_brand());
    }

    #[test]
    fn test_clicks_are_ignored() {
        let mut app = app();
        handle_mouse_event(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 5,
                row: 5,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert_eq!(app.scroll.offset(), 0);
        assert!(!app.should_quit);
    }
}
