// Marquee - A product landing page for the terminal
//
// Renders a marketing page as a TUI instead of a web page: a hero brand
// line that types and deletes command suffixes, feature cards that fade
// in as they scroll into view, install snippets that copy to the
// clipboard, and a navigation overlay for jumping between sections.
//
// Architecture:
// - Motion: pure timing state machines (typing, blink, reveal) driven by
//   deadlines rather than a fixed frame rate
// - TUI (ratatui): composes the whole page as lines and scrolls a single
//   paragraph over them
// - Config: env > ~/.config/marquee/config.toml > defaults
// - Favicon subcommand (image): renders PNG icons from a source image

mod cli;
mod config;
mod favicon;
mod logging;
mod motion;
mod theme;
mod tui;

use anyhow::Result;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, favicons, ...)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Logs are captured to an in-memory buffer while the page is up;
    // printing through the alternate screen would garble the display
    let log_buffer = LogBuffer::new();

    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("marquee={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Set up file logging if enabled (non-blocking writer with rotation)
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let file_appender = match config.logging.file_rotation {
                        LogRotation::Hourly => tracing_appender::rolling::hourly(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Daily => tracing_appender::rolling::daily(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Never => tracing_appender::rolling::never(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                    };

                    // Wrap in non-blocking writer (writes happen in background thread)
                    // File layer uses JSON format for structured log parsing
                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                    Some(guard)
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    // Fall back to buffer-only logging
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    // Timing sanity warnings go through tracing, so they wait until the
    // subscriber is up; they land in the buffer and replay on exit.
    config.motion.validate();

    tracing::debug!(
        theme = %config.theme,
        reduce_motion = config.reduce_motion,
        "starting page"
    );

    let result = tui::run_tui(config, log_buffer.clone()).await;

    // The terminal is restored at this point. Warnings and errors raised
    // while the alternate screen was up were only visible in the buffer,
    // so replay them where the user can actually read them.
    let leftover = log_buffer.warnings_and_errors();
    if !leftover.is_empty() {
        eprintln!();
        eprintln!("{} issue(s) logged during the session:", leftover.len());
        for entry in &leftover {
            eprintln!("  {entry}");
        }
    }

    result
}
