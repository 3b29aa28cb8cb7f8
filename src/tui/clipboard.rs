//! Clipboard helper for the snippet copy action
//!
//! Uses `arboard` for cross-platform support (Windows, macOS, Linux). A
//! fresh clipboard handle is created per copy so no resource is held
//! between the rare moments the page actually needs one.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy snippet text to the system clipboard
///
/// Common failure cases: no display server (headless Linux), permission
/// denied. Callers surface the error as a toast instead of crashing the
/// page over it.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("failed to set clipboard text")?;
    tracing::debug!(bytes = text.len(), "copied snippet to clipboard");
    Ok(())
}
