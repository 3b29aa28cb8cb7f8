//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Escape a value for a TOML basic (single-line) string
fn toml_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Config {
    /// Serialize feature cards to [[content.features]] tables
    pub(super) fn features_to_toml(&self) -> String {
        let mut output = String::new();
        for card in &self.content.features {
            output.push_str("\n[[content.features]]\n");
            output.push_str(&format!("title = \"{}\"\n", toml_escape(&card.title)));
            output.push_str(&format!("blurb = \"{}\"\n", toml_escape(&card.blurb)));
        }
        output
    }

    /// Serialize snippets to [[content.snippets]] tables
    pub(super) fn snippets_to_toml(&self) -> String {
        let mut output = String::new();
        for snippet in &self.content.snippets {
            output.push_str("\n[[content.snippets]]\n");
            if let Some(label) = &snippet.label {
                output.push_str(&format!("label = \"{}\"\n", toml_escape(label)));
            }
            output.push_str(&format!("language = \"{}\"\n", toml_escape(&snippet.language)));
            // Multiline code keeps its exact value: the newline after the
            // opening quotes is trimmed by TOML, and the closing quotes
            // sit flush against the last line. One or two quotes in a row
            // are legal as-is, but a """ run would close the string
            // early, so the third quote of each run goes out escaped
            // (the ""\" form).
            if snippet.code.contains('\n') {
                output.push_str(&format!(
                    "code = \"\"\"\n{}\"\"\"\n",
                    snippet
                        .code
                        .replace('\\', "\\\\")
                        .replace("\"\"\"", "\"\"\\\"")
                ));
            } else {
                output.push_str(&format!("code = \"{}\"\n", toml_escape(&snippet.code)));
            }
        }
        output
    }

    /// Serialize links to [[content.links]] tables
    pub(super) fn links_to_toml(&self) -> String {
        let mut output = String::new();
        for link in &self.content.links {
            output.push_str("\n[[content.links]]\n");
            output.push_str(&format!("label = \"{}\"\n", toml_escape(&link.label)));
            output.push_str(&format!("url = \"{}\"\n", toml_escape(&link.url)));
        }
        output
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# marquee configuration

# Theme: midnight, daylight, terminal (MARQUEE_THEME env var overrides)
theme = "{theme}"

# Disable all animation (MARQUEE_REDUCE_MOTION=1 overrides)
reduce_motion = {reduce_motion}

# ─────────────────────────────────────────────────────────────────────────────
# PAGE CONTENT
# ─────────────────────────────────────────────────────────────────────────────
# Everything the page says. The brand line renders as
# brand + separator + command, typed and deleted one character at a time.

[content]
brand = "{brand}"
separator = "{separator}"
commands = {commands:?}
headline = "{headline}"
tagline = "{tagline}"
{features}{snippets}{links}
# ─────────────────────────────────────────────────────────────────────────────
# ANIMATION TIMING
# ─────────────────────────────────────────────────────────────────────────────
# All values are milliseconds.

[motion]
startup_hold_ms = {startup_hold}
typing_ms = {typing}
deleting_ms = {deleting}
hold_ms = {hold}
word_pause_ms = {word_pause}
cycle_pause_ms = {cycle_pause}  # longer gap when the command cycle wraps
pause_poll_ms = {pause_poll}  # re-check cadence while hover-paused
cursor_blink_ms = {cursor_blink}
reveal_stagger_ms = {reveal_stagger}
reveal_fade_ms = {reveal_fade}
copied_reset_ms = {copied_reset}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the in-memory buffer)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            reduce_motion = self.reduce_motion,
            brand = toml_escape(&self.content.brand),
            separator = toml_escape(&self.content.separator),
            commands = self.content.commands,
            headline = toml_escape(&self.content.headline),
            tagline = toml_escape(&self.content.tagline),
            features = self.features_to_toml(),
            snippets = self.snippets_to_toml(),
            links = self.links_to_toml(),
            startup_hold = self.motion.startup_hold_ms,
            typing = self.motion.typing_ms,
            deleting = self.motion.deleting_ms,
            hold = self.motion.hold_ms,
            word_pause = self.motion.word_pause_ms,
            cycle_pause = self.motion.cycle_pause_ms,
            pause_poll = self.motion.pause_poll_ms,
            cursor_blink = self.motion.cursor_blink_ms,
            reveal_stagger = self.motion.reveal_stagger_ms,
            reveal_fade = self.motion.reveal_fade_ms,
            copied_reset = self.motion.copied_reset_ms,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
