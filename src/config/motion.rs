//! Animation timing configuration
//!
//! Every interval the page animates with, in milliseconds. The defaults
//! are tuned to read as human typing; the config file can override any
//! of them independently.

use serde::Deserialize;
use std::time::Duration;

use crate::motion::{RevealTiming, TypingTiming};

/// Animation timing knobs, all in milliseconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionConfig {
    /// Delay before the brand line types its first character
    pub startup_hold_ms: u64,
    /// Delay between typed characters
    pub typing_ms: u64,
    /// Delay between deleted characters (faster than typing)
    pub deleting_ms: u64,
    /// Dwell on a fully typed command before deleting
    pub hold_ms: u64,
    /// Gap between one command and the next
    pub word_pause_ms: u64,
    /// Longer gap when the command cycle wraps to the start
    pub cycle_pause_ms: u64,
    /// Re-check interval while the brand line is paused by hover
    pub pause_poll_ms: u64,
    /// Half-period of the cursor blink (on time == off time)
    pub cursor_blink_ms: u64,
    /// Delay between successive words in a headline reveal
    pub reveal_stagger_ms: u64,
    /// Fade duration of a single revealed word
    pub reveal_fade_ms: u64,
    /// How long the "copied" confirmation stays on a snippet
    pub copied_reset_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            startup_hold_ms: 2000,
            typing_ms: 60,
            deleting_ms: 40,
            hold_ms: 2000,
            word_pause_ms: 500,
            cycle_pause_ms: 5000,
            pause_poll_ms: 100,
            cursor_blink_ms: 500,
            reveal_stagger_ms: 75,
            reveal_fade_ms: 500,
            copied_reset_ms: 2000,
        }
    }
}

/// Motion settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileMotion {
    pub startup_hold_ms: Option<u64>,
    pub typing_ms: Option<u64>,
    pub deleting_ms: Option<u64>,
    pub hold_ms: Option<u64>,
    pub word_pause_ms: Option<u64>,
    pub cycle_pause_ms: Option<u64>,
    pub pause_poll_ms: Option<u64>,
    pub cursor_blink_ms: Option<u64>,
    pub reveal_stagger_ms: Option<u64>,
    pub reveal_fade_ms: Option<u64>,
    pub copied_reset_ms: Option<u64>,
}

impl MotionConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileMotion>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            startup_hold_ms: file.startup_hold_ms.unwrap_or(defaults.startup_hold_ms),
            typing_ms: file.typing_ms.unwrap_or(defaults.typing_ms),
            deleting_ms: file.deleting_ms.unwrap_or(defaults.deleting_ms),
            hold_ms: file.hold_ms.unwrap_or(defaults.hold_ms),
            word_pause_ms: file.word_pause_ms.unwrap_or(defaults.word_pause_ms),
            cycle_pause_ms: file.cycle_pause_ms.unwrap_or(defaults.cycle_pause_ms),
            pause_poll_ms: file.pause_poll_ms.unwrap_or(defaults.pause_poll_ms),
            cursor_blink_ms: file.cursor_blink_ms.unwrap_or(defaults.cursor_blink_ms),
            reveal_stagger_ms: file.reveal_stagger_ms.unwrap_or(defaults.reveal_stagger_ms),
            reveal_fade_ms: file.reveal_fade_ms.unwrap_or(defaults.reveal_fade_ms),
            copied_reset_ms: file.copied_reset_ms.unwrap_or(defaults.copied_reset_ms),
        }
    }

    /// Warn about interval combinations that run but read strangely.
    /// Nothing here is fatal; the page animates with whatever was asked.
    pub fn validate(&self) {
        if self.cycle_pause_ms <= self.word_pause_ms {
            tracing::warn!(
                cycle_pause_ms = self.cycle_pause_ms,
                word_pause_ms = self.word_pause_ms,
                "cycle pause does not exceed word pause; cycle wraps will not stand out"
            );
        }
        if self.deleting_ms >= self.typing_ms {
            tracing::warn!(
                deleting_ms = self.deleting_ms,
                typing_ms = self.typing_ms,
                "deleting is not faster than typing; the brand line will read oddly"
            );
        }
    }

    pub fn typing_timing(&self) -> TypingTiming {
        TypingTiming {
            startup_hold: Duration::from_millis(self.startup_hold_ms),
            typing: Duration::from_millis(self.typing_ms),
            deleting: Duration::from_millis(self.deleting_ms),
            hold: Duration::from_millis(self.hold_ms),
            word_pause: Duration::from_millis(self.word_pause_ms),
            cycle_pause: Duration::from_millis(self.cycle_pause_ms),
            pause_poll: Duration::from_millis(self.pause_poll_ms),
        }
    }

    pub fn reveal_timing(&self) -> RevealTiming {
        RevealTiming {
            stagger: Duration::from_millis(self.reveal_stagger_ms),
            fade: Duration::from_millis(self.reveal_fade_ms),
        }
    }

    pub fn cursor_blink(&self) -> Duration {
        Duration::from_millis(self.cursor_blink_ms)
    }

    pub fn copied_reset(&self) -> Duration {
        Duration::from_millis(self.copied_reset_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_keep_the_animation_invariants() {
        let motion = MotionConfig::default();
        // The wrap pause must stand out against the word pause, and
        // deleting must be snappier than typing.
        assert!(motion.cycle_pause_ms > motion.word_pause_ms);
        assert!(motion.deleting_ms < motion.typing_ms);
        assert!(motion.hold_ms > motion.typing_ms * 10);
    }

    #[test]
    fn test_from_file_merges_partial_overrides() {
        let file = FileMotion {
            typing_ms: Some(10),
            cycle_pause_ms: Some(9000),
            ..FileMotion::default()
        };
        let motion = MotionConfig::from_file(Some(file));
        assert_eq!(motion.typing_ms, 10);
        assert_eq!(motion.cycle_pause_ms, 9000);
        // Untouched fields keep their defaults.
        assert_eq!(motion.deleting_ms, 40);
        assert_eq!(motion.pause_poll_ms, 100);
    }

    #[test]
    fn test_timing_conversions_carry_every_field() {
        let motion = MotionConfig::default();
        let typing = motion.typing_timing();
        assert_eq!(typing.startup_hold, Duration::from_millis(2000));
        assert_eq!(typing.typing, Duration::from_millis(60));
        assert_eq!(typing.deleting, Duration::from_millis(40));
        assert_eq!(typing.hold, Duration::from_millis(2000));
        assert_eq!(typing.word_pause, Duration::from_millis(500));
        assert_eq!(typing.cycle_pause, Duration::from_millis(5000));
        assert_eq!(typing.pause_poll, Duration::from_millis(100));

        let reveal = motion.reveal_timing();
        assert_eq!(reveal.stagger, Duration::from_millis(75));
        assert_eq!(reveal.fade, Duration::from_millis(500));

        assert_eq!(motion.cursor_blink(), Duration::from_millis(500));
        assert_eq!(motion.copied_reset(), Duration::from_millis(2000));
    }
}
