// Typing animator - the brand line's cycling suffix
//
// Renders a fixed base label followed by a suffix that is typed and
// deleted one character at a time, cycling through a word list forever.
// The machine never sleeps on its own: each `step(now)` performs at most
// one transition when the pending deadline has passed, then re-arms the
// deadline. Dropping the animator cancels everything because the
// deadline dies with it.

use std::time::{Duration, Instant};

/// Intervals driving the typing animator, all injected so tests can
/// shrink them and config can override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTiming {
    /// Delay before the very first character appears.
    pub startup_hold: Duration,
    /// Delay between revealed characters.
    pub typing: Duration,
    /// Delay between deleted characters, faster than typing.
    pub deleting: Duration,
    /// Dwell time on a fully typed word before deletion starts.
    pub hold: Duration,
    /// Gap between finishing one word and starting the next.
    pub word_pause: Duration,
    /// Gap when the cycle wraps back to the first word.
    pub cycle_pause: Duration,
    /// Re-check interval while paused by hover.
    pub pause_poll: Duration,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            startup_hold: Duration::from_millis(2000),
            typing: Duration::from_millis(60),
            deleting: Duration::from_millis(40),
            hold: Duration::from_millis(2000),
            word_pause: Duration::from_millis(500),
            cycle_pause: Duration::from_millis(5000),
            pause_poll: Duration::from_millis(100),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// Character-by-character suffix animation behind the brand label.
///
/// Reduced-motion builds never schedule anything: the rendered text is
/// the bare base label and `next_deadline()` stays `None` forever. The
/// same absorbing state covers an empty word list.
#[derive(Debug)]
pub struct TypingAnimator {
    base: String,
    suffixes: Vec<String>,
    timing: TypingTiming,
    phase: Phase,
    index: usize,
    revealed: usize,
    paused: bool,
    deadline: Option<Instant>,
}

impl TypingAnimator {
    pub fn new(
        base: impl Into<String>,
        suffixes: Vec<String>,
        timing: TypingTiming,
        reduce_motion: bool,
        now: Instant,
    ) -> Self {
        let animate = !reduce_motion && !suffixes.is_empty();
        Self {
            base: base.into(),
            suffixes,
            timing,
            phase: Phase::Typing,
            index: 0,
            revealed: 0,
            paused: false,
            deadline: animate.then(|| now + timing.startup_hold),
        }
    }

    /// Base label plus the currently revealed slice of the active suffix.
    /// Slicing counts characters, not bytes, so multi-byte suffixes stay
    /// valid at every intermediate length.
    pub fn rendered(&self) -> String {
        if self.revealed == 0 || self.suffixes.is_empty() {
            return self.base.clone();
        }
        let shown: String = self.suffixes[self.index].chars().take(self.revealed).collect();
        format!("{}{}", self.base, shown)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// True when reduced motion (or an empty word list) pinned the
    /// animator to the bare base label.
    pub fn is_static(&self) -> bool {
        self.deadline.is_none()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freeze the current text. State is preserved exactly; the pending
    /// deadline keeps firing but only re-arms itself at the poll
    /// interval until `resume()`.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Run at most one transition if the pending deadline has passed.
    pub fn step(&mut self, now: Instant) {
        let Some(deadline) = self.deadline else {
            return;
        };
        if now < deadline {
            return;
        }
        if self.paused {
            self.deadline = Some(now + self.timing.pause_poll);
            return;
        }

        let word_len = self.suffixes[self.index].chars().count();
        match self.phase {
            Phase::Typing => {
                if self.revealed < word_len {
                    self.revealed += 1;
                    self.deadline = Some(now + self.timing.typing);
                } else {
                    // Fully typed: dwell on the word, then start deleting.
                    self.phase = Phase::Deleting;
                    self.deadline = Some(now + self.timing.hold);
                }
            }
            Phase::Deleting => {
                if self.revealed > 0 {
                    self.revealed -= 1;
                    self.deadline = Some(now + self.timing.deleting);
                } else {
                    // Suffix is gone: move to the next word. Wrapping to
                    // the first word marks a full cycle and earns the
                    // longer breather.
                    self.index = (self.index + 1) % self.suffixes.len();
                    self.phase = Phase::Typing;
                    let gap = if self.index == 0 {
                        self.timing.cycle_pause
                    } else {
                        self.timing.word_pause
                    };
                    self.deadline = Some(now + gap);
                }
            }
        }
    }
}
