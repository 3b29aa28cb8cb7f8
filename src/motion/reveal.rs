// Staggered word reveal for headline text
//
// Words start hidden, then fade in one after another once the text
// scrolls into view. The whole thing is a pure function of the trigger
// instant: there is no per-word state to mutate, only boundaries to
// compare `now` against. Triggering is one-shot; scrolling away and
// back does not restart the entrance.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// Delay between one word starting its entrance and the next.
    pub stagger: Duration,
    /// How long a single word takes to fade from hidden to settled.
    pub fade: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            stagger: Duration::from_millis(75),
            fade: Duration::from_millis(500),
        }
    }
}

/// Visual stage of one word at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordState {
    Hidden,
    Entering,
    Settled,
}

/// One line of text whose words enter with a staggered fade.
///
/// Under reduced motion every word is settled from construction and no
/// deadline is ever reported, matching the typing animator's absorbing
/// static state.
#[derive(Debug)]
pub struct Reveal {
    words: Vec<String>,
    timing: RevealTiming,
    started: Option<Instant>,
    immediate: bool,
}

impl Reveal {
    pub fn new(text: &str, timing: RevealTiming, reduce_motion: bool) -> Self {
        Self {
            words: text.split_whitespace().map(String::from).collect(),
            timing,
            started: None,
            immediate: reduce_motion,
        }
    }

    /// Start the entrance. Later calls are no-ops, so the entrance runs
    /// once per page load no matter how often the line scrolls into view.
    pub fn trigger(&mut self, now: Instant) {
        if self.immediate || self.started.is_some() {
            return;
        }
        self.started = Some(now);
    }

    pub fn is_triggered(&self) -> bool {
        self.immediate || self.started.is_some()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn state_of(&self, word: usize, now: Instant) -> WordState {
        if self.immediate {
            return WordState::Settled;
        }
        let Some(started) = self.started else {
            return WordState::Hidden;
        };
        let appear = started + self.timing.stagger * word as u32;
        if now < appear {
            WordState::Hidden
        } else if now < appear + self.timing.fade {
            WordState::Entering
        } else {
            WordState::Settled
        }
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        (0..self.words.len()).all(|i| self.state_of(i, now) == WordState::Settled)
    }

    /// Next instant at which some word changes stage, if any.
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        if self.immediate {
            return None;
        }
        let started = self.started?;
        (0..self.words.len())
            .flat_map(|i| {
                let appear = started + self.timing.stagger * i as u32;
                [appear, appear + self.timing.fade]
            })
            .filter(|boundary| *boundary > now)
            .min()
    }
}
