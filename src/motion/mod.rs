// Animation state machines
//
// Everything that moves on the page lives here as a plain state machine
// driven by `step(now)` calls against explicit deadlines. No widget in
// this module sleeps or spawns tasks; the event loop owns the clock and
// asks each machine when it next wants to run via `next_deadline()`.
// That keeps every transition testable with fabricated `Instant`s.

mod blink;
mod reveal;
mod typing;

pub use blink::CursorBlink;
pub use reveal::{Reveal, RevealTiming, WordState};
pub use typing::{TypingAnimator, TypingTiming};

use std::time::Instant;

/// Fold two optional deadlines into the sooner one.
///
/// The event loop arms exactly one timer per iteration, so per-widget
/// deadlines get folded down to a single earliest instant.
pub fn earliest(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) => Some(x),
        (None, y) => y,
    }
}
