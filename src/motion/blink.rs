// Cursor blink for the brand line
//
// Hard on/off toggling, no easing. Reduced motion hides the cursor
// outright instead of leaving it frozen mid-blink.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct CursorBlink {
    visible: bool,
    period: Duration,
    deadline: Option<Instant>,
}

impl CursorBlink {
    /// `period` is the time spent in each half of the blink, so a full
    /// on/off cycle takes twice that.
    pub fn new(period: Duration, reduce_motion: bool, now: Instant) -> Self {
        Self {
            visible: !reduce_motion,
            period,
            deadline: (!reduce_motion).then(|| now + period),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn step(&mut self, now: Instant) {
        let Some(deadline) = self.deadline else {
            return;
        };
        if now < deadline {
            return;
        }
        self.visible = !self.visible;
        self.deadline = Some(now + self.period);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_every_period() {
        let t0 = Instant::now();
        let period = Duration::from_millis(500);
        let mut blink = CursorBlink::new(period, false, t0);
        assert!(blink.is_visible());

        blink.step(t0 + period);
        assert!(!blink.is_visible());
        assert_eq!(blink.next_deadline(), Some(t0 + period * 2));

        blink.step(t0 + period * 2);
        assert!(blink.is_visible());
    }

    #[test]
    fn early_step_changes_nothing() {
        let t0 = Instant::now();
        let period = Duration::from_millis(500);
        let mut blink = CursorBlink::new(period, false, t0);
        blink.step(t0 + period / 2);
        assert!(blink.is_visible());
        assert_eq!(blink.next_deadline(), Some(t0 + period));
    }

    #[test]
    fn reduced_motion_hides_the_cursor_entirely() {
        let t0 = Instant::now();
        let mut blink = CursorBlink::new(Duration::from_millis(500), true, t0);
        assert!(!blink.is_visible());
        assert_eq!(blink.next_deadline(), None);

        blink.step(t0 + Duration::from_secs(60));
        assert!(!blink.is_visible());
        assert_eq!(blink.next_deadline(), None);
    }
}
