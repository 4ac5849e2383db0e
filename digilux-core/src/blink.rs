//! Blink cadence
//!
//! Decides when the LED toggles while the current digit is even. The
//! controller owns the LED; this only tracks the phase.

use crate::clock::{elapsed, Millis};

/// Blink phase tracker
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkController {
    active: bool,
    last_toggle: Millis,
}

impl BlinkController {
    /// Create an inactive controller
    pub const fn new() -> Self {
        Self {
            active: false,
            last_toggle: 0,
        }
    }

    /// Start blinking; the first toggle is one full period after `now`
    pub fn start(&mut self, now: Millis) {
        self.active = true;
        self.last_toggle = now;
    }

    /// Stop blinking
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Check if blinking
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Check whether a toggle is due at `now`
    ///
    /// Restarts the period when it returns true.
    pub fn due(&mut self, now: Millis, cadence_ms: u32) -> bool {
        if self.active && elapsed(now, self.last_toggle) >= cadence_ms {
            self.last_toggle = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_never_due() {
        let mut blink = BlinkController::new();
        assert!(!blink.due(1_000, 200));
    }

    #[test]
    fn test_period() {
        let mut blink = BlinkController::new();
        blink.start(100);

        assert!(!blink.due(299, 200));
        assert!(blink.due(300, 200));
        assert!(!blink.due(300, 200));
        assert!(!blink.due(499, 200));
        assert!(blink.due(500, 200));
    }

    #[test]
    fn test_restart_resets_phase() {
        let mut blink = BlinkController::new();
        blink.start(0);
        blink.start(150);
        assert!(!blink.due(200, 200));
        assert!(blink.due(350, 200));
    }

    #[test]
    fn test_stop() {
        let mut blink = BlinkController::new();
        blink.start(0);
        blink.stop();
        assert!(!blink.is_active());
        assert!(!blink.due(400, 200));
    }
}
