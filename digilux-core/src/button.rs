//! Freeze button latch
//!
//! The edge interrupt counts presses and flips the frozen flag. Nothing
//! else happens in interrupt context; the foreground notices the change
//! through [`ButtonMonitor`] and does the reporting and resync.
//!
//! Every edge counts. There is no debounce window.

use portable_atomic::{AtomicBool, AtomicU32, Ordering};

/// Interrupt-side button state
#[derive(Debug)]
pub struct ButtonLatch {
    presses: AtomicU32,
    frozen: AtomicBool,
}

impl Default for ButtonLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonLatch {
    /// Create an unfrozen latch with no presses
    pub const fn new() -> Self {
        Self {
            presses: AtomicU32::new(0),
            frozen: AtomicBool::new(false),
        }
    }

    /// Record one qualifying edge (button interrupt)
    pub fn on_edge(&self) {
        self.presses.fetch_add(1, Ordering::Relaxed);
        self.frozen.fetch_xor(true, Ordering::AcqRel);
    }

    /// Total presses since boot
    pub fn presses(&self) -> u32 {
        self.presses.load(Ordering::Relaxed)
    }

    /// Check if physical LED writes are suppressed
    pub fn is_frozen(&self) -> bool {
        self.frozen.load(Ordering::Acquire)
    }
}

/// Lock state change observed by the foreground
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockChange {
    /// LED writes now suppressed
    Locked,
    /// LED writes restored
    Restored,
    /// Even number of edges since the last look; lock state unchanged
    Unchanged,
}

/// Button activity to report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonReport {
    /// Running press count
    pub presses: u32,
    /// Current lock state
    pub frozen: bool,
    /// Lock transition since the last report
    pub change: LockChange,
}

/// Foreground view of the latch
///
/// Remembers what was last reported so each pass can tell whether the
/// interrupt did anything in between.
#[derive(Debug, Default)]
pub struct ButtonMonitor {
    seen_presses: u32,
    seen_frozen: bool,
}

impl ButtonMonitor {
    /// Create a monitor matching a fresh latch
    pub const fn new() -> Self {
        Self {
            seen_presses: 0,
            seen_frozen: false,
        }
    }

    /// Check the latch for activity since the last call
    pub fn poll(&mut self, latch: &ButtonLatch) -> Option<ButtonReport> {
        let presses = latch.presses();
        let frozen = latch.is_frozen();

        if presses == self.seen_presses && frozen == self.seen_frozen {
            return None;
        }

        let change = match (self.seen_frozen, frozen) {
            (false, true) => LockChange::Locked,
            (true, false) => LockChange::Restored,
            _ => LockChange::Unchanged,
        };

        self.seen_presses = presses;
        self.seen_frozen = frozen;

        Some(ButtonReport {
            presses,
            frozen,
            change,
        })
    }
}
