//! Interrupt hand-off context
//!
//! The one object shared between interrupt handlers and the foreground.
//! Every field is a single word with exactly one writer:
//!
//! | field            | written by        | read by          |
//! |------------------|-------------------|------------------|
//! | `clock`          | tick interrupt    | foreground       |
//! | `button`         | button interrupt  | foreground       |
//! | `interrupted`    | serial interrupt (set), foreground (clear) | foreground |
//! | `session_active` | foreground        | serial interrupt |
//!
//! Place it in a `static` so the handlers can reach it.

use portable_atomic::{AtomicBool, Ordering};

use crate::button::ButtonLatch;
use crate::clock::Clock;

/// Shared state between interrupt context and the foreground loop
#[derive(Debug, Default)]
pub struct Context {
    /// Millisecond clock
    pub clock: Clock,
    /// Freeze button latch
    pub button: ButtonLatch,
    interrupted: AtomicBool,
    session_active: AtomicBool,
}

impl Context {
    /// Create a context at boot state
    pub const fn new() -> Self {
        Self {
            clock: Clock::new(),
            button: ButtonLatch::new(),
            interrupted: AtomicBool::new(false),
            session_active: AtomicBool::new(false),
        }
    }

    /// Periodic timer interrupt entry point
    #[inline]
    pub fn on_tick(&self) {
        self.clock.tick();
    }

    /// Button edge interrupt entry point
    #[inline]
    pub fn on_button_edge(&self) {
        self.button.on_edge();
    }

    /// Raise the interruption signal if an analysis session is running
    ///
    /// Called by the receive path after a byte was queued.
    pub(crate) fn note_byte(&self) {
        if self.session_active.load(Ordering::Acquire) {
            self.interrupted.store(true, Ordering::Release);
        }
    }

    /// Consume the interruption signal
    pub(crate) fn take_interrupt(&self) -> bool {
        self.interrupted.swap(false, Ordering::AcqRel)
    }

    /// Check if the interruption signal is raised
    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::Acquire)
    }

    /// Mark whether an analysis session is running
    pub(crate) fn set_session_active(&self, active: bool) {
        self.session_active.store(active, Ordering::Release);
    }

    /// Check if an analysis session is running
    pub fn is_session_active(&self) -> bool {
        self.session_active.load(Ordering::Acquire)
    }
}
