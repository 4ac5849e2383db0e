//! State machine definition
//!
//! Every scheduler decision is a function of the current state and an
//! event. Side effects are described, not performed: the controller
//! applies the returned [`Effects`].

use super::events::Event;
use crate::error::Error;

/// Controller states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Prompt shown, waiting for the first byte
    Idle,
    /// Assembling a line
    Receiving,
    /// Line accepted, session about to begin
    Starting,
    /// Stepping through digits
    AnalyzingDigit,
    /// Sequence ended on an even digit; blinking until interrupted
    ContinuousBlink,
}

/// Side effects requested by a transition
///
/// Applied by the controller in field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Effects {
    /// Create the session and enable the periodic tick
    pub arm: bool,
    /// Apply the per-digit rule to the current digit
    pub analyze: bool,
    /// Disable the periodic tick, stop blinking, end the session
    pub disarm: bool,
    /// Discard the line, sequence and session data
    pub reset: bool,
    /// Force the LED off (through the freeze gate)
    pub led_off: bool,
    /// Print the input prompt
    pub prompt: bool,
}

impl Effects {
    /// No side effects
    pub const NONE: Self = Self {
        arm: false,
        analyze: false,
        disarm: false,
        reset: false,
        led_off: false,
        prompt: false,
    };

    /// Begin a session on its first digit
    pub const BEGIN: Self = Self {
        arm: true,
        analyze: true,
        ..Self::NONE
    };

    /// Analyze the new current digit
    pub const ANALYZE: Self = Self {
        analyze: true,
        ..Self::NONE
    };

    /// Drop a rejected line and re-prompt
    pub const REJECT: Self = Self {
        reset: true,
        prompt: true,
        ..Self::NONE
    };

    /// Finish a session; the LED keeps its last value
    pub const COMPLETE: Self = Self {
        disarm: true,
        reset: true,
        prompt: true,
        ..Self::NONE
    };

    /// Cancel a session and return to a defined idle point
    pub const ABORT: Self = Self {
        disarm: true,
        reset: true,
        led_off: true,
        prompt: true,
        ..Self::NONE
    };
}

impl State {
    /// Check if an analysis session is running
    pub fn is_session(&self) -> bool {
        matches!(self, State::AnalyzingDigit | State::ContinuousBlink)
    }

    /// Check if the blink cadence applies in this state
    pub fn blink_allowed(&self) -> bool {
        self.is_session()
    }

    /// Process an event and return the next state with its effects
    ///
    /// Pairs with no defined transition are `UnreachableState`; the
    /// caller recovers to `Idle` with [`Effects::ABORT`].
    pub fn transition(self, event: Event) -> Result<(Self, Effects), Error> {
        use Event::*;
        use State::*;

        let next = match (self, event) {
            // Idle transitions
            (Idle, ByteArrived) => (Receiving, Effects::NONE),

            // Receiving transitions
            (Receiving, LineAccepted) => (Starting, Effects::NONE),
            (Receiving, LineRejected(_)) => (Idle, Effects::REJECT),

            // Starting transitions
            (Starting, SessionStarted) => (AnalyzingDigit, Effects::BEGIN),

            // AnalyzingDigit transitions
            (AnalyzingDigit, DigitDue) => (AnalyzingDigit, Effects::ANALYZE),
            (AnalyzingDigit, SequenceWrapped) => (AnalyzingDigit, Effects::ANALYZE),
            (AnalyzingDigit, SequenceDone { blinking: true }) => (ContinuousBlink, Effects::NONE),
            (AnalyzingDigit, SequenceDone { blinking: false }) => (Idle, Effects::COMPLETE),

            // Interruption cancels a running session
            (AnalyzingDigit | ContinuousBlink, Interrupted) => (Idle, Effects::ABORT),

            // A stale signal outside a session has nothing to cancel
            (Idle | Receiving | Starting, Interrupted) => (self, Effects::NONE),

            _ => return Err(Error::UnreachableState),
        };

        Ok(next)
    }
}
