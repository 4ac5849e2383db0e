//! Events that trigger state transitions

use crate::error::Error;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Input events
    /// First byte of a new line is waiting
    ByteArrived,
    /// Line completed and contains digits
    LineAccepted,
    /// Line completed but cannot start a session
    LineRejected(Error),

    // Scheduler events
    /// Session set up, first digit ready
    SessionStarted,
    /// Dwell time elapsed, next digit is current
    DigitDue,
    /// Continuous sequence ran past its end and restarted at digit 0
    SequenceWrapped,
    /// Sequence ran past its end
    SequenceDone {
        /// Last digit was even
        blinking: bool,
    },

    // Interrupt events
    /// New input arrived while a session was running
    Interrupted,
}
