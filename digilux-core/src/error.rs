//! Error taxonomy
//!
//! None of these are fatal. Each one is local to a single input attempt
//! and the system always lands back on the idle prompt.

use core::fmt;

/// Errors raised while collecting input or running a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Line contained no digits
    InvalidInput,
    /// Line filled the buffer before a terminator arrived
    BufferOverflow,
    /// Receive queue saturated, byte dropped
    QueueFull,
    /// State machine received an event it has no transition for
    UnreachableState,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Error::InvalidInput => "No valid digits entered.",
            Error::BufferOverflow => "Input too long, line discarded.",
            Error::QueueFull => "Receive queue full, input dropped.",
            Error::UnreachableState => "Unexpected state, resetting.",
        };
        f.write_str(text)
    }
}
