//! Analysis session
//!
//! Tracks which digit is current and when it became current. Emits
//! scheduler events for the state machine; it never touches the LED.

use crate::clock::{elapsed, Millis};
use crate::filter::DigitSequence;
use crate::state::Event;

/// One pass over a digit sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSession {
    sequence: DigitSequence,
    index: usize,
    last_advance: Millis,
}

impl AnalysisSession {
    /// Begin at digit 0
    pub fn new(sequence: DigitSequence, now: Millis) -> Self {
        Self {
            sequence,
            index: 0,
            last_advance: now,
        }
    }

    /// Index of the current digit
    pub fn index(&self) -> usize {
        self.index
    }

    /// Value of the current digit
    pub fn current(&self) -> u8 {
        self.sequence.digits()[self.index]
    }

    /// The sequence being analyzed
    pub fn sequence(&self) -> &DigitSequence {
        &self.sequence
    }

    /// Advance when the current digit's dwell time is over
    ///
    /// `blinking` reports whether the last analyzed digit left the blink
    /// active; it decides how a finished sequence ends. The index never
    /// moves past the last digit.
    pub fn poll(&mut self, now: Millis, cadence_ms: u32, blinking: bool) -> Option<Event> {
        if elapsed(now, self.last_advance) < cadence_ms {
            return None;
        }

        let next = self.index + 1;
        if next < self.sequence.len() {
            self.index = next;
            self.last_advance = now;
            Some(Event::DigitDue)
        } else if self.sequence.is_continuous() {
            self.index = 0;
            self.last_advance = now;
            Some(Event::SequenceWrapped)
        } else {
            Some(Event::SequenceDone { blinking })
        }
    }
}
