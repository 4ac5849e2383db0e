//! Number filter
//!
//! Reduces an operator line to the digits it contains. A `-` as the last
//! character, after at least one digit, selects continuous mode.

use heapless::Vec;

use crate::config::LINE_CAPACITY;
use crate::error::Error;

/// Continuous mode marker
pub const CONTINUOUS_MARKER: char = '-';

/// Digits extracted from one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSequence {
    digits: Vec<u8, LINE_CAPACITY>,
    continuous: bool,
}

impl DigitSequence {
    /// Digit values, 0 to 9
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits, never zero
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false; an empty sequence is never constructed
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Check if the sequence loops forever
    pub fn is_continuous(&self) -> bool {
        self.continuous
    }
}

/// Extract digits from a completed line
///
/// A line holding more digits than [`LINE_CAPACITY`] is a `BufferOverflow`.
pub fn filter(line: &str) -> Result<DigitSequence, Error> {
    let mut digits: Vec<u8, LINE_CAPACITY> = Vec::new();
    let mut continuous = false;
    let last = line.chars().count().saturating_sub(1);

    for (i, c) in line.chars().enumerate() {
        if let Some(d) = c.to_digit(10) {
            digits.push(d as u8).map_err(|_| Error::BufferOverflow)?;
        } else if c == CONTINUOUS_MARKER && i == last && !digits.is_empty() {
            continuous = true;
            break;
        }
    }

    if digits.is_empty() {
        return Err(Error::InvalidInput);
    }

    Ok(DigitSequence { digits, continuous })
}
