//! Line buffer for operator input

use heapless::String;

use crate::config::LINE_CAPACITY;
use crate::error::Error;

/// Characters a line can hold before it is rejected
pub const MAX_LINE_CHARS: usize = LINE_CAPACITY - 1;

/// Operator input line under assembly
///
/// Holds printable ASCII only. Reaching [`MAX_LINE_CHARS`] without a
/// terminator is an overflow.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputLine {
    text: String<LINE_CAPACITY>,
}

impl InputLine {
    /// Create an empty line
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Append a printable character
    ///
    /// Returns `BufferOverflow` once the line is full. The character that
    /// filled the last slot is kept.
    pub fn push(&mut self, c: char) -> Result<(), Error> {
        if self.text.len() >= MAX_LINE_CHARS {
            return Err(Error::BufferOverflow);
        }
        self.text.push(c).map_err(|_| Error::BufferOverflow)?;

        if self.text.len() >= MAX_LINE_CHARS {
            Err(Error::BufferOverflow)
        } else {
            Ok(())
        }
    }

    /// Remove the last character, returns false if the line was empty
    pub fn erase(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Line contents
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Number of characters held
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the line holds nothing
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Discard the contents
    pub fn clear(&mut self) {
        self.text.clear();
    }
}
