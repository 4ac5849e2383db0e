//! GPIO pin abstractions
//!
//! Provides the digital output pin trait, plus the pull and edge
//! configuration used to wire the freeze button.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Input pull resistor mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    None,
    Up,
    Down,
}

/// Edge that triggers an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
    Both,
}

/// Button input configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Pull resistor applied to the button pin
    pub pull: Pull,
    /// Edge counted as a press
    pub edge: Edge,
}

impl Default for ButtonConfig {
    /// Pulled-up button counted on the rising (release) edge
    fn default() -> Self {
        Self {
            pull: Pull::Up,
            edge: Edge::Rising,
        }
    }
}

impl ButtonConfig {
    /// Check whether a level change from `was_high` to `is_high` matches
    /// the configured edge
    pub fn matches(&self, was_high: bool, is_high: bool) -> bool {
        match self.edge {
            Edge::Rising => !was_high && is_high,
            Edge::Falling => was_high && !is_high,
            Edge::Both => was_high != is_high,
        }
    }
}
