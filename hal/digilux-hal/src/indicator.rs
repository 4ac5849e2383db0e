//! Status indicator output
//!
//! The indicator is a three-channel LED. The core drives the primary
//! channel; the auxiliary channels are kept off.

use crate::gpio::OutputPin;

/// Indicator driver
pub trait IndicatorOutput {
    /// Drive all three channels
    fn set(&mut self, on: bool, aux_a: bool, aux_b: bool);
}

/// Indicator built from three GPIO pins
///
/// All pins share one polarity: active-high (common cathode) or active-low
/// (common anode).
pub struct PinIndicator<A, B, C> {
    primary: A,
    aux_a: B,
    aux_b: C,
    /// If true, channel ON = pin LOW
    inverted: bool,
}

impl<A: OutputPin, B: OutputPin, C: OutputPin> PinIndicator<A, B, C> {
    /// Create a new indicator with all channels off
    pub fn new(primary: A, aux_a: B, aux_b: C, inverted: bool) -> Self {
        let mut indicator = Self {
            primary,
            aux_a,
            aux_b,
            inverted,
        };
        indicator.set(false, false, false);
        indicator
    }

    /// Create an indicator for a common-cathode LED
    pub fn new_active_high(primary: A, aux_a: B, aux_b: C) -> Self {
        Self::new(primary, aux_a, aux_b, false)
    }

    /// Create an indicator for a common-anode LED
    pub fn new_active_low(primary: A, aux_a: B, aux_b: C) -> Self {
        Self::new(primary, aux_a, aux_b, true)
    }

    /// Check if the primary channel is lit
    pub fn is_on(&self) -> bool {
        self.primary.is_set_high() != self.inverted
    }
}

impl<A: OutputPin, B: OutputPin, C: OutputPin> IndicatorOutput for PinIndicator<A, B, C> {
    fn set(&mut self, on: bool, aux_a: bool, aux_b: bool) {
        // on != inverted gives the pin level for either polarity
        self.primary.set_state(on != self.inverted);
        self.aux_a.set_state(aux_a != self.inverted);
        self.aux_b.set_state(aux_b != self.inverted);
    }
}
