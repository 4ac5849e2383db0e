//! Logical LED state and the freeze gate

use digilux_hal::IndicatorOutput;

/// Logical LED value
///
/// Always tracks what the analysis wants. Hardware only follows while
/// the freeze latch is open; `shown` is the last value written to it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedState {
    on: bool,
    shown: bool,
}

impl LedState {
    /// Create an LED in the off state
    pub const fn new() -> Self {
        Self {
            on: false,
            shown: false,
        }
    }

    /// Current logical value
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Last value written to hardware
    pub fn shown(&self) -> bool {
        self.shown
    }

    /// Set the logical value, writing hardware unless frozen
    pub fn set<L: IndicatorOutput>(&mut self, on: bool, frozen: bool, out: &mut L) {
        self.on = on;
        if !frozen {
            self.write(out);
        }
    }

    /// Invert the logical value, returns the new value
    pub fn toggle<L: IndicatorOutput>(&mut self, frozen: bool, out: &mut L) -> bool {
        self.set(!self.on, frozen, out);
        self.on
    }

    /// Copy the logical value to hardware unconditionally
    pub fn mirror<L: IndicatorOutput>(&mut self, out: &mut L) {
        self.write(out);
    }

    /// Take the value hardware shows as the logical value
    pub fn adopt_shown(&mut self) {
        self.on = self.shown;
    }

    fn write<L: IndicatorOutput>(&mut self, out: &mut L) {
        out.set(self.on, false, false);
        self.shown = self.on;
    }
}
