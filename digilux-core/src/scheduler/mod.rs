//! Digit scheduler
//!
//! Sequences the digits of an accepted line and applies the per-digit
//! LED rule.

pub mod session;

use digilux_hal::IndicatorOutput;

use crate::blink::BlinkController;
use crate::clock::Millis;
use crate::led::LedState;

pub use session::AnalysisSession;

/// Parity of a digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Parity of `digit`
    pub fn of(digit: u8) -> Self {
        if digit % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// Result of analyzing one digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitOutcome {
    pub digit: u8,
    pub parity: Parity,
    /// Logical LED value after the rule was applied
    pub led_on: bool,
}

/// Apply the per-digit rule
///
/// Even digits switch the LED on and restart the blink phase at `now`.
/// Odd digits stop blinking and toggle the LED once.
pub fn apply_digit<L: IndicatorOutput>(
    digit: u8,
    now: Millis,
    led: &mut LedState,
    blink: &mut BlinkController,
    frozen: bool,
    out: &mut L,
) -> DigitOutcome {
    let parity = Parity::of(digit);

    match parity {
        Parity::Even => {
            blink.start(now);
            led.set(true, frozen, out);
        }
        Parity::Odd => {
            blink.stop();
            led.toggle(frozen, out);
        }
    }

    DigitOutcome {
        digit,
        parity,
        led_on: led.is_on(),
    }
}
