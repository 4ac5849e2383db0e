//! GPIO wrappers
//!
//! Newtypes over embassy-rp pins: the LED output implements the shared
//! `digilux-hal` trait, the button input waits for configured edges.

use embassy_rp::gpio::{Input, Level, Output, Pin, Pull as RpPull};
use embassy_rp::Peri;

use digilux_hal::{ButtonConfig, OutputPin, Pull};

/// Push-pull output driving one LED channel
pub struct LedPin<'d>(Output<'d>);

impl<'d> LedPin<'d> {
    /// Take `pin` as an output, initially low
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self(Output::new(pin, Level::Low))
    }
}

impl OutputPin for LedPin<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Convert the shared pull mode to the embassy-rp one
pub fn rp_pull(pull: Pull) -> RpPull {
    match pull {
        Pull::None => RpPull::None,
        Pull::Up => RpPull::Up,
        Pull::Down => RpPull::Down,
    }
}

/// Freeze button input
pub struct ButtonPin<'d> {
    input: Input<'d>,
    config: ButtonConfig,
}

impl<'d> ButtonPin<'d> {
    /// Take `pin` as an input with the configured pull
    pub fn new(pin: Peri<'d, impl Pin>, config: ButtonConfig) -> Self {
        Self {
            input: Input::new(pin, rp_pull(config.pull)),
            config,
        }
    }

    /// Wait for the next edge matching the configured trigger
    ///
    /// Every matching edge returns. There is no debounce.
    pub async fn wait_for_press(&mut self) {
        loop {
            let was_high = self.input.is_high();
            self.input.wait_for_any_edge().await;
            if self.config.matches(was_high, self.input.is_high()) {
                return;
            }
        }
    }
}
