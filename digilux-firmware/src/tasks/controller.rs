//! Main controller task
//!
//! Runs the foreground loop: one controller pass, flush the console, then
//! either yield or sleep until an interrupt-side task signals.

use defmt::*;
use embassy_futures::yield_now;
use embassy_rp::uart::BufferedUartTx;

use digilux_core::config::RX_QUEUE_SIZE;
use digilux_core::{Activity, Controller};
use digilux_hal::{PinIndicator, TxBuffer};
use digilux_hal_rp2040::{flush, GatedTimer, LedPin};

use crate::channels::WAKE;

/// Console staging buffer size
pub const TX_STAGING_SIZE: usize = 512;

/// The board's concrete controller
pub type App = Controller<
    'static,
    TxBuffer<TX_STAGING_SIZE>,
    GatedTimer,
    PinIndicator<LedPin<'static>, LedPin<'static>, LedPin<'static>>,
    RX_QUEUE_SIZE,
>;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(mut app: App, mut tx: BufferedUartTx) {
    info!("Controller task started");

    app.boot();
    let mut last_state = app.state();

    loop {
        let activity = app.poll();

        let state = app.state();
        if state != last_state {
            debug!("State: {:?} -> {:?}", last_state, state);
            last_state = state;
        }

        let console = &mut app.peripherals_mut().serial;
        let dropped = console.take_dropped();
        if dropped > 0 {
            warn!("Console overflow, {} bytes dropped", dropped);
        }
        if let Err(e) = flush(&mut tx, console).await {
            warn!("UART write error: {:?}", e);
        }

        match activity {
            Activity::Busy => yield_now().await,
            Activity::Waiting => WAKE.wait().await,
        }
    }
}
