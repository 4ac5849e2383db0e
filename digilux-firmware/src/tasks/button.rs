//! Freeze button task

use defmt::*;

use digilux_core::Context;
use digilux_hal_rp2040::ButtonPin;

use crate::channels::WAKE;

/// Button task - latches every qualifying edge
#[embassy_executor::task]
pub async fn button_task(ctx: &'static Context, mut button: ButtonPin<'static>) {
    info!("Button task started");

    loop {
        button.wait_for_press().await;
        ctx.on_button_edge();
        debug!(
            "Button edge: presses={}, frozen={}",
            ctx.button.presses(),
            ctx.button.is_frozen()
        );
        WAKE.signal(());
    }
}
