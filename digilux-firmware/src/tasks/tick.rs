//! Millisecond tick task
//!
//! Advances the shared clock while the controller has the tick enabled.
//! Disabled between sessions so no stale time accrues.

use defmt::*;

use digilux_core::Context;
use digilux_hal::TimerConfig;

use crate::channels::{TICK_GATE, WAKE};

/// Tick task - one clock increment per interval while the gate is open
#[embassy_executor::task]
pub async fn tick_task(ctx: &'static Context, config: TimerConfig) {
    info!("Tick task started ({} us)", config.interval_us);

    loop {
        TICK_GATE
            .run(&config, || {
                ctx.on_tick();
                WAKE.signal(());
            })
            .await;
        trace!("Tick stopped at {} ms", ctx.clock.now());
    }
}
