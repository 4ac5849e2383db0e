//! Embassy async tasks
//!
//! Each task runs independently and communicates via the shared context
//! and the wake signal.

pub mod button;
pub mod controller;
pub mod serial_rx;
pub mod tick;

pub use button::button_task;
pub use controller::{controller_task, App};
pub use serial_rx::serial_rx_task;
pub use tick::tick_task;
