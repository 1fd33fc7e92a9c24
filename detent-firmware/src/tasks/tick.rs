//! Tick task driving the encoder state machines

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::BoardEncoder;

/// Service interval in milliseconds; all configured thresholds count these
pub const TICK_INTERVAL_MS: u64 = 1;

/// Tick task - services the encoder once per tick
#[embassy_executor::task]
pub async fn tick_task(encoder: &'static BoardEncoder) {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;
        encoder.service();
    }
}
