//! Report task
//!
//! Polls the encoder the way an application main loop would and logs
//! rotation and button gestures.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::BoardEncoder;

/// Poll interval in milliseconds
pub const REPORT_INTERVAL_MS: u64 = 100;

/// Report task - logs gestures and rotation
#[embassy_executor::task]
pub async fn report_task(encoder: &'static BoardEncoder) {
    info!("Report task started");

    let mut ticker = Ticker::every(Duration::from_millis(REPORT_INTERVAL_MS));

    loop {
        ticker.next().await;

        let gesture = encoder.gesture();
        if gesture.is_one_shot() {
            info!("Button: {}", gesture);
        }

        let increment = encoder.increment();
        if increment != 0 {
            info!("Encoder: {} (total {})", increment, encoder.accumulate());
        }
    }
}
