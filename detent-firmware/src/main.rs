//! Detent - Rotary Encoder Demo Firmware
//!
//! Runs a click encoder on an RP2040: quadrature lines on GPIO4/GPIO5 and
//! the push-button on GPIO3, all with pull-ups and contacts to ground.
//! The driver is serviced every millisecond and its output is logged over
//! defmt-rtt.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use detent_core::config::{self, DetentConfig};
use detent_core::{ClickEncoder, SharedClickEncoder};
use detent_hal::EhInput;

mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit detent.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../detent.toml");

/// Input line as seen by the driver
pub type Line = EhInput<Input<'static>>;

/// The board's click encoder, shared between the tick and report tasks
pub type BoardEncoder = SharedClickEncoder<Line, Line, Line>;

static ENCODER: StaticCell<BoardEncoder> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Detent firmware starting...");

    let p = embassy_rp::init(Default::default());

    let config = load_config();

    let pin_a = EhInput::new(Input::new(p.PIN_4, Pull::Up));
    let pin_b = EhInput::new(Input::new(p.PIN_5, Pull::Up));
    let button = EhInput::new(Input::new(p.PIN_3, Pull::Up));

    let encoder = ENCODER.init(SharedClickEncoder::new(ClickEncoder::new(
        pin_a,
        pin_b,
        Some(button),
        &config,
    )));

    spawner.spawn(tasks::tick_task(encoder)).unwrap();
    spawner.spawn(tasks::report_task(encoder)).unwrap();

    info!("All tasks spawned");
}

/// Parse the embedded configuration, falling back to defaults
fn load_config() -> DetentConfig {
    match config::parse(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: {} steps/notch, {}, accel={} (max x{}) dblclick={} repeat={}",
                config.encoder.steps_per_notch,
                config.encoder.mode,
                config.encoder.acceleration,
                config.encoder.accel.max_weight(),
                config.button.double_click,
                config.button.long_press_repeat
            );
            config
        }
        Err(e) => {
            warn!("Config parse failed: {}, using defaults", e);
            DetentConfig::default()
        }
    }
}
