//! buttonctl firmware entry point.
//!
//! Polls one push-button every millisecond and logs the gestures it sees.
//!
//! ```text
//!   GPIO4 ── PinDriver ── HalLevel ──┐
//!                                    ├──▶ Button ──▶ 1x / 2x / 3x tap, long press
//!   esp_timer ── MonotonicClock ─────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::gpio::{PinDriver, Pull};
use esp_idf_svc::hal::peripherals::Peripherals;
use log::info;

use buttonctl::adapters::hal::HalLevel;
use buttonctl::adapters::time::MonotonicClock;
use buttonctl::pins::BUTTON_GPIO;
use buttonctl::{Button, ButtonConfig, Gesture, GestureConfig, Repeats};

const POLL_PERIOD_MS: u32 = 1;

fn on_long_press() {
    info!("{} callback", Gesture::Longtime);
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("buttonctl v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Input pin ──────────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let mut input = PinDriver::input(peripherals.pins.gpio4)?;
    input.set_pull(Pull::Up)?;

    // ── 3. Button ─────────────────────────────────────────────
    let config = ButtonConfig {
        pin: BUTTON_GPIO,
        pull_mode: 0,
        fixation: 0,
        gestures: GestureConfig::default(),
    };
    let mut button = Button::try_from_config(&config, HalLevel::new(input), MonotonicClock::new())?;
    button.set_longtime_callback(Some(on_long_press));
    info!("button on {} ({:?}, {:?})", button.pin(), button.pull_mode(), button.fixation());

    // ── 4. Poll loop ──────────────────────────────────────────
    // Multi-press sites all use the flag variant: flag and callback sites
    // settle on different windows.
    let mut taps = [false; 3];
    let mut last = taps;

    loop {
        for (target, flag) in (1u8..).zip(taps.iter_mut()) {
            button.multiple_flag(flag, target);
        }
        button.longtime_callback(Repeats::Times(1));

        for (target, (&now, before)) in (1u8..).zip(taps.iter().zip(last.iter_mut())) {
            if now != *before {
                info!("{} -> {}", Gesture::Multiple(target), now);
                *before = now;
            }
        }

        FreeRtos::delay_ms(POLL_PERIOD_MS);
    }
}
