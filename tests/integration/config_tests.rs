//! Buttons built from serialised descriptions, and the embedded-hal path.

use core::cell::Cell;
use core::convert::Infallible;

use buttonctl::adapters::hal::HalLevel;
use buttonctl::adapters::sim::SimClock;
use buttonctl::{Button, ButtonConfig, ConfigError, Fixation, GestureConfig, PullMode};
use embedded_hal::digital::{ErrorType, InputPin};

use crate::harness::Rig;

#[test]
fn button_from_provisioning_json() {
    let json = r#"{
        "pin": 16,
        "pull_mode": 1,
        "fixation": 0,
        "gestures": { "long_press_ms": 500 }
    }"#;
    let config: ButtonConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.gestures.debounce_ms, GestureConfig::default().debounce_ms);

    let rig = Rig::new();
    let mut b = Button::try_from_config(&config, &rig.line, &rig.clock).unwrap();
    assert_eq!(b.pin().gpio(), 16);
    assert_eq!(b.pull_mode(), PullMode::PullDown);

    let mut long = false;
    rig.hold(&mut b, true, 510, |b| b.longtime_flag(&mut long));
    assert!(long, "configured threshold applies");
}

#[test]
fn postcard_blob_round_trips_into_an_identical_button() {
    let config = ButtonConfig {
        pin: 0,
        pull_mode: 3,
        fixation: 1,
        gestures: GestureConfig {
            multipress_flag_window_ms: 400,
            ..GestureConfig::default()
        },
    };
    let blob = postcard::to_allocvec(&config).unwrap();
    let decoded: ButtonConfig = postcard::from_bytes(&blob).unwrap();

    let rig = Rig::new();
    let b = Button::from_config(&decoded, &rig.line, &rig.clock);
    assert_eq!(b.fixation(), Fixation::Latching);
    assert_eq!(b.pull_mode(), PullMode::Floating);
    assert_eq!(b.config().multipress_flag_window_ms, 400);
}

#[test]
fn bad_descriptions_are_rejected() {
    let rig = Rig::new();
    let cases = [
        (r#"{"pin": 40, "pull_mode": 0, "fixation": 0}"#, ConfigError::InvalidPin(40)),
        (r#"{"pin": 4, "pull_mode": 4, "fixation": 0}"#, ConfigError::InvalidPullMode(4)),
        (r#"{"pin": 4, "pull_mode": 0, "fixation": 2}"#, ConfigError::InvalidFixation(2)),
    ];
    for (json, expected) in cases {
        let config: ButtonConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            Button::try_from_config(&config, &rig.line, &rig.clock).err(),
            Some(expected),
            "{json}"
        );
    }

    let zero_window: ButtonConfig =
        serde_json::from_str(r#"{"pin": 4, "pull_mode": 0, "fixation": 0, "gestures": {"multipress_callback_window_ms": 0}}"#)
            .unwrap();
    assert!(matches!(
        Button::try_from_config(&zero_window, &rig.line, &rig.clock),
        Err(ConfigError::InvalidTiming(_))
    ));
}

#[test]
fn unconnected_pin_builds_and_never_fires() {
    let rig = Rig::new();
    let config: ButtonConfig = serde_json::from_str(r#"{"pin": -1, "pull_mode": 0, "fixation": 0}"#).unwrap();
    let mut b = Button::from_config(&config, &rig.line, &rig.clock);
    assert!(!b.pin().is_connected());

    let (mut tap, mut held) = (false, false);
    rig.tap(&mut b, 50, 50, |b| {
        b.onetime_flag(&mut tap);
        b.infinite_flag(&mut held);
    });
    assert!(!tap && !held);
}

// ── embedded-hal input ────────────────────────────────────────

/// Active-low line as a pull-up GPIO sees it: high while released.
struct WiredPin<'a> {
    high: &'a Cell<bool>,
}

impl ErrorType for WiredPin<'_> {
    type Error = Infallible;
}

impl InputPin for WiredPin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

#[test]
fn pull_up_gpio_drives_onetime() {
    let high = Cell::new(true);
    let clock = SimClock::new();
    let config = ButtonConfig {
        pin: 4,
        pull_mode: 0,
        fixation: 0,
        gestures: GestureConfig::default(),
    };
    let mut b = Button::from_config(&config, HalLevel::new(WiredPin { high: &high }), &clock);
    let mut tap = false;

    let run = |b: &mut Button<HalLevel<WiredPin<'_>>, &SimClock>, line_high: bool, ms: u64, tap: &mut bool| {
        high.set(line_high);
        for _ in 0..ms {
            b.onetime_flag(tap);
            clock.advance_ms(1);
        }
    };

    run(&mut b, true, 20, &mut tap);
    assert!(!tap);
    run(&mut b, false, 20, &mut tap);
    assert!(b.is_pressed(), "low line is a press");
    run(&mut b, true, 20, &mut tap);
    assert!(tap);
}
