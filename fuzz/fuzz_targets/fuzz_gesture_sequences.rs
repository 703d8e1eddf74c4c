//! Fuzz target: every classifier under arbitrary level/time sequences
//!
//! Each input byte is one poll: bit 0 is the line level, the remaining
//! bits are how many milliseconds pass before the poll (0-127).  Three
//! buttons share the line, each with a different classifier mix.  Asserts
//! no panic and that the tap counter never exceeds the largest target.
//!
//! cargo fuzz run fuzz_gesture_sequences

#![no_main]

use buttonctl::adapters::sim::{SimClock, SimLine};
use buttonctl::{Button, Fixation, PinId, PullMode, Repeats};
use libfuzzer_sys::fuzz_target;

fn noop() {}

fuzz_target!(|data: &[u8]| {
    let line = SimLine::new();
    let clock = SimClock::new();
    let pin = PinId::new(4).unwrap();

    let mut short = Button::new(pin, PullMode::PullUp, Fixation::Momentary, &line, &clock);
    let mut taps = Button::new(pin, PullMode::PullUp, Fixation::Momentary, &line, &clock);
    let mut held = Button::new(pin, PullMode::PullUp, Fixation::Latching, &line, &clock);
    taps.set_multiple_callback(Some(noop));
    held.set_infinite_callback(Some(noop));

    let (mut tap, mut long, mut single, mut double, mut hold) = (false, false, false, false, false);

    for &byte in data {
        line.set(byte & 1 == 1);
        clock.advance_ms(u64::from(byte >> 1));

        short.onetime_flag(&mut tap);
        short.longtime_callback(Repeats::Times(1));

        taps.multiple_flag(&mut single, 1);
        taps.multiple_flag(&mut double, 2);
        taps.multiple_callback(4, Repeats::Continuous);
        taps.longtime_flag(&mut long);

        held.infinite_flag(&mut hold);
        held.infinite_callback(Repeats::Times(2));

        assert!(taps.press_count() <= u32::from(taps.max_observed_target()));
    }

    // Released for longer than every window: nothing may stay pending.
    let mut settle = |taps: &mut Button<&SimLine, &SimClock>| {
        taps.multiple_flag(&mut single, 1);
        taps.multiple_flag(&mut double, 2);
        taps.multiple_callback(4, Repeats::Continuous);
        taps.longtime_flag(&mut long);
    };
    line.release();
    for _ in 0..2 {
        settle(&mut taps);
        clock.advance_ms(1);
    }
    clock.advance_ms(10_000);
    settle(&mut taps);
    assert_eq!(taps.press_count(), 0);
});
