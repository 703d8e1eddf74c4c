//! Callback variants of every classifier.
//!
//! Each test owns its counter; tests run in parallel.

use std::sync::atomic::{AtomicU32, Ordering};

use buttonctl::button::LOOP_PERFORMANCE;
use buttonctl::{Gesture, Repeats};

use crate::harness::{Rig, SimButton};

static ONETIME_CALLS: AtomicU32 = AtomicU32::new(0);
static DOUBLE_CALLS: AtomicU32 = AtomicU32::new(0);
static LONG_CALLS: AtomicU32 = AtomicU32::new(0);
static HELD_CALLS: AtomicU32 = AtomicU32::new(0);
static TRIPLE_CALLS: AtomicU32 = AtomicU32::new(0);

fn on_onetime() {
    ONETIME_CALLS.fetch_add(1, Ordering::SeqCst);
}

fn on_double() {
    DOUBLE_CALLS.fetch_add(1, Ordering::SeqCst);
}

fn on_long() {
    LONG_CALLS.fetch_add(1, Ordering::SeqCst);
}

fn on_held() {
    HELD_CALLS.fetch_add(1, Ordering::SeqCst);
}

fn on_triple() {
    TRIPLE_CALLS.fetch_add(1, Ordering::SeqCst);
}

#[test]
fn onetime_callback_runs_on_release() {
    let rig = Rig::new();
    let mut b = rig.button();
    b.set_onetime_callback(Some(on_onetime));

    rig.hold(&mut b, true, 100, |b| b.onetime_callback(Repeats::Times(2)));
    assert_eq!(ONETIME_CALLS.load(Ordering::SeqCst), 0);
    rig.hold(&mut b, false, 100, |b| b.onetime_callback(Repeats::Times(2)));
    assert_eq!(ONETIME_CALLS.load(Ordering::SeqCst), 2);
}

#[test]
fn double_tap_callback_uses_the_long_window() {
    let rig = Rig::new();
    let mut b = rig.button();
    b.set_multiple_callback(Some(on_double));
    let repeats = Repeats::Times(1);

    rig.tap(&mut b, 30, 80, |b| b.multiple_callback(2, repeats));
    rig.tap(&mut b, 30, 80, |b| b.multiple_callback(2, repeats));
    rig.hold(&mut b, false, 2_000, |b| b.multiple_callback(2, repeats));
    assert_eq!(DOUBLE_CALLS.load(Ordering::SeqCst), 0, "callback window is 3 s");

    rig.hold(&mut b, false, 1_000, |b| b.multiple_callback(2, repeats));
    assert_eq!(DOUBLE_CALLS.load(Ordering::SeqCst), 1);
}

#[test]
fn triple_tap_callback_keeps_its_window_next_to_flag_sites() {
    let rig = Rig::new();
    let mut b = rig.button();
    b.set_multiple_callback(Some(on_triple));
    let mut flags = [false, false];
    let poll = |b: &mut SimButton<'_>, flags: &mut [bool; 2]| {
        b.multiple_flag(&mut flags[0], 1);
        b.multiple_flag(&mut flags[1], 2);
        b.multiple_callback(3, Repeats::Times(1));
    };

    for _ in 0..3 {
        rig.tap(&mut b, 30, 80, |b| poll(b, &mut flags));
    }
    rig.hold(&mut b, false, 1_100, |b| poll(b, &mut flags));
    assert_eq!(TRIPLE_CALLS.load(Ordering::SeqCst), 0, "callback window is 3 s");
    assert_eq!(b.press_count(), 3);

    rig.hold(&mut b, false, 2_000, |b| poll(b, &mut flags));
    assert_eq!(TRIPLE_CALLS.load(Ordering::SeqCst), 1);
    assert_eq!(flags, [false, false]);
}

#[test]
fn continuous_long_press_dispatches_until_next_press() {
    let rig = Rig::new();
    let mut b = rig.button();
    b.set_longtime_callback(Some(on_long));
    let repeats = Repeats::from_raw(LOOP_PERFORMANCE);
    assert!(repeats.is_continuous());

    rig.hold(&mut b, true, 3_100, |b| b.longtime_callback(repeats));
    let fired = LONG_CALLS.load(Ordering::SeqCst);
    assert!(fired > 90, "one dispatch per poll after firing, got {fired}");

    rig.hold(&mut b, false, 100, |b| b.longtime_callback(repeats));
    assert_eq!(LONG_CALLS.load(Ordering::SeqCst), fired + 100);

    rig.hold(&mut b, true, 10, |b| b.longtime_callback(repeats));
    assert!(!b.longtime_ready());
}

#[test]
fn infinite_callback_stops_on_release() {
    let rig = Rig::new();
    let mut b = rig.button();
    b.set_infinite_callback(Some(on_held));

    rig.hold(&mut b, true, 103, |b| b.infinite_callback(Repeats::Continuous));
    assert_eq!(HELD_CALLS.load(Ordering::SeqCst), 100);

    rig.hold(&mut b, false, 50, |b| b.infinite_callback(Repeats::Continuous));
    assert_eq!(HELD_CALLS.load(Ordering::SeqCst), 100);
    assert!(!b.infinite_ready());
}

#[test]
fn unbound_callbacks_still_classify() {
    let rig = Rig::new();
    let mut b = rig.button();
    assert!(b.callbacks().longtime.is_none());

    rig.tap(&mut b, 3_100, 10, |b| b.longtime_callback(Repeats::Times(5)));
    assert!(!b.longtime_ready());
    assert!(!b.is_long_held());
    assert_eq!(Gesture::Longtime.to_string(), "long press");
}
