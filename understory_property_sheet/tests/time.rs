// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for time properties and carry propagation through the editor.

use understory_property_sheet::{
    Step, Time, TimeField, TimePanel, TimeProperty,
    carry::{RawTime, apply_delta, settle},
};

fn t(h: u32, m: u8, s: u8) -> Time {
    Time::new(h, m, s).unwrap()
}

#[test]
fn round_trip_through_total_seconds() {
    for total in (0..200_000_u32).step_by(37).chain([u32::MAX - 1, u32::MAX]) {
        let time = Time::from_total_seconds(total);
        assert_eq!(time.total_seconds(), u64::from(total));
        assert_eq!(Time::try_from(time.total_seconds()), Ok(time));
    }
}

#[test]
fn stepping_3661_seconds_from_any_start() {
    for start in [t(0, 0, 0), t(4, 0, 0), t(2, 58, 59), t(0, 59, 1)] {
        let mut time = start;
        for _ in 0..3_661 {
            time = apply_delta(time, TimeField::Seconds, Step::Up, u32::MAX);
        }
        assert_eq!(time.total_seconds(), start.total_seconds() + 3_661);
    }
    let mut time = t(7, 0, 0);
    for _ in 0..3_661 {
        time = apply_delta(time, TimeField::Seconds, Step::Up, u32::MAX);
    }
    assert_eq!(time, t(8, 1, 1));
}

#[test]
fn editor_floor_at_zero() {
    let timer = TimeProperty::new("Timer", t(0, 0, 1));
    let editor = timer.create_editor();
    let viewer = timer.create_viewer();

    editor.edit(|panel| panel.step(TimeField::Seconds, Step::Down));
    assert_eq!(timer.value(), Time::ZERO);

    editor.edit(|panel| panel.step(TimeField::Seconds, Step::Down));
    assert_eq!(timer.value(), Time::ZERO);
    assert_eq!(editor.widget().spinner(TimeField::Seconds).value(), 0);
    assert_eq!(viewer.widget().text(), "00:00:00");
}

#[test]
fn editor_carries_into_minutes_and_hours() {
    let timer = TimeProperty::new("Timer", t(0, 59, 59));
    let editor = timer.create_editor();
    let viewer = timer.create_viewer();

    editor.edit(|panel| panel.step(TimeField::Seconds, Step::Up));
    assert_eq!(timer.value(), t(1, 0, 0));
    let panel = editor.widget();
    assert_eq!(panel.spinner(TimeField::Hours).value(), 1);
    assert_eq!(panel.spinner(TimeField::Minutes).value(), 0);
    assert_eq!(panel.spinner(TimeField::Seconds).value(), 0);
    assert_eq!(panel.last_changed(), None);
    assert_eq!(viewer.widget().text(), "01:00:00");
}

#[test]
fn editor_borrows_minutes() {
    let timer = TimeProperty::new("Timer", t(2, 0, 30));
    let editor = timer.create_editor();
    editor.edit(|panel| panel.step(TimeField::Minutes, Step::Down));
    assert_eq!(timer.value(), t(1, 59, 30));
}

#[test]
fn typed_overshoot_is_settled() {
    let timer = TimeProperty::new("Timer", t(0, 10, 0));
    let editor = timer.create_editor();
    editor.edit(|panel: &mut TimePanel| panel.enter(TimeField::Minutes, 75));
    assert_eq!(timer.value(), t(1, 0, 0));
}

#[test]
fn hour_limit_saturates() {
    let timer = TimeProperty::with_max_hours("Timer", t(23, 59, 59), 23);
    timer.step(TimeField::Seconds, Step::Up);
    assert_eq!(timer.value(), t(23, 59, 59));
    timer.step(TimeField::Hours, Step::Up);
    assert_eq!(timer.value(), t(23, 59, 59));

    timer.set_value(t(40, 0, 0));
    assert_eq!(timer.value(), t(23, 0, 0));
}

#[test]
fn settle_is_total_over_spinner_readings() {
    for h in -1..=3_i64 {
        for m in -1..=60 {
            for s in -1..=60 {
                for field in [TimeField::Hours, TimeField::Minutes, TimeField::Seconds] {
                    let time = settle(RawTime::new(h, m, s), field, 2);
                    assert!(time.hours() <= 2);
                    assert!(time.minutes() <= 59);
                    assert!(time.seconds() <= 59);
                }
            }
        }
    }
}
