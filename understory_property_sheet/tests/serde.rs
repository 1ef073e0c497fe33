// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for serialization of snapshots.

#![cfg(feature = "serde")]

use understory_property_sheet::{
    Editability, PropertySnapshot, Time, TimeProperty, TrueFalseProperty,
};

#[test]
fn time_serializes_as_total_seconds() {
    let time = Time::new(1, 1, 1).unwrap();
    assert_eq!(serde_json::to_string(&time).unwrap(), "3661");
    assert_eq!(serde_json::from_str::<Time>("3661").unwrap(), time);
    assert!(serde_json::from_str::<Time>("99999999999999").is_err());
}

#[test]
fn snapshot_round_trip_restores_property() {
    let timer = TimeProperty::new("Timer", Time::from_total_seconds(90));
    timer.set_description("Countdown");
    timer.set_editability(Editability::Action);

    let json = serde_json::to_string(&timer.snapshot()).unwrap();
    let restored = TimeProperty::new("", Time::ZERO);
    let snapshot: PropertySnapshot<Time> = serde_json::from_str(&json).unwrap();
    restored.restore(snapshot);

    assert_eq!(restored.snapshot(), timer.snapshot());
    assert_eq!(restored.value_text(), "00:01:30");
}

#[test]
fn snapshot_field_names() {
    let flag = TrueFalseProperty::new("Wrap", true, "On", "Off");
    let value = serde_json::to_value(flag.snapshot()).unwrap();
    assert_eq!(value["name"], "Wrap");
    assert_eq!(value["value"], true);
    assert_eq!(value["enabled"], true);
    assert_eq!(value["editability"], "Edit");
}
