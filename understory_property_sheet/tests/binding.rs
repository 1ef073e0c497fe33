// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for view synchronization.
//!
//! These exercise how a property keeps its editors, viewers and observers in
//! step: ordering of pushes and events, feedback-loop avoidance, fault
//! isolation, editability modes and handle lifetimes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use understory_property_sheet::{
    ChangeKind, CounterEditor, CounterProperty, Editability, EditorWidget, Interaction,
    TextField, TextProperty,
};

#[test]
fn every_view_matches_after_each_set_value() {
    let count = CounterProperty::new("Count", -5, 0, 5).unwrap();
    let editors: Vec<_> = (0..3).map(|_| count.create_editor()).collect();
    let viewers: Vec<_> = (0..2).map(|_| count.create_viewer()).collect();

    for value in [3, -2, 9, -9, 0, 4, 4] {
        count.set_value(value);
        let stored = count.value();
        for editor in &editors {
            assert_eq!(editor.widget().spinner().value(), i64::from(stored));
            assert_eq!(editor.widget().slider().value(), i64::from(stored));
        }
        for viewer in &viewers {
            assert_eq!(viewer.widget().text(), stored.to_string());
        }
    }
}

#[test]
fn views_are_updated_before_observers_run() {
    let title = TextProperty::new("Title", "a");
    let viewer = title.create_viewer();
    let seen = Rc::new(RefCell::new(String::new()));

    let seen_in_observer = seen.clone();
    let viewer_in_observer = title.create_viewer();
    title.subscribe(move |_| {
        seen_in_observer
            .borrow_mut()
            .push_str(viewer_in_observer.widget().text());
    });

    title.set_value("b".into());
    assert_eq!(*seen.borrow(), "b");
    assert_eq!(viewer.widget().text(), "b");
}

#[test]
fn repeated_broadcast_does_not_write_into_editors_again() {
    let title = TextProperty::new("Title", "start");
    let origin = title.create_editor();
    let other = title.create_editor();
    let viewer = title.create_viewer();

    assert_eq!(origin.edit(|field| field.replace("typed")), Interaction::Committed);
    let origin_writes = origin.widget().writes();
    let other_writes = other.widget().writes();
    let viewer_writes = viewer.widget().writes();
    assert_eq!(other_writes, 1);

    title.broadcast_to_editors();
    title.broadcast_to_editors();
    title.broadcast_to_viewers();
    assert_eq!(origin.widget().writes(), origin_writes);
    assert_eq!(other.widget().writes(), other_writes);
    assert_eq!(viewer.widget().writes(), viewer_writes);
}

#[test]
fn one_event_per_mutation() {
    let title = TextProperty::new("Title", "x");
    let kinds = Rc::new(RefCell::new(Vec::new()));
    let sink = kinds.clone();
    title.subscribe(move |event| sink.borrow_mut().push((event.kind, event.revision)));

    title.set_name("Heading");
    title.set_description("Shown at the top");
    title.set_value("y".into());
    title.set_enabled(false);
    title.set_editability(Editability::Action);
    title.set_action(|_| {});

    assert_eq!(
        *kinds.borrow(),
        [
            (ChangeKind::Name, 1),
            (ChangeKind::Description, 2),
            (ChangeKind::Value, 3),
            (ChangeKind::Enabled, 4),
            (ChangeKind::Editability, 5),
            (ChangeKind::Action, 6),
        ]
    );
    assert_eq!(title.name(), "Heading");
    assert_eq!(title.description(), "Shown at the top");
}

#[test]
fn observers_may_write_back_into_the_property() {
    let count = CounterProperty::new("Count", 0, 0, 100).unwrap();
    let viewer = count.create_viewer();
    let weak = count.downgrade();
    count.subscribe(move |event| {
        if event.kind != ChangeKind::Value {
            return;
        }
        let Some(count) = weak.upgrade() else {
            return;
        };
        // Snap to even numbers.
        let value = count.value();
        if value % 2 != 0 {
            count.set_value(value + 1);
        }
    });

    count.set_value(7);
    assert_eq!(count.value(), 8);
    assert_eq!(viewer.widget().text(), "8");
}

#[test]
fn busy_widgets_are_skipped() {
    let count = CounterProperty::new("Count", 0, 1, 10).unwrap();
    let busy = count.create_editor();
    let free = count.create_editor();
    let viewer = count.create_viewer();

    {
        let _held = busy.widget();
        count.set_value(6);
    }
    assert_eq!(count.value(), 6);
    assert_eq!(busy.widget().spinner().value(), 1);
    assert_eq!(free.widget().spinner().value(), 6);
    assert_eq!(viewer.widget().text(), "6");

    // The next push catches the skipped editor up.
    count.broadcast_to_editors();
    assert_eq!(busy.widget().spinner().value(), 6);
}

#[test]
fn enabled_and_editability_reach_editors_only() {
    let title = TextProperty::new("Title", "x");
    let editor = title.create_editor();

    title.set_enabled(false);
    assert!(!editor.widget().view_state().is_enabled());
    assert_eq!(editor.edit(|field| field.replace("ignored")), Interaction::Disabled);
    assert_eq!(title.value(), "x");
    assert_eq!(editor.widget().text(), "x");

    title.set_enabled(true);
    title.set_editability(Editability::Action);
    let state = editor.widget().view_state();
    assert!(state.is_enabled());
    assert!(!state.is_editable());

    // New editors start with the current state.
    let late = title.create_editor();
    assert!(!late.widget().view_state().is_editable());
}

#[test]
fn action_mode_fires_once_and_keeps_value() {
    let count = CounterProperty::new("Count", 0, 1, 10).unwrap();
    let editor = count.create_editor();
    let fired = Rc::new(Cell::new(0));
    let fired_in_action = fired.clone();
    count.set_action(move |_| fired_in_action.set(fired_in_action.get() + 1));
    count.set_editability(Editability::Action);

    assert_eq!(editor.edit(CounterEditor::step_up), Interaction::ActionFired);
    assert_eq!(fired.get(), 1);
    assert_eq!(count.value(), 1);
    assert_eq!(editor.widget().spinner().value(), 1);

    count.clear_action();
    assert!(!count.trigger_action());
    assert_eq!(fired.get(), 1);
}

#[test]
fn removed_editors_are_detached() {
    let title = TextProperty::new("Title", "x");
    let kept = title.create_editor();
    let removed = title.create_editor();
    let viewer = title.create_viewer();
    assert_eq!((title.editor_count(), title.viewer_count()), (2, 1));

    assert!(title.remove_editor(&removed));
    assert!(!title.remove_editor(&removed));
    assert!(!removed.is_attached());
    assert!(kept.is_attached());

    title.set_value("y".into());
    assert_eq!(removed.widget().text(), "x");
    assert_eq!(removed.edit(|field| field.replace("z")), Interaction::Detached);
    assert_eq!(title.value(), "y");

    assert!(title.remove_viewer(&viewer));
    title.set_value("w".into());
    assert_eq!(viewer.widget().text(), "y");
}

#[test]
fn editors_from_another_property_are_not_removed() {
    let a = TextProperty::new("A", "");
    let b = TextProperty::new("B", "");
    let from_a = a.create_editor();
    let from_b = b.create_editor();
    assert_eq!(from_a.id(), from_b.id());
    assert!(!b.remove_editor(&from_a));
    assert_eq!(b.editor_count(), 1);
}

#[test]
fn editors_do_not_keep_properties_alive() {
    let title = TextProperty::new("Title", "x");
    let editor = title.create_editor();
    let weak = title.downgrade();
    drop(title);

    assert!(weak.upgrade().is_none());
    assert!(editor.property().is_none());
    assert_eq!(editor.edit(|field: &mut TextField| field.replace("y")), Interaction::Detached);
}

#[test]
fn clones_share_state() {
    let title = TextProperty::new("Title", "x");
    let alias = title.clone();
    let viewer = alias.create_viewer();
    title.set_value("shared".into());
    assert!(title.ptr_eq(&alias));
    assert_eq!(viewer.widget().text(), "shared");
    assert_eq!(alias.revision(), 1);
}
