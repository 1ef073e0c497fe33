// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capturing and restoring property state.

use alloc::string::String;

use crate::kind::PropertyKind;
use crate::property::Property;
use crate::state::Editability;

/// Everything about a property except its views, observers and action.
///
/// With the `serde` feature a snapshot can be serialized whenever its value
/// can.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertySnapshot<V> {
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Value.
    pub value: V,
    /// Whether editors accept input.
    pub enabled: bool,
    /// Editability mode.
    pub editability: Editability,
}

impl<K: PropertyKind> Property<K> {
    /// Captures the current state.
    #[must_use]
    pub fn snapshot(&self) -> PropertySnapshot<K::Value> {
        PropertySnapshot {
            name: self.name(),
            description: self.description(),
            value: self.value(),
            enabled: self.is_enabled(),
            editability: self.editability(),
        }
    }

    /// Applies a snapshot.
    ///
    /// Every field is applied before views are refreshed, and observers get a
    /// single [`ChangeKind::Restored`](crate::ChangeKind::Restored) event.
    pub fn restore(&self, snapshot: PropertySnapshot<K::Value>) {
        let PropertySnapshot {
            name,
            description,
            value,
            enabled,
            editability,
        } = snapshot;
        self.replace_all(name, description, value, enabled, editability);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChangeKind, CounterProperty};
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn restore_fires_once_and_refreshes_views() {
        let count = CounterProperty::new("Count", 0, 5, 10).unwrap();
        let saved = count.snapshot();
        let editor = count.create_editor();
        let viewer = count.create_viewer();

        count.set_value(9);
        count.set_name("Renamed");
        count.set_enabled(false);

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        count.subscribe(move |event| sink.borrow_mut().push(event.kind));

        count.restore(saved.clone());
        assert_eq!(*events.borrow(), [ChangeKind::Restored]);
        assert_eq!(count.snapshot(), saved);
        assert_eq!(editor.widget().spinner().value(), 5);
        assert!(crate::EditorWidget::view_state(&*editor.widget()).is_enabled());
        assert_eq!(viewer.widget().text(), "5");
    }

    #[test]
    fn restored_values_are_normalized() {
        let count = CounterProperty::new("Count", 0, 5, 10).unwrap();
        let mut snapshot = count.snapshot();
        snapshot.value = 99;
        count.restore(snapshot);
        assert_eq!(count.value(), 10);
    }
}
