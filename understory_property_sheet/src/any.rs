// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type-erased access to properties of any kind.

use alloc::string::String;

use crate::bus::Observer;
use crate::id::ObserverId;
use crate::kind::PropertyKind;
use crate::property::Property;
use crate::state::Editability;

/// The part of a property's interface that does not depend on its value type.
///
/// Lets heterogeneous properties live side by side in a
/// [`PropertySet`](crate::PropertySet).
pub trait AnyProperty {
    /// Returns the display name.
    fn name(&self) -> String;
    /// Returns the description.
    fn description(&self) -> String;
    /// Returns `true` if editors accept input.
    fn is_enabled(&self) -> bool;
    /// Returns the editability mode.
    fn editability(&self) -> Editability;
    /// Returns the value as a plain-text viewer would show it.
    fn value_text(&self) -> String;
    /// Fires the action, if any. Returns `false` if there is none.
    fn trigger_action(&self) -> bool;
    /// Subscribes an observer.
    fn observe(&self, observer: Observer) -> ObserverId;
    /// Unsubscribes an observer. Returns `true` if it was subscribed.
    fn unobserve(&self, id: ObserverId) -> bool;
    /// Returns the number of change events delivered so far.
    fn revision(&self) -> u64;
}

impl<K: PropertyKind> AnyProperty for Property<K> {
    fn name(&self) -> String {
        Self::name(self)
    }

    fn description(&self) -> String {
        Self::description(self)
    }

    fn is_enabled(&self) -> bool {
        Self::is_enabled(self)
    }

    fn editability(&self) -> Editability {
        Self::editability(self)
    }

    fn value_text(&self) -> String {
        Self::value_text(self)
    }

    fn trigger_action(&self) -> bool {
        Self::trigger_action(self)
    }

    fn observe(&self, observer: Observer) -> ObserverId {
        self.subscribe(move |event| observer(event))
    }

    fn unobserve(&self, id: ObserverId) -> bool {
        self.unsubscribe(id)
    }

    fn revision(&self) -> u64 {
        Self::revision(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChangeEvent, CounterProperty, TextProperty};
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::Cell;

    #[test]
    fn heterogeneous_properties_share_one_interface() {
        let count = CounterProperty::new("Count", 0, 3, 9).unwrap();
        let title = TextProperty::new("Title", "Hello");
        let all: Vec<Rc<dyn AnyProperty>> = vec![Rc::new(count.clone()), Rc::new(title.clone())];

        let texts: Vec<String> = all.iter().map(|p| p.value_text()).collect();
        assert_eq!(texts, ["3", "Hello"]);

        let seen = Rc::new(Cell::new(0));
        let seen_in_observer = seen.clone();
        let id = all[0].observe(Rc::new(move |_: &ChangeEvent| {
            seen_in_observer.set(seen_in_observer.get() + 1);
        }));
        count.set_value(4);
        assert_eq!(seen.get(), 1);
        assert!(all[0].unobserve(id));
        count.set_value(5);
        assert_eq!(seen.get(), 1);
        assert_eq!(AnyProperty::revision(&count), 2);
    }
}
