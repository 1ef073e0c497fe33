// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notification.
//!
//! Every property owns a [`ChangeBus`]. Observers are plain closures; they are
//! called synchronously, in subscription order, on the thread that mutated the
//! property.
//!
//! Delivery iterates over a snapshot of the subscriber list, so observers may
//! subscribe or unsubscribe (or mutate the property again) while an event is
//! being delivered. Such changes only affect later deliveries.
//!
//! The bus keeps no history: a new observer does not see earlier events.

use alloc::rc::Rc;
use core::cell::{Cell, RefCell};
use core::fmt;

use smallvec::SmallVec;

use crate::id::ObserverId;

/// Inline capacity for subscribers.
///
/// Most properties are watched by a panel row and perhaps one application
/// listener.
const INLINE_OBSERVERS: usize = 4;

/// A subscribed observer.
pub type Observer = Rc<dyn Fn(&ChangeEvent)>;

/// Which part of a property changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// The display name changed.
    Name,
    /// The description changed.
    Description,
    /// The value changed.
    Value,
    /// The enabled flag changed.
    Enabled,
    /// The editability mode changed.
    Editability,
    /// The action attached to the property changed.
    Action,
    /// The whole property was restored from a snapshot.
    Restored,
}

/// An event delivered to observers after a mutation has been applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChangeEvent {
    /// What changed.
    pub kind: ChangeKind,
    /// Revision of the property after the mutation.
    ///
    /// Revisions start at zero and increase by one per delivered event.
    pub revision: u64,
}

/// Subscriber registry for one property.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use understory_property_sheet::{ChangeBus, ChangeKind};
///
/// let bus = ChangeBus::new();
/// let seen = Rc::new(Cell::new(0));
/// let seen_in_observer = seen.clone();
/// let id = bus.subscribe(move |_| seen_in_observer.set(seen_in_observer.get() + 1));
///
/// bus.notify_all(ChangeKind::Value);
/// assert_eq!(seen.get(), 1);
///
/// assert!(bus.unsubscribe(id));
/// bus.notify_all(ChangeKind::Value);
/// assert_eq!(seen.get(), 1);
/// ```
pub struct ChangeBus {
    observers: RefCell<SmallVec<[(ObserverId, Observer); INLINE_OBSERVERS]>>,
    next_id: Cell<u32>,
    revision: Cell<u64>,
}

impl ChangeBus {
    /// Creates a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RefCell::new(SmallVec::new()),
            next_id: Cell::new(0),
            revision: Cell::new(0),
        }
    }

    /// Subscribes an observer and returns the ID needed to unsubscribe it.
    pub fn subscribe<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&ChangeEvent) + 'static,
    {
        self.subscribe_rc(Rc::new(observer))
    }

    /// Subscribes an already shared observer.
    pub fn subscribe_rc(&self, observer: Observer) -> ObserverId {
        let id = ObserverId::new(self.next_id.get());
        self.next_id.set(self.next_id.get().wrapping_add(1));
        self.observers.borrow_mut().push((id, observer));
        id
    }

    /// Removes an observer.
    ///
    /// Returns `true` if it was subscribed.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.borrow_mut();
        if let Some(idx) = observers.iter().position(|(oid, _)| *oid == id) {
            observers.remove(idx);
            true
        } else {
            false
        }
    }

    /// Returns the number of subscribed observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Returns `true` if nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }

    /// Returns the revision of the last delivered event (zero if none).
    #[must_use]
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Delivers an event to every currently subscribed observer.
    ///
    /// The revision is bumped even when nobody is listening.
    pub fn notify_all(&self, kind: ChangeKind) {
        let revision = self.revision.get().wrapping_add(1);
        self.revision.set(revision);

        let snapshot: SmallVec<[Observer; INLINE_OBSERVERS]> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        let event = ChangeEvent { kind, revision };
        for observer in snapshot {
            observer(&event);
        }
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChangeBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeBus")
            .field("observers", &self.len())
            .field("revision", &self.revision.get())
            .finish_non_exhaustive()
    }
}
