// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observable properties and view synchronization.
//!
//! A [`Property<K>`] is a cheap, cloneable handle to one shared value. Besides
//! the value it carries a name, a description, an enabled flag and an
//! [`Editability`] mode, and it owns a [`ChangeBus`].
//!
//! # Views
//!
//! Any number of editors and viewers can be created for a property. The
//! property keeps them in creation order and pushes every new value into all
//! of them before notifying observers:
//!
//! 1. normalize the proposed value ([`PropertyKind::normalize`]),
//! 2. store it,
//! 3. push it into every editor, then every viewer,
//! 4. deliver one [`ChangeEvent`](crate::ChangeEvent) to observers.
//!
//! Editors hold only a weak back-reference to the property, so dropping every
//! `Property` handle drops the value even while editor handles are alive.
//!
//! A widget that cannot take a push (it is borrowed elsewhere, or it rejects
//! the value with a [`ViewFault`]) is skipped and logged; the remaining views
//! still update.

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use core::cell::{Cell, RefCell};
use core::fmt;

use smallvec::SmallVec;

use crate::bus::{ChangeBus, ChangeEvent, ChangeKind};
use crate::error::ViewFault;
use crate::handle::{Editor, Viewer};
use crate::id::{ObserverId, ViewId};
use crate::kind::{EditorWidget, PropertyKind};
use crate::state::{Editability, ViewState};

/// Inline capacity for registered views of each flavor.
///
/// A sheet row typically creates one editor and one viewer per property.
const INLINE_VIEWS: usize = 2;

/// Callback fired when a property in [`Editability::Action`] mode is activated.
pub type ActionCallback = Rc<dyn Fn(&ActionEvent)>;

/// Passed to a property's action when it fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionEvent {
    /// Name of the property whose action fired.
    pub name: String,
}

/// A registered view.
pub(crate) struct Slot<W> {
    pub(crate) id: ViewId,
    pub(crate) widget: Rc<RefCell<W>>,
}

impl<W> Clone for Slot<W> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            widget: self.widget.clone(),
        }
    }
}

type SlotList<W> = SmallVec<[Slot<W>; INLINE_VIEWS]>;

/// Editors and viewers bound to one property, in creation order.
pub(crate) struct Views<E, V> {
    editors: SlotList<E>,
    viewers: SlotList<V>,
    next_id: u32,
}

impl<E, V> Views<E, V> {
    fn new() -> Self {
        Self {
            editors: SmallVec::new(),
            viewers: SmallVec::new(),
            next_id: 0,
        }
    }

    fn allocate_id(&mut self) -> ViewId {
        let id = ViewId::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    fn remove<W>(list: &mut SlotList<W>, id: ViewId, widget: &Rc<RefCell<W>>) -> bool {
        if let Some(idx) = list
            .iter()
            .position(|slot| slot.id == id && Rc::ptr_eq(&slot.widget, widget))
        {
            list.remove(idx);
            true
        } else {
            false
        }
    }
}

/// State shared between all handles to one property.
pub(crate) struct Shared<K: PropertyKind> {
    name: RefCell<String>,
    description: RefCell<String>,
    value: RefCell<K::Value>,
    kind: RefCell<K>,
    enabled: Cell<bool>,
    editability: Cell<Editability>,
    action: RefCell<Option<ActionCallback>>,
    views: RefCell<Views<K::Editor, K::Viewer>>,
    bus: ChangeBus,
}

/// An observable, named value with synchronized editors and viewers.
///
/// Cloning a `Property` clones the handle; all clones share the same value,
/// views and observers.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use understory_property_sheet::TextProperty;
///
/// let title = TextProperty::new("Title", "Draft");
/// let editor = title.create_editor();
/// let viewer = title.create_viewer();
///
/// let changes = Rc::new(Cell::new(0));
/// let counter = changes.clone();
/// title.subscribe(move |_| counter.set(counter.get() + 1));
///
/// // The user types into the editor: the value, the viewer and observers follow.
/// editor.edit(|field| field.replace("Final"));
/// assert_eq!(title.value(), "Final");
/// assert_eq!(viewer.widget().text(), "Final");
/// assert_eq!(changes.get(), 1);
///
/// // Programmatic changes reach the editor too.
/// title.set_value("Published".into());
/// assert_eq!(editor.widget().text(), "Published");
/// ```
pub struct Property<K: PropertyKind> {
    shared: Rc<Shared<K>>,
}

/// A non-owning reference to a [`Property`].
///
/// Observers that need to look at their property should capture one of these
/// rather than a `Property`, which would keep the property alive through its
/// own bus.
pub struct WeakProperty<K: PropertyKind> {
    shared: Weak<Shared<K>>,
}

impl<K: PropertyKind> Property<K> {
    /// Creates a property from a kind and an initial value.
    ///
    /// The value is normalized by the kind before it is stored. No event is
    /// fired since nobody can be subscribed yet.
    #[must_use]
    pub fn with_kind(name: impl Into<String>, mut kind: K, value: K::Value) -> Self {
        let value = kind.normalize(value);
        Self {
            shared: Rc::new(Shared {
                name: RefCell::new(name.into()),
                description: RefCell::new(String::new()),
                value: RefCell::new(value),
                kind: RefCell::new(kind),
                enabled: Cell::new(true),
                editability: Cell::new(Editability::Edit),
                action: RefCell::new(None),
                views: RefCell::new(Views::new()),
                bus: ChangeBus::new(),
            }),
        }
    }

    pub(crate) fn from_shared(shared: Rc<Shared<K>>) -> Self {
        Self { shared }
    }

    /// Starts a freshly created property disabled, without notifying.
    pub(crate) fn start_disabled(self) -> Self {
        self.shared.enabled.set(false);
        self
    }

    /// Sets the description of a freshly created property, without
    /// notifying.
    pub(crate) fn start_described(self, description: String) -> Self {
        *self.shared.description.borrow_mut() = description;
        self
    }

    /// Returns a weak reference to this property.
    #[must_use]
    pub fn downgrade(&self) -> WeakProperty<K> {
        WeakProperty {
            shared: Rc::downgrade(&self.shared),
        }
    }

    /// Returns `true` if both handles refer to the same property.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }

    // =========================================================================
    // Metadata
    // =========================================================================

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> String {
        self.shared.name.borrow().clone()
    }

    /// Sets the display name and notifies observers.
    pub fn set_name(&self, name: impl Into<String>) {
        *self.shared.name.borrow_mut() = name.into();
        self.shared.bus.notify_all(ChangeKind::Name);
    }

    /// Returns the description, typically shown as a tooltip.
    #[must_use]
    pub fn description(&self) -> String {
        self.shared.description.borrow().clone()
    }

    /// Sets the description and notifies observers.
    pub fn set_description(&self, description: impl Into<String>) {
        *self.shared.description.borrow_mut() = description.into();
        self.shared.bus.notify_all(ChangeKind::Description);
    }

    // =========================================================================
    // Value
    // =========================================================================

    /// Returns a clone of the current value.
    #[must_use]
    pub fn value(&self) -> K::Value {
        self.shared.value.borrow().clone()
    }

    /// Calls `f` with a reference to the current value.
    pub fn with_value<R>(&self, f: impl FnOnce(&K::Value) -> R) -> R {
        f(&self.shared.value.borrow())
    }

    /// Returns the current value rendered as text.
    #[must_use]
    pub fn value_text(&self) -> String {
        let kind = self.shared.kind.borrow();
        kind.describe(&self.shared.value.borrow())
    }

    /// Stores a new value, pushes it into every view, then notifies observers.
    ///
    /// The value is normalized first, so a counter clamps and a choice makes
    /// sure the value is one of its candidates.
    pub fn set_value(&self, value: K::Value) {
        let value = self.shared.kind.borrow_mut().normalize(value);
        *self.shared.value.borrow_mut() = value;
        self.broadcast_to_editors();
        self.broadcast_to_viewers();
        self.shared.bus.notify_all(ChangeKind::Value);
    }

    // =========================================================================
    // Enabled state and editability
    // =========================================================================

    /// Returns `true` if the user may interact with the editors.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.shared.enabled.get()
    }

    /// Enables or disables the editors and notifies observers.
    ///
    /// Viewers are not affected.
    pub fn set_enabled(&self, enabled: bool) {
        self.shared.enabled.set(enabled);
        self.push_view_state();
        self.shared.bus.notify_all(ChangeKind::Enabled);
    }

    /// Returns the current editability mode.
    #[must_use]
    pub fn editability(&self) -> Editability {
        self.shared.editability.get()
    }

    /// Switches between editing in place and firing an action, then notifies
    /// observers.
    pub fn set_editability(&self, editability: Editability) {
        self.shared.editability.set(editability);
        self.push_view_state();
        self.shared.bus.notify_all(ChangeKind::Editability);
    }

    /// Returns the state currently pushed into editors.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        ViewState::for_property(self.is_enabled(), self.editability())
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Sets the action fired in [`Editability::Action`] mode and notifies
    /// observers.
    pub fn set_action<F>(&self, action: F)
    where
        F: Fn(&ActionEvent) + 'static,
    {
        *self.shared.action.borrow_mut() = Some(Rc::new(action));
        self.shared.bus.notify_all(ChangeKind::Action);
    }

    /// Removes the action and notifies observers.
    pub fn clear_action(&self) {
        *self.shared.action.borrow_mut() = None;
        self.shared.bus.notify_all(ChangeKind::Action);
    }

    /// Returns `true` if an action is set.
    #[must_use]
    pub fn has_action(&self) -> bool {
        self.shared.action.borrow().is_some()
    }

    /// Fires the action once.
    ///
    /// Returns `false` if no action is set. The value is never touched.
    pub fn trigger_action(&self) -> bool {
        let action = self.shared.action.borrow().clone();
        match action {
            Some(action) => {
                let event = ActionEvent { name: self.name() };
                log::debug!("firing action of {:?}", event.name);
                action(&event);
                true
            }
            None => {
                log::debug!("{:?} has no action to fire", self.shared.name.borrow());
                false
            }
        }
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Creates a new editor, pushes the current value and state into it, and
    /// registers it.
    ///
    /// Every call creates an independent editor.
    pub fn create_editor(&self) -> Editor<K> {
        let mut widget = {
            let kind = self.shared.kind.borrow();
            let value = self.shared.value.borrow();
            let mut widget = kind.create_editor(&value);
            if let Err(fault) = kind.update_editor(&mut widget, &value) {
                self.report_fault("new editor", fault);
            }
            widget
        };
        widget.set_view_state(self.view_state());

        let widget = Rc::new(RefCell::new(widget));
        let id = {
            let mut views = self.shared.views.borrow_mut();
            let id = views.allocate_id();
            views.editors.push(Slot {
                id,
                widget: widget.clone(),
            });
            id
        };
        Editor::new(id, widget, Rc::downgrade(&self.shared))
    }

    /// Creates a new viewer, pushes the current value into it, and registers
    /// it.
    pub fn create_viewer(&self) -> Viewer<K> {
        let widget = {
            let kind = self.shared.kind.borrow();
            let value = self.shared.value.borrow();
            let mut widget = kind.create_viewer(&value);
            if let Err(fault) = kind.update_viewer(&mut widget, &value) {
                self.report_fault("new viewer", fault);
            }
            widget
        };

        let widget = Rc::new(RefCell::new(widget));
        let id = {
            let mut views = self.shared.views.borrow_mut();
            let id = views.allocate_id();
            views.viewers.push(Slot {
                id,
                widget: widget.clone(),
            });
            id
        };
        Viewer::new(id, widget)
    }

    /// Unregisters an editor.
    ///
    /// The editor stops receiving values and further interaction with it is
    /// reported as [`Interaction::Detached`](crate::Interaction::Detached).
    /// Returns `false` if it was not registered with this property.
    pub fn remove_editor(&self, editor: &Editor<K>) -> bool {
        let mut views = self.shared.views.borrow_mut();
        Views::<K::Editor, K::Viewer>::remove(&mut views.editors, editor.id(), editor.widget_rc())
    }

    /// Unregisters a viewer.
    ///
    /// Returns `false` if it was not registered with this property.
    pub fn remove_viewer(&self, viewer: &Viewer<K>) -> bool {
        let mut views = self.shared.views.borrow_mut();
        Views::<K::Editor, K::Viewer>::remove(&mut views.viewers, viewer.id(), viewer.widget_rc())
    }

    /// Returns the number of registered editors.
    #[must_use]
    pub fn editor_count(&self) -> usize {
        self.shared.views.borrow().editors.len()
    }

    /// Returns the number of registered viewers.
    #[must_use]
    pub fn viewer_count(&self) -> usize {
        self.shared.views.borrow().viewers.len()
    }

    /// Pushes the current value and view state into every registered editor.
    ///
    /// Applying it twice with the same value leaves the editors untouched the
    /// second time.
    pub fn broadcast_to_editors(&self) {
        let editors = self.editor_slots();
        if editors.is_empty() {
            return;
        }
        let value = self.value();
        let state = self.view_state();
        let kind = self.shared.kind.borrow();
        log::trace!(
            "pushing value of {:?} into {} editor(s)",
            self.shared.name.borrow(),
            editors.len()
        );
        for slot in editors {
            let Ok(mut editor) = slot.widget.try_borrow_mut() else {
                self.report_fault_for(slot.id, ViewFault::Busy);
                continue;
            };
            if let Err(fault) = kind.update_editor(&mut editor, &value) {
                self.report_fault_for(slot.id, fault);
            }
            editor.set_view_state(state);
        }
    }

    /// Pushes the current value into every registered viewer.
    pub fn broadcast_to_viewers(&self) {
        let viewers = self.viewer_slots();
        if viewers.is_empty() {
            return;
        }
        let value = self.value();
        let kind = self.shared.kind.borrow();
        log::trace!(
            "pushing value of {:?} into {} viewer(s)",
            self.shared.name.borrow(),
            viewers.len()
        );
        for slot in viewers {
            let Ok(mut viewer) = slot.widget.try_borrow_mut() else {
                self.report_fault_for(slot.id, ViewFault::Busy);
                continue;
            };
            if let Err(fault) = kind.update_viewer(&mut viewer, &value) {
                self.report_fault_for(slot.id, fault);
            }
        }
    }

    fn push_view_state(&self) {
        let state = self.view_state();
        for slot in self.editor_slots() {
            match slot.widget.try_borrow_mut() {
                Ok(mut editor) => editor.set_view_state(state),
                Err(_) => self.report_fault_for(slot.id, ViewFault::Busy),
            }
        }
    }

    fn editor_slots(&self) -> SlotList<K::Editor> {
        self.shared.views.borrow().editors.clone()
    }

    fn viewer_slots(&self) -> SlotList<K::Viewer> {
        self.shared.views.borrow().viewers.clone()
    }

    pub(crate) fn is_registered_editor(&self, id: ViewId, widget: &Rc<RefCell<K::Editor>>) -> bool {
        self.shared
            .views
            .borrow()
            .editors
            .iter()
            .any(|slot| slot.id == id && Rc::ptr_eq(&slot.widget, widget))
    }

    fn report_fault_for(&self, id: ViewId, fault: ViewFault) {
        log::warn!(
            "skipping {id} of {:?}: {fault}",
            self.shared.name.borrow()
        );
    }

    fn report_fault(&self, what: &str, fault: ViewFault) {
        log::warn!(
            "{what} of {:?} did not accept the current value: {fault}",
            self.shared.name.borrow()
        );
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Subscribes an observer to changes of this property.
    pub fn subscribe<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&ChangeEvent) + 'static,
    {
        self.shared.bus.subscribe(observer)
    }

    /// Unsubscribes an observer. Returns `true` if it was subscribed.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.shared.bus.unsubscribe(id)
    }

    /// Returns the number of subscribed observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.shared.bus.len()
    }

    /// Returns the number of change events delivered so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.shared.bus.revision()
    }

    // =========================================================================
    // Kind access
    // =========================================================================

    /// Calls `f` with the kind-specific configuration.
    pub fn with_kind_ref<R>(&self, f: impl FnOnce(&K) -> R) -> R {
        f(&self.shared.kind.borrow())
    }

    /// Mutates the kind-specific configuration.
    ///
    /// Callers decide what to re-push afterwards.
    pub(crate) fn update_kind<R>(&self, f: impl FnOnce(&mut K) -> R) -> R {
        f(&mut self.shared.kind.borrow_mut())
    }

    /// Applies several fields at once, then pushes and notifies once.
    pub(crate) fn replace_all(
        &self,
        name: String,
        description: String,
        value: K::Value,
        enabled: bool,
        editability: Editability,
    ) {
        let value = self.shared.kind.borrow_mut().normalize(value);
        *self.shared.name.borrow_mut() = name;
        *self.shared.description.borrow_mut() = description;
        *self.shared.value.borrow_mut() = value;
        self.shared.enabled.set(enabled);
        self.shared.editability.set(editability);
        self.broadcast_to_editors();
        self.broadcast_to_viewers();
        self.shared.bus.notify_all(ChangeKind::Restored);
    }
}

impl<K: PropertyKind> Clone for Property<K> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<K: PropertyKind> fmt::Debug for Property<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &*self.shared.name.borrow())
            .field("value", &self.value_text())
            .field("enabled", &self.is_enabled())
            .field("editability", &self.editability())
            .field("editors", &self.editor_count())
            .field("viewers", &self.viewer_count())
            .field("revision", &self.revision())
            .finish_non_exhaustive()
    }
}

impl<K: PropertyKind> WeakProperty<K> {
    /// Returns the property if it is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Property<K>> {
        self.shared.upgrade().map(|shared| Property { shared })
    }
}

impl<K: PropertyKind> Clone for WeakProperty<K> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<K: PropertyKind> fmt::Debug for WeakProperty<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakProperty")
            .field("alive", &(self.shared.strong_count() > 0))
            .finish_non_exhaustive()
    }
}

