// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handles to the editors and viewers created by a property.

use alloc::rc::{Rc, Weak};
use core::cell::{Ref, RefCell};
use core::fmt;

use crate::id::ViewId;
use crate::kind::PropertyKind;
use crate::property::{Property, Shared};
use crate::state::Editability;

/// Outcome of a user interaction with an editor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// The editor produced a value, which was stored and pushed to all views.
    Committed,
    /// The editor produced nothing usable; it was reset to the stored value.
    Ignored,
    /// The property is in [`Editability::Action`] mode; its action fired and
    /// the value was left alone.
    ActionFired,
    /// The property is disabled; the input was dropped.
    Disabled,
    /// The editor was removed, or its property no longer exists.
    Detached,
}

/// An editor created by [`Property::create_editor`].
///
/// Editors observe their property through a weak reference: they never keep
/// it alive.
pub struct Editor<K: PropertyKind> {
    id: ViewId,
    widget: Rc<RefCell<K::Editor>>,
    owner: Weak<Shared<K>>,
}

impl<K: PropertyKind> Editor<K> {
    pub(crate) fn new(id: ViewId, widget: Rc<RefCell<K::Editor>>, owner: Weak<Shared<K>>) -> Self {
        Self { id, widget, owner }
    }

    /// Returns the ID of this editor within its property.
    #[must_use]
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Borrows the widget model for inspection.
    ///
    /// # Panics
    ///
    /// Panics if the widget is being mutated, which only happens inside the
    /// closure passed to [`Editor::edit`].
    #[must_use]
    pub fn widget(&self) -> Ref<'_, K::Editor> {
        self.widget.borrow()
    }

    pub(crate) fn widget_rc(&self) -> &Rc<RefCell<K::Editor>> {
        &self.widget
    }

    /// Returns the property this editor belongs to, if it still exists.
    #[must_use]
    pub fn property(&self) -> Option<Property<K>> {
        self.owner.upgrade().map(Property::from_shared)
    }

    /// Returns `true` if the property exists and still has this editor
    /// registered.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.property()
            .is_some_and(|property| property.is_registered_editor(self.id, &self.widget))
    }

    /// Simulates a user interaction.
    ///
    /// `input` manipulates the widget the way a user would (typing, clicking
    /// a spinner arrow, picking a color). What happens next depends on the
    /// property:
    ///
    /// - disabled: `input` is not applied,
    /// - [`Editability::Action`]: `input` is not applied and the action fires,
    /// - otherwise the editor is read back into a value and that value is
    ///   stored through [`Property::set_value`].
    pub fn edit(&self, input: impl FnOnce(&mut K::Editor)) -> Interaction {
        let Some(property) = self.property() else {
            log::debug!("{} outlived its property", self.id);
            return Interaction::Detached;
        };
        if !property.is_registered_editor(self.id, &self.widget) {
            log::debug!("{} was removed from {:?}", self.id, property.name());
            return Interaction::Detached;
        }
        if !property.is_enabled() {
            return Interaction::Disabled;
        }
        if property.editability() == Editability::Action {
            property.trigger_action();
            return Interaction::ActionFired;
        }

        {
            let Ok(mut widget) = self.widget.try_borrow_mut() else {
                log::warn!("{} is borrowed; dropping input", self.id);
                return Interaction::Ignored;
            };
            input(&mut widget);
        }

        let value = {
            let widget = self.widget.borrow();
            property.with_kind_ref(|kind| kind.read_editor(&widget))
        };
        match value {
            Some(value) => {
                property.set_value(value);
                Interaction::Committed
            }
            None => {
                property.broadcast_to_editors();
                Interaction::Ignored
            }
        }
    }
}

impl<K: PropertyKind> fmt::Debug for Editor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("id", &self.id)
            .field("attached", &self.is_attached())
            .finish_non_exhaustive()
    }
}

/// A read-only viewer created by [`Property::create_viewer`].
pub struct Viewer<K: PropertyKind> {
    id: ViewId,
    widget: Rc<RefCell<K::Viewer>>,
}

impl<K: PropertyKind> Viewer<K> {
    pub(crate) fn new(id: ViewId, widget: Rc<RefCell<K::Viewer>>) -> Self {
        Self { id, widget }
    }

    /// Returns the ID of this viewer within its property.
    #[must_use]
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Borrows the widget model for inspection.
    #[must_use]
    pub fn widget(&self) -> Ref<'_, K::Viewer> {
        self.widget.borrow()
    }

    pub(crate) fn widget_rc(&self) -> &Rc<RefCell<K::Viewer>> {
        &self.widget
    }
}

impl<K: PropertyKind> fmt::Debug for Viewer<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewer")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
