// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered collections of properties and the row logic of a property sheet.
//!
//! A [`PropertySet`] is a list of rows, each either a property or a
//! separator. A [`PropertySheet`] adds, per property row, whether the row
//! currently shows the editor or the viewer, and what clicking the row's name
//! does. Layout is left to the host.

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::any::AnyProperty;
use crate::bus::ChangeEvent;
use crate::id::ObserverId;
use crate::state::Editability;

/// One row of a [`PropertySet`].
#[derive(Clone)]
pub enum Row {
    /// A property.
    Property(Rc<dyn AnyProperty>),
    /// A horizontal separator.
    Separator,
}

impl Row {
    /// Returns the property in this row, if any.
    #[must_use]
    pub fn property(&self) -> Option<&Rc<dyn AnyProperty>> {
        match self {
            Self::Property(property) => Some(property),
            Self::Separator => None,
        }
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property(property) => f.debug_tuple("Property").field(&property.name()).finish(),
            Self::Separator => f.write_str("Separator"),
        }
    }
}

/// An ordered list of properties and separators.
#[derive(Clone, Debug, Default)]
pub struct PropertySet {
    rows: Vec<Row>,
}

impl PropertySet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property row.
    pub fn push<P: AnyProperty + 'static>(&mut self, property: P) -> &mut Self {
        self.rows.push(Row::Property(Rc::new(property)));
        self
    }

    /// Appends an already shared property.
    pub fn push_shared(&mut self, property: Rc<dyn AnyProperty>) -> &mut Self {
        self.rows.push(Row::Property(property));
        self
    }

    /// Appends a separator row.
    pub fn push_separator(&mut self) -> &mut Self {
        self.rows.push(Row::Separator);
        self
    }

    /// Returns all rows.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of rows, separators included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the properties, skipping separators.
    pub fn properties(&self) -> impl Iterator<Item = &Rc<dyn AnyProperty>> + '_ {
        self.rows.iter().filter_map(Row::property)
    }

    /// Returns the first property named `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Rc<dyn AnyProperty>> {
        self.properties().find(|property| property.name() == name)
    }
}

/// Whether a row shows its editor or its viewer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowMode {
    /// The editor is shown.
    Edit,
    /// The viewer is shown.
    View,
}

impl RowMode {
    fn from_editing(editing: bool) -> Self {
        if editing { Self::Edit } else { Self::View }
    }
}

/// What clicking a row's name did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Activation {
    /// The row switched to the given mode.
    Toggled(RowMode),
    /// The property's action fired; the row shows its viewer.
    ActionFired,
    /// Nothing: the row is a separator, out of range, disabled, or the sheet
    /// does not allow switching.
    Ignored,
}

/// How a row's name is presented.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowHeader {
    /// A toggle button; clicking it calls [`PropertySheet::activate`].
    Toggle,
    /// A plain label, for disabled properties and fixed sheets.
    Label,
}

type Modes = Rc<RefCell<Vec<Option<RowMode>>>>;

/// Per-row edit/view state over a [`PropertySet`].
///
/// A switchable sheet starts every property row in the requested mode. Clicking
/// a row's name toggles between editor and viewer for properties in
/// [`Editability::Edit`] mode and fires the action for properties in
/// [`Editability::Action`] mode. When a property switches to action mode its
/// row returns to the viewer.
///
/// ```rust
/// use understory_property_sheet::{
///     Activation, CounterProperty, Editability, PropertySet, PropertySheet, RowMode,
/// };
///
/// let count = CounterProperty::new("Count", 0, 1, 10).unwrap();
/// let mut set = PropertySet::new();
/// set.push(count.clone());
///
/// let sheet = PropertySheet::new(set, false, true);
/// assert_eq!(sheet.mode(0), Some(RowMode::View));
/// assert_eq!(sheet.activate(0), Activation::Toggled(RowMode::Edit));
///
/// count.set_editability(Editability::Action);
/// assert_eq!(sheet.mode(0), Some(RowMode::View));
/// ```
pub struct PropertySheet {
    set: PropertySet,
    switchable: bool,
    modes: Modes,
    subscriptions: Vec<(usize, ObserverId)>,
}

impl PropertySheet {
    /// Creates a sheet.
    ///
    /// `editing` selects the initial mode of every row. If `switchable` is
    /// `false`, rows stay in that mode.
    #[must_use]
    pub fn new(set: PropertySet, editing: bool, switchable: bool) -> Self {
        let initial = RowMode::from_editing(editing);
        let modes: Modes = Rc::new(RefCell::new(
            set.rows()
                .iter()
                .map(|row| row.property().map(|_| initial))
                .collect(),
        ));

        let mut subscriptions = Vec::new();
        if switchable {
            for (index, row) in set.rows().iter().enumerate() {
                let Some(property) = row.property() else {
                    continue;
                };
                let weak_property: Weak<dyn AnyProperty> = Rc::downgrade(property);
                let weak_modes = Rc::downgrade(&modes);
                let id = property.observe(Rc::new(move |_: &ChangeEvent| {
                    let (Some(property), Some(modes)) =
                        (weak_property.upgrade(), weak_modes.upgrade())
                    else {
                        return;
                    };
                    if property.editability() == Editability::Action {
                        let mut modes = modes.borrow_mut();
                        if modes[index] == Some(RowMode::Edit) {
                            log::debug!(
                                "{:?} switched to action mode; showing viewer",
                                property.name()
                            );
                            modes[index] = Some(RowMode::View);
                        }
                    }
                }));
                subscriptions.push((index, id));
            }
        }

        Self {
            set,
            switchable,
            modes,
            subscriptions,
        }
    }

    /// Returns the rows.
    #[must_use]
    pub fn set(&self) -> &PropertySet {
        &self.set
    }

    /// Returns `true` if rows can switch between editor and viewer.
    #[must_use]
    pub fn is_switchable(&self) -> bool {
        self.switchable
    }

    /// Returns the mode of a property row, or `None` for separators and
    /// out-of-range rows.
    #[must_use]
    pub fn mode(&self, row: usize) -> Option<RowMode> {
        self.modes.borrow().get(row).copied().flatten()
    }

    /// Returns how the name of a property row is presented.
    #[must_use]
    pub fn header(&self, row: usize) -> Option<RowHeader> {
        let property = self.set.rows().get(row)?.property()?;
        Some(if self.switchable && property.is_enabled() {
            RowHeader::Toggle
        } else {
            RowHeader::Label
        })
    }

    /// Handles a click on a row's name.
    pub fn activate(&self, row: usize) -> Activation {
        if !self.switchable {
            return Activation::Ignored;
        }
        let Some(property) = self.set.rows().get(row).and_then(Row::property) else {
            return Activation::Ignored;
        };
        if !property.is_enabled() {
            return Activation::Ignored;
        }
        match property.editability() {
            Editability::Edit => {
                let mut modes = self.modes.borrow_mut();
                let next = match modes[row] {
                    Some(RowMode::Edit) => RowMode::View,
                    _ => RowMode::Edit,
                };
                modes[row] = Some(next);
                Activation::Toggled(next)
            }
            Editability::Action => {
                self.modes.borrow_mut()[row] = Some(RowMode::View);
                property.trigger_action();
                Activation::ActionFired
            }
        }
    }

    /// Puts every property row in edit or view mode.
    ///
    /// Returns `false`, changing nothing, if the sheet is not switchable.
    pub fn set_editing(&self, editing: bool) -> bool {
        if !self.switchable {
            return false;
        }
        let mode = RowMode::from_editing(editing);
        for slot in self.modes.borrow_mut().iter_mut().flatten() {
            *slot = mode;
        }
        true
    }

    /// Returns the names of the property rows, for a host to lay out.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.set.properties().map(|property| property.name()).collect()
    }
}

impl Drop for PropertySheet {
    fn drop(&mut self) {
        for (index, id) in self.subscriptions.drain(..) {
            if let Some(property) = self.set.rows().get(index).and_then(Row::property) {
                property.unobserve(id);
            }
        }
    }
}

impl fmt::Debug for PropertySheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertySheet")
            .field("set", &self.set)
            .field("switchable", &self.switchable)
            .field("modes", &*self.modes.borrow())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CounterProperty, MessageProperty, TextProperty};
    use core::cell::Cell;

    fn sample() -> (CounterProperty, TextProperty, PropertySet) {
        let count = CounterProperty::new("Count", 0, 1, 10).unwrap();
        let title = TextProperty::new("Title", "Hi");
        let mut set = PropertySet::new();
        set.push(count.clone())
            .push_separator()
            .push(title.clone())
            .push(MessageProperty::new("Note", "Read only"));
        (count, title, set)
    }

    #[test]
    fn set_keeps_order_and_separators() {
        let (_, _, set) = sample();
        assert_eq!(set.len(), 4);
        assert!(set.rows()[1].property().is_none());
        assert_eq!(set.find("Title").map(|p| p.value_text()).as_deref(), Some("Hi"));
    }

    #[test]
    fn toggling_rows() {
        let (_, _, set) = sample();
        let sheet = PropertySheet::new(set, true, true);
        assert_eq!(sheet.mode(0), Some(RowMode::Edit));
        assert_eq!(sheet.mode(1), None);
        assert_eq!(sheet.activate(0), Activation::Toggled(RowMode::View));
        assert_eq!(sheet.activate(0), Activation::Toggled(RowMode::Edit));
        assert_eq!(sheet.activate(1), Activation::Ignored);
        // Messages start disabled.
        assert_eq!(sheet.header(3), Some(RowHeader::Label));
        assert_eq!(sheet.activate(3), Activation::Ignored);
    }

    #[test]
    fn action_rows_fire_and_show_viewer() {
        let (count, _, set) = sample();
        let fired = Rc::new(Cell::new(0));
        let fired_in_action = fired.clone();
        count.set_action(move |event| {
            assert_eq!(event.name, "Count");
            fired_in_action.set(fired_in_action.get() + 1);
        });

        let sheet = PropertySheet::new(set, true, true);
        count.set_editability(Editability::Action);
        assert_eq!(sheet.mode(0), Some(RowMode::View));

        assert_eq!(sheet.activate(0), Activation::ActionFired);
        assert_eq!(fired.get(), 1);
        assert_eq!(count.value(), 1);
    }

    #[test]
    fn fixed_sheets_ignore_switching() {
        let (count, _, set) = sample();
        let sheet = PropertySheet::new(set, true, false);
        assert!(!sheet.set_editing(false));
        assert_eq!(sheet.mode(0), Some(RowMode::Edit));
        assert_eq!(sheet.activate(0), Activation::Ignored);
        assert_eq!(sheet.header(0), Some(RowHeader::Label));
        assert_eq!(count.observer_count(), 0);
    }

    #[test]
    fn dropping_the_sheet_unsubscribes() {
        let (count, title, set) = sample();
        let sheet = PropertySheet::new(set, false, true);
        assert!(sheet.set_editing(true));
        assert_eq!(sheet.mode(2), Some(RowMode::Edit));
        assert_eq!(sheet.names(), ["Count", "Title", "Note"]);
        assert_eq!((count.observer_count(), title.observer_count()), (1, 1));

        drop(sheet);
        assert_eq!((count.observer_count(), title.observer_count()), (0, 0));
    }
}
