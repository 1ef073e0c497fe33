// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Property Sheet: observable typed properties with synchronized
//! editors and viewers.
//!
//! A property sheet shows a list of named values, each through an editor (a
//! widget the user can change) or a viewer (a read-only rendering). This crate
//! provides the model behind such a sheet. Widgets are headless models that a
//! host toolkit renders; nothing here draws.
//!
//! ## Core Concepts
//!
//! ### Properties
//!
//! A [`Property<K>`] holds a value of type `K::Value` together with a name, a
//! description, an enabled flag and an [`Editability`] mode. The
//! [`PropertyKind`] `K` decides the widget models and how values move between
//! them and the property. Ready-made kinds:
//!
//! | Property | Value | Editor | Viewer |
//! |----------|-------|--------|--------|
//! | [`TextProperty`] | `String` (optionally length-limited) | [`TextField`] | [`Label`] |
//! | [`LongTextProperty`] | `String` | [`TextArea`] | [`TextArea`] |
//! | [`MessageProperty`] | `String` | [`Label`] | [`Label`] |
//! | [`CounterProperty`] | `i32` within [`CounterBounds`] | [`CounterEditor`] | [`Label`] |
//! | [`TrueFalseProperty`] | `bool` | [`CheckBox`] | [`Label`] |
//! | [`ChoiceProperty<T>`] | `Option<T>` from a [`ValueSet`] | [`ComboBox`] | [`Label`] |
//! | [`TimeProperty`] | [`Time`] | [`TimePanel`] | [`Label`] |
//! | [`ColorProperty`] | [`peniko::Color`] | [`ColorButton`] | [`ColorSwatch`] |
//! | `FileProperty` (`std`) | `Option<PathBuf>` | `FileButton` | [`Label`] |
//!
//! ### Synchronization
//!
//! [`Property::set_value`] normalizes the value, stores it, pushes it into
//! every editor and then every viewer, and finally notifies observers through
//! the property's [`ChangeBus`]. User input reaches the property through
//! [`Editor::edit`], which reads the edited widget back and calls `set_value`,
//! so every other view follows. Widget models skip writes that would not
//! change what they show.
//!
//! ### Time carry
//!
//! The time editor lets minutes and seconds overshoot by one step; the
//! [`carry`] module folds such readings back into a valid [`Time`], carrying
//! into or borrowing from the next field, with zero as a floor.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_property_sheet::{ChangeKind, CounterProperty, CounterEditor, Interaction};
//!
//! let volume = CounterProperty::new("Volume", 0, 5, 10).unwrap();
//! let editor = volume.create_editor();
//! let viewer = volume.create_viewer();
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let sink = log.clone();
//! volume.subscribe(move |event| sink.borrow_mut().push(event.kind));
//!
//! // Out-of-range values are clamped.
//! volume.set_value(15);
//! assert_eq!(volume.value(), 10);
//! assert_eq!(viewer.widget().text(), "10");
//!
//! // User input flows back through the property.
//! assert_eq!(editor.edit(CounterEditor::step_down), Interaction::Committed);
//! assert_eq!(volume.value(), 9);
//! assert_eq!(viewer.widget().text(), "9");
//!
//! // Disabled properties ignore input.
//! volume.set_enabled(false);
//! assert_eq!(editor.edit(CounterEditor::step_down), Interaction::Disabled);
//! assert_eq!(volume.value(), 9);
//!
//! assert_eq!(
//!     *log.borrow(),
//!     [ChangeKind::Value, ChangeKind::Value, ChangeKind::Enabled]
//! );
//! ```
//!
//! ## Threading
//!
//! Properties are `Rc`-based and therefore neither `Send` nor `Sync`. All
//! propagation runs synchronously on the thread that made the change. No
//! internal borrows are held while observers run, so an observer may read or
//! mutate the property it is observing.
//!
//! ## Features
//!
//! - `std` (default): the file property, and `std` support in Peniko.
//! - `libm`: floating point support in Peniko without `std`.
//! - `hashbrown`: hash-based de-duplication for large candidate lists.
//! - `serde`: serialization of [`PropertySnapshot`], [`Editability`] and
//!   [`Time`].
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Enable `libm` when building
//! without `std`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod any;
mod boolean;
mod bus;
pub mod carry;
mod choice;
mod color;
mod counter;
mod error;
#[cfg(feature = "std")]
mod file;
mod handle;
mod id;
mod kind;
mod property;
mod sheet;
mod snapshot;
mod state;
mod text;
mod time;
mod value_set;
mod widget;

pub use any::AnyProperty;
pub use boolean::{CheckBox, TrueFalseKind, TrueFalseProperty};
pub use bus::{ChangeBus, ChangeEvent, ChangeKind, Observer};
pub use choice::{
    Choice, ChoiceBuilder, ChoiceKind, ChoiceProperty, ComboBox, Renderer, capitalize,
};
pub use color::{ColorButton, ColorKind, ColorProperty, ColorSwatch};
pub use counter::{
    CounterBounds, CounterBuilder, CounterEditor, CounterKind, CounterProperty, CounterStyle,
};
pub use error::{Error, TimeOverflow, ViewFault};
#[cfg(feature = "std")]
pub use file::{FileButton, FileFilter, FileKind, FileProperty};
pub use handle::{Editor, Interaction, Viewer};
pub use id::{ObserverId, ViewId};
pub use kind::{EditorWidget, PropertyKind};
pub use property::{ActionCallback, ActionEvent, Property, WeakProperty};
pub use sheet::{Activation, PropertySet, PropertySheet, Row, RowHeader, RowMode};
pub use snapshot::PropertySnapshot;
pub use state::{Editability, ViewState};
pub use text::{
    LongTextKind, LongTextProperty, MessageKind, MessageProperty, TextArea, TextField, TextKind,
    TextProperty,
};
pub use time::{Step, Time, TimeField, TimeKind, TimePanel, TimeProperty};
pub use value_set::{Reselection, ValueSet};
pub use widget::{Label, Spinner};
