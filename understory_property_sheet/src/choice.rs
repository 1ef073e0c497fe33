// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-choice properties over a [`ValueSet`].

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{Error, ViewFault};
use crate::kind::{EditorWidget, PropertyKind};
use crate::property::Property;
use crate::state::ViewState;
use crate::value_set::{Reselection, ValueSet};
use crate::widget::Label;

/// Turns a candidate into the text shown for it.
pub type Renderer<T> = Rc<dyn Fn(&T) -> String>;

/// Values that can be offered by a choice property.
pub trait Choice: Clone + PartialEq + fmt::Debug + 'static {}

impl<T: Clone + PartialEq + fmt::Debug + 'static> Choice for T {}

/// Upper-cases the first character and lower-cases the rest.
///
/// Used to label enum variants: `LARGE` and `Large` both become `Large`.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// A drop-down list.
pub struct ComboBox<T> {
    labels: Vec<String>,
    values: Vec<T>,
    selected: Option<usize>,
    allow_clear: bool,
    state: ViewState,
    writes: usize,
}

impl<T: Choice> ComboBox<T> {
    /// Returns the labels of the entries.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the entries.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the index of the highlighted entry.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the label of the highlighted entry.
    #[must_use]
    pub fn selected_label(&self) -> Option<&str> {
        self.selected.map(|idx| self.labels[idx].as_str())
    }

    /// Simulates the user picking the entry at `index`. Out-of-range indices
    /// are ignored.
    pub fn select_index(&mut self, index: usize) {
        if index < self.values.len() && self.selected != Some(index) {
            self.selected = Some(index);
            self.writes += 1;
        }
    }

    /// Simulates the user picking the entry labelled `label`.
    ///
    /// Returns `false` if no entry has that label.
    pub fn select_label(&mut self, label: &str) -> bool {
        match self.labels.iter().position(|l| l == label) {
            Some(index) => {
                self.select_index(index);
                true
            }
            None => false,
        }
    }

    /// Simulates the user clearing the selection. Ignored unless clearing is
    /// allowed.
    pub fn clear(&mut self) {
        if self.allow_clear && self.selected.take().is_some() {
            self.writes += 1;
        }
    }

    /// Number of writes that changed the list or the highlight.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl<T: Choice> EditorWidget for ComboBox<T> {
    fn set_view_state(&mut self, state: ViewState) {
        self.state = state;
    }

    fn view_state(&self) -> ViewState {
        self.state
    }
}

impl<T: Choice> fmt::Debug for ComboBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboBox")
            .field("labels", &self.labels)
            .field("values", &self.values)
            .field("selected", &self.selected)
            .field("allow_clear", &self.allow_clear)
            .field("state", &self.state)
            .field("writes", &self.writes)
            .finish()
    }
}

/// One value picked from a list of candidates, or none.
pub struct ChoiceKind<T> {
    values: ValueSet<T>,
    renderer: Renderer<T>,
    allow_clear: bool,
}

impl<T: Choice> ChoiceKind<T> {
    /// Returns the candidates and the selection.
    #[must_use]
    pub fn values(&self) -> &ValueSet<T> {
        &self.values
    }

    /// Renders one candidate.
    #[must_use]
    pub fn render(&self, value: &T) -> String {
        (self.renderer)(value)
    }

    /// Returns `true` if users may clear the selection.
    #[must_use]
    pub fn allow_clear(&self) -> bool {
        self.allow_clear
    }

    fn labels(&self) -> Vec<String> {
        self.values.items().iter().map(|v| self.render(v)).collect()
    }
}

impl<T: Choice> fmt::Debug for ChoiceKind<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceKind")
            .field("values", &self.values)
            .field("allow_clear", &self.allow_clear)
            .finish_non_exhaustive()
    }
}

impl<T: Choice> PropertyKind for ChoiceKind<T> {
    type Value = Option<T>;
    type Editor = ComboBox<T>;
    type Viewer = Label;

    fn normalize(&mut self, value: Option<T>) -> Option<T> {
        match value {
            Some(value) => {
                if !self.values.contains(&value) {
                    log::debug!("adding {value:?} to the candidates");
                }
                self.values.select(value.clone());
                Some(value)
            }
            None => {
                self.values.clear_selection();
                None
            }
        }
    }

    fn create_editor(&self, value: &Option<T>) -> ComboBox<T> {
        ComboBox {
            labels: self.labels(),
            values: self.values.items().to_vec(),
            selected: value.as_ref().and_then(|v| self.values.position(v)),
            allow_clear: self.allow_clear,
            state: ViewState::default(),
            writes: 0,
        }
    }

    fn create_viewer(&self, value: &Option<T>) -> Label {
        Label::new(self.describe(value))
    }

    fn update_editor(&self, editor: &mut ComboBox<T>, value: &Option<T>) -> Result<(), ViewFault> {
        let labels = self.labels();
        if editor.values != self.values.items() || editor.labels != labels {
            editor.values = self.values.items().to_vec();
            editor.labels = labels;
            editor.writes += 1;
        }
        let selected = value.as_ref().and_then(|v| self.values.position(v));
        if editor.selected != selected {
            editor.selected = selected;
            editor.writes += 1;
        }
        editor.allow_clear = self.allow_clear;
        Ok(())
    }

    fn update_viewer(&self, viewer: &mut Label, value: &Option<T>) -> Result<(), ViewFault> {
        viewer.show(&self.describe(value));
        Ok(())
    }

    fn read_editor(&self, editor: &ComboBox<T>) -> Option<Option<T>> {
        Some(editor.selected.map(|idx| editor.values[idx].clone()))
    }

    fn describe(&self, value: &Option<T>) -> String {
        value.as_ref().map(|v| self.render(v)).unwrap_or_default()
    }
}

/// Configures a [`ChoiceProperty`].
///
/// ```rust
/// use understory_property_sheet::ChoiceProperty;
///
/// let size = ChoiceProperty::builder("Size")
///     .candidates(["S", "M", "L"])
///     .initial("XL")
///     .build()
///     .unwrap();
/// assert_eq!(size.value(), Some("XL"));
/// assert_eq!(size.values(), ["S", "M", "L", "XL"]);
/// ```
pub struct ChoiceBuilder<T> {
    name: String,
    description: String,
    candidates: Vec<T>,
    initial: Option<T>,
    fallback: Option<T>,
    renderer: Option<Renderer<T>>,
    allow_clear: bool,
}

impl<T: Choice> ChoiceBuilder<T> {
    /// Starts a choice with no candidates.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            candidates: Vec::new(),
            initial: None,
            fallback: None,
            renderer: None,
            allow_clear: false,
        }
    }

    /// Adds candidates. Duplicates are dropped when the property is built.
    #[must_use]
    pub fn candidates<I>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.candidates.extend(candidates);
        self
    }

    /// Sets the initial selection. It is appended to the candidates if
    /// missing.
    #[must_use]
    pub fn initial(mut self, value: T) -> Self {
        self.initial = Some(value);
        self
    }

    /// Sets the value selected when there is neither an initial value nor any
    /// candidate.
    #[must_use]
    pub fn fallback(mut self, value: T) -> Self {
        self.fallback = Some(value);
        self
    }

    /// Sets how candidates are labelled. Defaults to their `Debug` output.
    #[must_use]
    pub fn renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        self.renderer = Some(Rc::new(renderer));
        self
    }

    /// Lets users clear the selection from the editor.
    #[must_use]
    pub fn allow_clear(mut self, allow: bool) -> Self {
        self.allow_clear = allow;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds the property.
    ///
    /// Selects the initial value if given, otherwise the first candidate,
    /// otherwise the fallback. Fails with [`Error::EmptyChoices`] if none of
    /// them exists.
    pub fn build(self) -> Result<ChoiceProperty<T>, Error> {
        let mut values = ValueSet::from_candidates(self.candidates);
        let selection = self
            .initial
            .or_else(|| values.items().first().cloned())
            .or(self.fallback)
            .ok_or(Error::EmptyChoices)?;
        values.select(selection.clone());

        let renderer: Renderer<T> = match self.renderer {
            Some(renderer) => renderer,
            None => Rc::new(|value: &T| format!("{value:?}")),
        };
        let kind = ChoiceKind {
            values,
            renderer,
            allow_clear: self.allow_clear,
        };
        Ok(Property::with_kind(self.name, kind, Some(selection)).start_described(self.description))
    }
}

impl<T: Choice> fmt::Debug for ChoiceBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceBuilder")
            .field("name", &self.name)
            .field("candidates", &self.candidates)
            .field("initial", &self.initial)
            .field("fallback", &self.fallback)
            .field("allow_clear", &self.allow_clear)
            .finish_non_exhaustive()
    }
}

/// A property holding one of several candidates, or nothing.
pub type ChoiceProperty<T> = Property<ChoiceKind<T>>;

impl<T: Choice> Property<ChoiceKind<T>> {
    /// Starts configuring a choice.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ChoiceBuilder<T> {
        ChoiceBuilder::new(name)
    }

    /// Creates a choice over `candidates` selecting `initial`, or the first
    /// candidate if `initial` is `None`.
    pub fn new<I>(name: impl Into<String>, candidates: I, initial: Option<T>) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let builder = ChoiceBuilder::new(name).candidates(candidates);
        match initial {
            Some(initial) => builder.initial(initial),
            None => builder,
        }
        .build()
    }

    /// Creates a choice over the variants of an enum, labelled with their
    /// capitalized names.
    ///
    /// ```rust
    /// use understory_property_sheet::ChoiceProperty;
    ///
    /// #[derive(Clone, Copy, Debug, PartialEq)]
    /// enum Quality {
    ///     LOW,
    ///     HIGH,
    /// }
    ///
    /// let quality = ChoiceProperty::from_variants("Quality", [Quality::LOW, Quality::HIGH]).unwrap();
    /// assert_eq!(quality.value_text(), "Low");
    /// ```
    pub fn from_variants<I>(name: impl Into<String>, variants: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        ChoiceBuilder::new(name)
            .candidates(variants)
            .renderer(|value: &T| capitalize(&format!("{value:?}")))
            .build()
    }

    /// Returns the current candidates.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.with_kind_ref(|kind| kind.values.items().to_vec())
    }

    /// Replaces the candidates.
    ///
    /// If the current value is still a candidate it stays selected and the
    /// editors are refreshed; no change event fires. Otherwise the first new
    /// candidate (or nothing, for an empty list) becomes the value through
    /// [`Property::set_value`].
    pub fn set_values<I>(&self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let (outcome, selection) = self.update_kind(|kind| {
            let outcome = kind.values.replace(values);
            (outcome, kind.values.selected().cloned())
        });
        match outcome {
            Reselection::Kept => {
                log::debug!("{:?} keeps its selection", self.name());
                self.broadcast_to_editors();
            }
            Reselection::Reselected | Reselection::Cleared => {
                log::debug!(
                    "{:?} reselects after candidate change: {outcome:?}",
                    self.name()
                );
                self.set_value(selection);
            }
        }
    }

    /// Changes how candidates are labelled and refreshes every view.
    pub fn set_renderer<F>(&self, renderer: F)
    where
        F: Fn(&T) -> String + 'static,
    {
        self.update_kind(|kind| kind.renderer = Rc::new(renderer));
        self.broadcast_to_editors();
        self.broadcast_to_viewers();
    }
}
