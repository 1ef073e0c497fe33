// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text properties: single line (optionally limited), multi-line, and static
//! messages.

use alloc::string::String;
use core::num::NonZeroUsize;

use crate::error::{Error, ViewFault};
use crate::kind::{EditorWidget, PropertyKind};
use crate::property::Property;
use crate::state::ViewState;
use crate::widget::Label;

/// Truncates `text` to at most `limit` characters.
fn truncate_chars(text: &mut String, limit: Option<NonZeroUsize>) -> bool {
    let Some(limit) = limit else {
        return false;
    };
    match text.char_indices().nth(limit.get()) {
        Some((byte, _)) => {
            text.truncate(byte);
            true
        }
        None => false,
    }
}

/// Single-line text input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextField {
    text: String,
    max_chars: Option<NonZeroUsize>,
    state: ViewState,
    writes: usize,
}

impl TextField {
    /// Returns the displayed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the character limit, if any.
    #[must_use]
    pub fn max_chars(&self) -> Option<NonZeroUsize> {
        self.max_chars
    }

    /// Simulates the user replacing the whole text.
    ///
    /// Characters beyond the limit are dropped.
    pub fn replace(&mut self, text: &str) {
        let mut text = String::from(text);
        truncate_chars(&mut text, self.max_chars);
        if self.text != text {
            self.text = text;
            self.writes += 1;
        }
    }

    /// Simulates the user typing at the end of the text.
    ///
    /// Characters beyond the limit are dropped.
    pub fn type_str(&mut self, input: &str) {
        let mut text = self.text.clone();
        text.push_str(input);
        self.replace(&text);
    }

    fn show(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
            self.writes += 1;
        }
    }

    /// Number of writes that changed the displayed text.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl EditorWidget for TextField {
    fn set_view_state(&mut self, state: ViewState) {
        self.state = state;
    }

    fn view_state(&self) -> ViewState {
        self.state
    }
}

/// A single line of text, optionally limited to a number of characters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextKind {
    max_chars: Option<NonZeroUsize>,
}

impl TextKind {
    /// Text without a length limit.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self { max_chars: None }
    }

    /// Text limited to `max_chars` characters.
    pub fn limited(max_chars: usize) -> Result<Self, Error> {
        let max_chars = NonZeroUsize::new(max_chars).ok_or(Error::ZeroCharacterLimit)?;
        Ok(Self {
            max_chars: Some(max_chars),
        })
    }

    /// Returns the character limit, if any.
    #[must_use]
    pub const fn max_chars(&self) -> Option<NonZeroUsize> {
        self.max_chars
    }
}

impl PropertyKind for TextKind {
    type Value = String;
    type Editor = TextField;
    type Viewer = Label;

    fn normalize(&mut self, mut value: String) -> String {
        if truncate_chars(&mut value, self.max_chars) {
            log::debug!("truncated text to {:?} characters", self.max_chars);
        }
        value
    }

    fn create_editor(&self, value: &String) -> TextField {
        TextField {
            text: value.clone(),
            max_chars: self.max_chars,
            state: ViewState::default(),
            writes: 0,
        }
    }

    fn create_viewer(&self, value: &String) -> Label {
        Label::new(value.clone())
    }

    fn update_editor(&self, editor: &mut TextField, value: &String) -> Result<(), ViewFault> {
        editor.show(value);
        Ok(())
    }

    fn update_viewer(&self, viewer: &mut Label, value: &String) -> Result<(), ViewFault> {
        viewer.show(value);
        Ok(())
    }

    fn read_editor(&self, editor: &TextField) -> Option<String> {
        Some(editor.text.clone())
    }

    fn describe(&self, value: &String) -> String {
        value.clone()
    }
}

/// A single-line text property.
pub type TextProperty = Property<TextKind>;

impl Property<TextKind> {
    /// Creates an unlimited text property.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_kind(name, TextKind::unlimited(), text.into())
    }

    /// Creates a text property limited to `max_chars` characters.
    ///
    /// A longer initial text is truncated.
    pub fn limited(
        name: impl Into<String>,
        text: impl Into<String>,
        max_chars: usize,
    ) -> Result<Self, Error> {
        Ok(Self::with_kind(name, TextKind::limited(max_chars)?, text.into()))
    }
}

/// Multi-line text with a caret.
///
/// The same model serves as editor and as read-only viewer. A viewer keeps
/// its caret across updates so a reader does not lose their place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextArea {
    text: String,
    caret: usize,
    read_only: bool,
    state: ViewState,
    writes: usize,
}

impl TextArea {
    fn new(text: &str, read_only: bool) -> Self {
        Self {
            text: String::from(text),
            caret: 0,
            read_only,
            state: ViewState::default(),
            writes: 0,
        }
    }

    /// Returns the displayed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the caret position, in characters.
    #[must_use]
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Returns `true` for viewers.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Moves the caret, clamped to the end of the text.
    pub fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.text.chars().count());
    }

    /// Simulates typing at the caret. Ignored on a read-only area.
    pub fn insert(&mut self, input: &str) {
        if self.read_only || input.is_empty() {
            return;
        }
        let byte = self
            .text
            .char_indices()
            .nth(self.caret)
            .map_or(self.text.len(), |(byte, _)| byte);
        self.text.insert_str(byte, input);
        self.caret += input.chars().count();
        self.writes += 1;
    }

    /// Simulates the user replacing the whole text. Ignored on a read-only
    /// area.
    pub fn replace(&mut self, text: &str) {
        if self.read_only {
            return;
        }
        self.show(text);
        self.caret = self.text.chars().count();
    }

    fn show(&mut self, text: &str) {
        if self.text == text {
            return;
        }
        self.text.clear();
        self.text.push_str(text);
        self.caret = self.caret.min(self.text.chars().count());
        self.writes += 1;
    }

    /// Number of writes that changed the displayed text.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl EditorWidget for TextArea {
    fn set_view_state(&mut self, state: ViewState) {
        self.state = state;
    }

    fn view_state(&self) -> ViewState {
        self.state
    }
}

/// Multi-line text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LongTextKind;

impl PropertyKind for LongTextKind {
    type Value = String;
    type Editor = TextArea;
    type Viewer = TextArea;

    fn create_editor(&self, value: &String) -> TextArea {
        TextArea::new(value, false)
    }

    fn create_viewer(&self, value: &String) -> TextArea {
        TextArea::new(value, true)
    }

    fn update_editor(&self, editor: &mut TextArea, value: &String) -> Result<(), ViewFault> {
        editor.show(value);
        Ok(())
    }

    fn update_viewer(&self, viewer: &mut TextArea, value: &String) -> Result<(), ViewFault> {
        viewer.show(value);
        Ok(())
    }

    fn read_editor(&self, editor: &TextArea) -> Option<String> {
        Some(editor.text.clone())
    }

    fn describe(&self, value: &String) -> String {
        value.clone()
    }
}

/// A multi-line text property.
pub type LongTextProperty = Property<LongTextKind>;

impl Property<LongTextKind> {
    /// Creates a multi-line text property.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_kind(name, LongTextKind, text.into())
    }
}

/// Static text shown in both editor and viewer.
///
/// Message properties start disabled: there is nothing to edit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MessageKind;

impl PropertyKind for MessageKind {
    type Value = String;
    type Editor = Label;
    type Viewer = Label;

    fn create_editor(&self, value: &String) -> Label {
        Label::new(value.clone())
    }

    fn create_viewer(&self, value: &String) -> Label {
        Label::new(value.clone())
    }

    fn update_editor(&self, editor: &mut Label, value: &String) -> Result<(), ViewFault> {
        editor.show(value);
        Ok(())
    }

    fn update_viewer(&self, viewer: &mut Label, value: &String) -> Result<(), ViewFault> {
        viewer.show(value);
        Ok(())
    }

    fn read_editor(&self, _: &Label) -> Option<String> {
        None
    }

    fn describe(&self, value: &String) -> String {
        value.clone()
    }
}

/// A static message property.
pub type MessageProperty = Property<MessageKind>;

impl Property<MessageKind> {
    /// Creates a message property. It starts disabled.
    #[must_use]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_kind(name, MessageKind, message.into()).start_disabled()
    }
}
