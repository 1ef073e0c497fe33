// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! File path properties.
//!
//! The editor is a pair of buttons: one would open the host's file dialog, the
//! other clears the selection. The dialog's answer is handed to
//! [`FileButton::choose`].

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use std::path::{Path, PathBuf};

use crate::error::ViewFault;
use crate::kind::{EditorWidget, PropertyKind};
use crate::property::Property;
use crate::state::ViewState;
use crate::widget::Label;

const SELECT_CAPTION: &str = "Select file";
const NO_FILE: &str = "No file selected";
const MAX_NAME_CHARS: usize = 20;
const ELLIPSIS: &str = "...";

/// Accepts files by extension, ignoring ASCII case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileFilter {
    description: String,
    extensions: Vec<String>,
}

impl FileFilter {
    /// Creates a filter for the given extensions (without the leading dot).
    #[must_use]
    pub fn new<I, S>(description: impl Into<String>, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            description: description.into(),
            extensions: extensions
                .into_iter()
                .map(|ext| {
                    let ext: String = ext.into();
                    ext.trim_start_matches('.').to_ascii_lowercase()
                })
                .collect(),
        }
    }

    /// Returns the description shown in a file dialog.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` if `path` has one of the accepted extensions.
    #[must_use]
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|accepted| accepted.eq_ignore_ascii_case(ext))
            })
    }
}

/// The select and clear buttons of a file editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileButton {
    caption: String,
    selection: Option<PathBuf>,
    state: ViewState,
    writes: usize,
}

impl FileButton {
    /// Returns the caption of the select button.
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Returns the selected path.
    #[must_use]
    pub fn selection(&self) -> Option<&Path> {
        self.selection.as_deref()
    }

    /// Simulates the user approving `path` in the file dialog.
    pub fn choose(&mut self, path: impl Into<PathBuf>) {
        self.selection = Some(path.into());
    }

    /// Simulates a click on the clear button.
    pub fn clear(&mut self) {
        self.selection = None;
    }

    /// Number of writes that changed the caption.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl EditorWidget for FileButton {
    fn set_view_state(&mut self, state: ViewState) {
        self.state = state;
    }

    fn view_state(&self) -> ViewState {
        self.state
    }
}

fn caption_for(path: Option<&Path>) -> String {
    let Some(name) = path.and_then(Path::file_name) else {
        return String::from(SELECT_CAPTION);
    };
    let name = name.to_string_lossy();
    if name.chars().count() > MAX_NAME_CHARS {
        let kept: String = name
            .chars()
            .take(MAX_NAME_CHARS - ELLIPSIS.len())
            .collect();
        format!("{SELECT_CAPTION} ({kept}{ELLIPSIS})")
    } else {
        format!("{SELECT_CAPTION} ({name})")
    }
}

fn viewer_text(path: Option<&Path>) -> String {
    path.map_or_else(|| String::from(NO_FILE), |path| format!("{}", path.display()))
}

/// An optional file path, with an optional extension filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileKind {
    filter: Option<FileFilter>,
}

impl FileKind {
    /// Returns the filter, if any.
    #[must_use]
    pub fn filter(&self) -> Option<&FileFilter> {
        self.filter.as_ref()
    }
}

impl PropertyKind for FileKind {
    type Value = Option<PathBuf>;
    type Editor = FileButton;
    type Viewer = Label;

    fn create_editor(&self, value: &Option<PathBuf>) -> FileButton {
        FileButton {
            caption: caption_for(value.as_deref()),
            selection: value.clone(),
            state: ViewState::default(),
            writes: 0,
        }
    }

    fn create_viewer(&self, value: &Option<PathBuf>) -> Label {
        Label::new(viewer_text(value.as_deref()))
    }

    fn update_editor(
        &self,
        editor: &mut FileButton,
        value: &Option<PathBuf>,
    ) -> Result<(), ViewFault> {
        let caption = caption_for(value.as_deref());
        if editor.caption != caption || editor.selection != *value {
            editor.caption = caption;
            editor.selection.clone_from(value);
            editor.writes += 1;
        }
        Ok(())
    }

    fn update_viewer(&self, viewer: &mut Label, value: &Option<PathBuf>) -> Result<(), ViewFault> {
        viewer.show(&viewer_text(value.as_deref()));
        Ok(())
    }

    fn read_editor(&self, editor: &FileButton) -> Option<Option<PathBuf>> {
        match (&editor.selection, &self.filter) {
            (Some(path), Some(filter)) if !filter.accepts(path) => {
                log::debug!(
                    "{} rejected by filter {:?}",
                    path.display(),
                    filter.description
                );
                None
            }
            (selection, _) => Some(selection.clone()),
        }
    }

    fn describe(&self, value: &Option<PathBuf>) -> String {
        viewer_text(value.as_deref())
    }
}

/// A file path property.
pub type FileProperty = Property<FileKind>;

impl Property<FileKind> {
    /// Creates a file property.
    #[must_use]
    pub fn new(name: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::with_kind(name, FileKind::default(), path)
    }

    /// Returns the filter, if any.
    #[must_use]
    pub fn filter(&self) -> Option<FileFilter> {
        self.with_kind_ref(|kind| kind.filter.clone())
    }

    /// Restricts which files the editor accepts.
    ///
    /// The current value is kept even if the filter would reject it.
    pub fn set_filter(&self, filter: Option<FileFilter>) {
        self.update_kind(|kind| kind.filter = filter);
    }
}
