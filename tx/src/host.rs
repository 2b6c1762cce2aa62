//! Editor host integration
//!
//! The host owns the document, the selection and the caret. [`EditorHost`] is
//! the capability surface the insert-template action needs from it.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::TemplateError;
use crate::expander::TemplateExpander;
use crate::store::TemplateStore;
use crate::template::{Cursor, ExpansionResult, Template};

/// Capabilities a host editor exposes to the insert-template action
pub trait EditorHost {
    /// Word immediately under or before the caret
    fn current_word(&self) -> String;

    /// 1-based caret column on the current line
    fn caret_column(&self) -> usize;

    /// Currently selected text (empty when nothing is selected)
    fn current_selection(&self) -> String;

    /// Extension of the active document, without the dot
    fn document_extension(&self) -> Option<String>;

    /// Select the word under the caret so the insertion replaces it
    fn select_current_word(&mut self);

    /// Replace the selection with `text`
    fn insert_text(&mut self, text: &str);

    /// Move the caret to `cursor`, relative to the start of the last insertion
    fn move_caret(&mut self, cursor: Cursor);

    fn cancel_selection(&mut self);
}

/// Entry in the template picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerItem {
    pub name: String,
    pub description: String,
}

impl PickerItem {
    /// Key as the name, single-line preview as the description
    pub fn from_template(template: &Template, indent_unit: &str) -> Self {
        Self {
            name: template.key.clone(),
            description: template.preview(indent_unit),
        }
    }
}

/// The "insert template" editor action
pub struct InsertTemplate<'a> {
    store: &'a TemplateStore,
    expander: &'a TemplateExpander,
    file_extension: String,
}

impl<'a> InsertTemplate<'a> {
    pub fn new(store: &'a TemplateStore, expander: &'a TemplateExpander, file_extension: impl Into<String>) -> Self {
        Self {
            store,
            expander,
            file_extension: file_extension.into(),
        }
    }

    /// Action offered for the document extension named by `config`
    pub fn from_config(store: &'a TemplateStore, expander: &'a TemplateExpander, config: &Config) -> Self {
        Self::new(store, expander, config.file_extension.clone())
    }

    /// Whether documents with `extension` (no dot, any case) get the action
    pub fn offered_for(&self, extension: &str) -> bool {
        extension.eq_ignore_ascii_case(&self.file_extension)
    }

    /// Offered only in matching documents with nothing selected
    pub fn can_execute(&self, host: &dyn EditorHost) -> bool {
        let extension_matches = host
            .document_extension()
            .is_some_and(|ext| self.offered_for(&ext));
        let result = extension_matches && host.current_selection().is_empty();
        debug!(%result, "InsertTemplate::can_execute: called");
        result
    }

    /// Picker entries for templates matching the word under the caret
    pub fn items(&self, host: &dyn EditorHost) -> Vec<PickerItem> {
        self.suggestions(&host.current_word())
    }

    /// Picker entries for templates whose key starts with `prefix`
    pub fn suggestions(&self, prefix: &str) -> Vec<PickerItem> {
        let indent_unit = &self.expander.options().indent_unit;
        self.store
            .suggest(prefix)
            .map(|t| PickerItem::from_template(t, indent_unit))
            .collect()
    }

    /// Replace the word under the caret with the expansion of `key`
    ///
    /// An unknown key returns `NotFound` before the host is touched. Otherwise
    /// the selection is always cleared afterwards.
    pub fn expand(&self, host: &mut dyn EditorHost, key: &str) -> Result<ExpansionResult, TemplateError> {
        let template = self.store.lookup_exact(key)?;

        host.select_current_word();
        let result = self.expander.expand(template, host.caret_column());
        host.insert_text(&result.text());
        host.move_caret(result.cursor);
        host.cancel_selection();

        info!(%key, row = result.cursor.row, column = result.cursor.column, "Inserted template");
        Ok(result)
    }
}
