//! Template expansion
//!
//! Turns a template body plus the caret column into the lines to insert and
//! the caret position to restore afterwards:
//!
//! 1. every tab becomes one indentation unit
//! 2. every line after the first gets a margin matching the caret column,
//!    except blank lines which stay empty
//! 3. the first placeholder in the normalized, un-indented body fixes the cursor
//!    (no placeholder: end of the last line)
//! 4. the first placeholder is removed from the indented line at that row

use tracing::debug;

use crate::error::TemplateError;
use crate::store::TemplateStore;
use crate::template::{Cursor, ExpansionResult, Template};

/// Default indentation unit substituted for each tab
pub const DEFAULT_INDENT_UNIT: &str = "    ";

/// Default caret placeholder marker
pub const DEFAULT_PLACEHOLDER: char = '|';

/// Options controlling expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpanderOptions {
    /// String substituted for each tab character
    pub indent_unit: String,
    /// Marker for the caret rest position
    pub placeholder: char,
}

impl Default for ExpanderOptions {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

impl ExpanderOptions {
    /// Options with an indentation unit of `width` spaces
    pub fn with_indent_width(width: usize) -> Self {
        Self {
            indent_unit: " ".repeat(width),
            ..Default::default()
        }
    }
}

/// Computes rendered lines and the target cursor for a template
#[derive(Debug, Clone, Default)]
pub struct TemplateExpander {
    options: ExpanderOptions,
}

impl TemplateExpander {
    pub fn new(options: ExpanderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExpanderOptions {
        &self.options
    }

    /// Expand `template` for a caret at 1-based `caret_column`
    pub fn expand(&self, template: &Template, caret_column: usize) -> ExpansionResult {
        debug!(key = %template.key, %caret_column, "TemplateExpander::expand: called");

        let raw: Vec<String> = template
            .lines()
            .map(|line| normalize_tabs(line, &self.options.indent_unit))
            .collect();

        let margin = " ".repeat(caret_column.saturating_sub(1));
        let mut lines: Vec<String> = raw
            .iter()
            .enumerate()
            .map(|(index, line)| {
                if index == 0 || line.is_empty() {
                    line.clone()
                } else {
                    format!("{margin}{line}")
                }
            })
            .collect();

        // Row comes from the un-indented lines; removal happens on the indented
        // line at the same index.
        let cursor = locate_placeholder(&raw, self.options.placeholder);
        if let Some(line) = lines.get_mut(cursor.row) {
            remove_first(line, self.options.placeholder);
        } else {
            debug!(row = cursor.row, "TemplateExpander::expand: cursor row out of range, skipping removal");
        }

        debug!(?cursor, line_count = lines.len(), "TemplateExpander::expand: done");
        ExpansionResult { lines, cursor }
    }

    /// Look up `key` and expand it; a miss returns `NotFound` without expanding
    pub fn expand_key(
        &self,
        store: &TemplateStore,
        key: &str,
        caret_column: usize,
    ) -> Result<ExpansionResult, TemplateError> {
        let template = store.lookup_exact(key)?;
        Ok(self.expand(template, caret_column))
    }
}

/// Replace every tab in `line` with `unit`
pub fn normalize_tabs(line: &str, unit: &str) -> String {
    line.replace('\t', unit)
}

/// Position of the first `marker` across `lines`
///
/// Falls back to the end of the last line when no line holds the marker.
/// Columns count characters, not bytes.
pub fn locate_placeholder<S: AsRef<str>>(lines: &[S], marker: char) -> Cursor {
    for (row, line) in lines.iter().enumerate() {
        if let Some(column) = line.as_ref().chars().position(|c| c == marker) {
            return Cursor::new(row, column);
        }
    }

    match lines.last() {
        Some(last) => Cursor::new(lines.len() - 1, last.as_ref().chars().count()),
        None => Cursor::default(),
    }
}

fn remove_first(line: &mut String, marker: char) {
    if let Some(index) = line.find(marker) {
        line.remove(index);
    }
}
