//! Templex - cursor-aware template expansion
//!
//! Expands a short trigger word typed at the caret into a multi-line snippet,
//! re-indented to the caret's column, with the caret placed where the snippet's
//! `|` marker was.
//!
//! # Flow
//!
//! ```text
//! word under caret ──► TemplateStore::suggest       (picker)
//! trigger key      ──► TemplateStore::lookup_exact  ──► TemplateExpander::expand
//!                                                        │
//!                          host replaces word, moves caret ◄┘
//! ```
//!
//! # Example
//!
//! ```
//! use templex::{TemplateExpander, builtin};
//!
//! let store = builtin::store();
//! let result = TemplateExpander::default().expand_key(&store, "sfw", 5).unwrap();
//! assert_eq!(result.lines, vec!["SELECT *", "    FROM ", "    WHERE "]);
//! assert_eq!((result.cursor.row, result.cursor.column), (1, 5));
//! ```

pub mod builtin;
pub mod cli;
pub mod config;
mod error;
mod expander;
mod host;
pub mod source;
mod store;
mod template;

pub use error::TemplateError;
pub use expander::{
    DEFAULT_INDENT_UNIT, DEFAULT_PLACEHOLDER, ExpanderOptions, TemplateExpander, locate_placeholder, normalize_tabs,
};
pub use host::{EditorHost, InsertTemplate, PickerItem};
pub use store::{SharedTemplateStore, TemplateStore, TemplateStoreBuilder};
pub use template::{Cursor, ExpansionResult, Template};
