//! Template error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or querying a template store
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("No template for trigger key '{key}'")]
    NotFound { key: String },

    #[error("Duplicate trigger key '{key}'")]
    DuplicateKey { key: String },

    #[error("Failed to load templates from {path}: {message}")]
    Source { path: PathBuf, message: String },
}

impl TemplateError {
    /// Check if this is a lookup miss (callers usually treat it as a no-op)
    pub fn is_not_found(&self) -> bool {
        matches!(self, TemplateError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = TemplateError::NotFound { key: "sfw".to_string() };
        assert!(err.to_string().contains("'sfw'"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_source_message() {
        let err = TemplateError::Source {
            path: PathBuf::from("/tmp/templates.yml"),
            message: "bad indentation".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("/tmp/templates.yml"));
        assert!(msg.contains("bad indentation"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_duplicate_is_not_a_miss() {
        let err = TemplateError::DuplicateKey { key: "be".to_string() };
        assert!(!err.is_not_found());
    }
}
