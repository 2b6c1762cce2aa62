//! Template files
//!
//! A template file is YAML holding either a flat `key: body` mapping or the
//! same mapping nested under `templates:`.
//!
//! ```yaml
//! templates:
//!   sfw: "SELECT *\nFROM |\nWHERE "
//!   be: |-
//!     BEGIN
//!         |
//!     END
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::builtin;
use crate::config::Config;
use crate::error::TemplateError;
use crate::store::TemplateStore;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TemplateFile {
    Sectioned(Sectioned),
    Flat(BTreeMap<String, String>),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Sectioned {
    templates: BTreeMap<String, String>,
}

/// Parse template file content into key/body pairs, ascending by key
pub fn parse(content: &str, path: &Path) -> Result<Vec<(String, String)>, TemplateError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let file: TemplateFile = serde_yaml::from_str(content).map_err(|e| TemplateError::Source {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let templates = match file {
        TemplateFile::Sectioned(s) => s.templates,
        TemplateFile::Flat(map) => map,
    };
    Ok(templates.into_iter().collect())
}

/// Read and parse a template file
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<(String, String)>, TemplateError> {
    let path = path.as_ref();
    debug!(?path, "load_file: called");
    let content = fs::read_to_string(path).map_err(|e| TemplateError::Source {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let pairs = parse(&content, path)?;
    info!(template_count = pairs.len(), "Loaded templates from: {}", path.display());
    Ok(pairs)
}

/// Build the store described by `config`
///
/// Starts from the built-ins (when enabled) and overlays each template file in
/// order; a later file replaces earlier bodies under the same key.
pub fn build_store(config: &Config) -> Result<TemplateStore, TemplateError> {
    let mut builder = if config.include_builtin {
        builtin::builder()
    } else {
        TemplateStore::builder()
    };

    for path in &config.template_files {
        builder.extend_overriding(load_file(path)?);
    }

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_flat() {
        let pairs = parse("s: \"SELECT |\"\nob: \"ORDER BY |\"\n", Path::new("t.yml")).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("ob".to_string(), "ORDER BY |".to_string()),
                ("s".to_string(), "SELECT |".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_sectioned_block_scalar() {
        let content = "templates:\n  be: |-\n    BEGIN\n        |\n    END\n";
        let pairs = parse(content, Path::new("t.yml")).unwrap();
        assert_eq!(pairs, vec![("be".to_string(), "BEGIN\n    |\nEND".to_string())]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("  \n", Path::new("t.yml")).unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_reports_path() {
        let err = parse("- just\n- a list\n", Path::new("bad.yml")).unwrap_err();
        assert!(matches!(&err, TemplateError::Source { path, .. } if path == Path::new("bad.yml")));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_file(temp.path().join("missing.yml")).unwrap_err();
        assert!(matches!(err, TemplateError::Source { .. }));
    }

    #[test]
    fn test_build_store_builtin_only() {
        let store = build_store(&Config::default()).unwrap();
        assert_eq!(store.len(), builtin::store().len());
    }

    #[test]
    fn test_build_store_overlays_files_in_order() {
        let temp = TempDir::new().unwrap();
        let first = write(&temp, "a.yml", "s: \"SELECT TOP 10 |\"\nxx: \"first\"\n");
        let second = write(&temp, "b.yml", "templates:\n  xx: \"second\"\n");

        let config = Config {
            template_files: vec![first, second],
            ..Default::default()
        };
        let store = build_store(&config).unwrap();

        assert_eq!(store.lookup_exact("s").unwrap().body, "SELECT TOP 10 |");
        assert_eq!(store.lookup_exact("xx").unwrap().body, "second");
        assert!(store.lookup_exact("sfw").is_ok());
    }

    #[test]
    fn test_build_store_without_builtin() {
        let temp = TempDir::new().unwrap();
        let file = write(&temp, "only.yml", "mine: \"MINE |\"\n");

        let config = Config {
            include_builtin: false,
            template_files: vec![file],
            ..Default::default()
        };
        let store = build_store(&config).unwrap();

        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["mine"]);
    }
}
