//! Configuration for templex

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::expander::{DEFAULT_PLACEHOLDER, ExpanderOptions};

/// Default width of one indentation unit in spaces
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Config file name looked up in the working directory and the user config dir
pub const CONFIG_FILE_NAME: &str = "templex.yml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Spaces substituted for each tab in a template body
    pub indent_width: usize,

    /// Caret placeholder marker
    pub placeholder: char,

    /// Start from the compiled-in templates
    pub include_builtin: bool,

    /// Extra template files, applied in order
    pub template_files: Vec<PathBuf>,

    /// Document extension the insert-template action is offered for
    pub file_extension: String,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            placeholder: DEFAULT_PLACEHOLDER,
            include_builtin: true,
            template_files: Vec::new(),
            file_extension: "sql".to_string(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // An explicit path must load
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let default_paths = [
            Some(PathBuf::from(CONFIG_FILE_NAME)),
            dirs::config_dir().map(|p| p.join("templex").join(CONFIG_FILE_NAME)),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                match Self::load_from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Parse a config file; relative template file paths resolve against its directory
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let mut config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        if let Some(base) = path.parent() {
            for file in &mut config.template_files {
                if file.is_relative() {
                    *file = base.join(&*file);
                }
            }
        }

        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    pub fn expander_options(&self) -> ExpanderOptions {
        ExpanderOptions {
            placeholder: self.placeholder,
            ..ExpanderOptions::with_indent_width(self.indent_width)
        }
    }
}
