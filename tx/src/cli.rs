//! CLI argument parsing for templex

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tx")]
#[command(author, version, about = "Cursor-aware SQL template expander", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List templates whose trigger key starts with a prefix
    List {
        /// Trigger key prefix (default: all templates)
        #[arg(default_value = "")]
        prefix: String,

        /// Document being edited; refused unless its extension matches `file-extension`
        #[arg(short, long)]
        document: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the raw body of a template
    Show {
        /// Trigger key
        #[arg(required = true)]
        key: String,
    },

    /// Expand a template as if the caret sat at the given column
    Expand {
        /// Trigger key
        #[arg(required = true)]
        key: String,

        /// 1-based caret column on the insertion line
        #[arg(short = 'C', long, default_value = "1")]
        column: usize,

        /// Document being edited; refused unless its extension matches `file-extension`
        #[arg(short, long)]
        document: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
