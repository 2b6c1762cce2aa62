use std::path::Path;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::debug;

use templex::cli::{Cli, Command, OutputFormat};
use templex::config::Config;
use templex::{InsertTemplate, TemplateExpander, source};

fn parse_level(s: &str) -> tracing::Level {
    match s.to_uppercase().as_str() {
        "TRACE" => tracing::Level::TRACE,
        "DEBUG" => tracing::Level::DEBUG,
        "INFO" => tracing::Level::INFO,
        "WARN" | "WARNING" => tracing::Level::WARN,
        "ERROR" => tracing::Level::ERROR,
        _ => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
            tracing::Level::WARN
        }
    }
}

/// Refuse documents whose extension the insert-template action is not offered for
fn check_document(action: &InsertTemplate<'_>, document: Option<&Path>, expected: &str) -> Result<()> {
    let Some(path) = document else {
        return Ok(());
    };
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !action.offered_for(extension) {
        return Err(eyre::eyre!(
            "Templates are not offered for {} (expected a .{} document)",
            path.display(),
            expected
        ));
    }
    Ok(())
}

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > WARN
    let level = cli_log_level
        .or(config_log_level)
        .map(parse_level)
        .unwrap_or(tracing::Level::WARN);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to install subscriber: {}", e))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;
    debug!(?config, "templex starting");

    let store = source::build_store(&config).context("Failed to build template store")?;
    let expander = TemplateExpander::new(config.expander_options());
    let action = InsertTemplate::from_config(&store, &expander, &config);

    match cli.command {
        Command::List {
            prefix,
            document,
            format,
        } => {
            check_document(&action, document.as_deref(), &config.file_extension)?;
            let items = action.suggestions(&prefix);

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&items)?),
                OutputFormat::Text => {
                    if items.is_empty() {
                        println!("No templates match '{}'", prefix);
                    }
                    for item in items {
                        println!("{:<6} {}", item.name.cyan(), item.description.dimmed());
                    }
                }
            }
        }
        Command::Show { key } => {
            let template = store.lookup_exact(&key)?;
            println!("{}", template.body);
        }
        Command::Expand {
            key,
            column,
            document,
            format,
        } => {
            check_document(&action, document.as_deref(), &config.file_extension)?;
            let result = expander.expand_key(&store, &key, column)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                OutputFormat::Text => {
                    println!("{}", result.text());
                    eprintln!(
                        "{} cursor at row {}, column {}",
                        "→".green(),
                        result.cursor.row,
                        result.cursor.column
                    );
                }
            }
        }
    }

    Ok(())
}
