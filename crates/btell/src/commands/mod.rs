//! Command implementations for the btell CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod completions;
pub mod config;
pub mod list;
pub mod parse;
pub mod tokens;

use std::path::PathBuf;

use btell_filter::filter::{suggest_field, BuildError, FilterError};

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Filter tokenizing or building error.
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    /// Stories file could not be loaded.
    #[error("could not load stories from {}: {message}", path.display())]
    Stories {
        /// The stories file.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    /// Returns a "did you mean" hint for unknown filter fields.
    pub fn hint(&self) -> Option<String> {
        match self {
            CommandError::Filter(FilterError::InvalidFilter(BuildError::UnknownField {
                field,
            })) => suggest_field(field).map(|s| format!("Did you mean '{s}'?")),
            _ => None,
        }
    }
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Loaded configuration.
    pub config: Config,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and configuration.
    ///
    /// Colors are off when `--no-color` is given, when the config disables
    /// them, or when `NO_COLOR` is set.
    pub fn new(cli: &Cli, config: Config) -> Self {
        let use_colors = !cli.no_color
            && config.output.color.unwrap_or(true)
            && std::env::var_os("NO_COLOR").is_none();

        Self {
            json_output: cli.json,
            use_colors,
            quiet: cli.quiet,
            config,
        }
    }
}
