//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the btell CLI.

use std::path::PathBuf;

use btell_filter::SortKey;
use clap::{Parser, Subcommand, ValueEnum};

/// btell - search and filter btell stories
#[derive(Parser, Debug)]
#[command(name = "btell")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the tokens a filter string splits into
    #[command(alias = "t")]
    Tokens {
        /// Filter string (e.g. 'author:someone "exact phrase"')
        filter: String,
    },

    /// Parse a filter string and show the resulting filter
    #[command(alias = "p")]
    Parse {
        /// Filter string; omit for the match-everything filter
        filter: Option<String>,
    },

    /// List stories matching a filter
    #[command(alias = "l")]
    List {
        /// Filter string (e.g. "author:someone is:completed tag:fantasy")
        #[arg(short, long)]
        filter: Option<String>,

        /// JSON file holding an array of stories (default: from config)
        #[arg(short, long, env = "BTELL_STORIES")]
        stories: Option<PathBuf>,

        /// Sort key, e.g. "-last_update", "title", "-likes"
        #[arg(long, allow_hyphen_values = true)]
        sort: Option<SortKey>,

        /// Limit results (default: 50)
        #[arg(long)]
        limit: Option<u32>,

        /// Show all matching stories (no limit)
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Show config file path
    Path,
}

/// Shells supported for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use btell_filter::SortField;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_with_descending_sort() {
        let cli = Cli::try_parse_from([
            "btell",
            "list",
            "--filter",
            "tag:sea",
            "--sort",
            "-likes",
            "--limit",
            "5",
        ])
        .unwrap();

        match cli.command {
            Commands::List {
                filter,
                sort,
                limit,
                all,
                ..
            } => {
                assert_eq!(filter.as_deref(), Some("tag:sea"));
                assert_eq!(sort, Some(SortKey::descending(SortField::Likes)));
                assert_eq!(limit, Some(5));
                assert!(!all);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_sort() {
        assert!(Cli::try_parse_from(["btell", "list", "--sort", "rating"]).is_err());
    }

    #[test]
    fn test_parse_without_filter() {
        let cli = Cli::try_parse_from(["btell", "--json", "parse"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Parse { filter: None }));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["btell", "-q", "-v", "parse"]).is_err());
    }
}
