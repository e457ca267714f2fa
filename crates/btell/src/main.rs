use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands, ConfigCommands};
use commands::config::load_config;
use commands::list::ListOptions;
use commands::{CommandContext, CommandError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let hint = e.hint();
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                        "hint": hint,
                    }
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&error_json).unwrap_or_else(|_| e.to_string())
                );
            } else {
                eprintln!("Error: {e}");
                if let Some(hint) = hint {
                    eprintln!("{hint}");
                }
            }
            error_exit_code(&e)
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `--verbose` forces debug output; otherwise `RUST_LOG` is honoured, falling
/// back to warnings (errors only with `--quiet`).
fn init_tracing(cli: &Cli) {
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        let default = if cli.quiet { "error" } else { "warn" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> commands::Result<()> {
    // Completions and config path must work even with a broken config file.
    match &cli.command {
        Commands::Completions { shell } => {
            return commands::completions::execute(shell, &mut io::stdout()).map_err(Into::into);
        }
        Commands::Config {
            command: Some(ConfigCommands::Path),
        } => {
            let ctx = CommandContext::new(cli, Default::default());
            return commands::config::execute_path(&ctx);
        }
        _ => {}
    }

    let config = load_config()?;
    let ctx = CommandContext::new(cli, config);

    match &cli.command {
        Commands::Tokens { filter } => commands::tokens::execute(&ctx, filter),
        Commands::Parse { filter } => commands::parse::execute(&ctx, filter.as_deref()),
        Commands::List {
            filter,
            stories,
            sort,
            limit,
            all,
        } => {
            let opts = ListOptions {
                filter: filter.clone(),
                stories: stories.clone(),
                sort: *sort,
                limit: *limit,
                all: *all,
            };
            commands::list::execute(&ctx, &opts)
        }
        Commands::Config { command } => match command {
            Some(ConfigCommands::Path) => commands::config::execute_path(&ctx),
            Some(ConfigCommands::Show) | None => commands::config::execute_show(&ctx),
        },
        Commands::Completions { .. } => Ok(()),
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Filter(_) => "FILTER_ERROR",
        CommandError::Stories { .. } => "STORIES_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Filter(_) => ExitCode::from(1),
        CommandError::Json(_) => ExitCode::from(1),
        CommandError::Stories { .. } => ExitCode::from(3),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Config(_) => ExitCode::from(5),
    }
}
