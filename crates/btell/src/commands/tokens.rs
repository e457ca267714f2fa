//! Tokens command implementation.
//!
//! Shows how a filter string is split into tokens.

use btell_filter::filter::tokenize;

use super::{CommandContext, Result};
use crate::output::{format_tokens_json, format_tokens_table};

/// Executes the tokens command.
///
/// # Errors
///
/// Returns an error if the filter has an unterminated quote.
pub fn execute(ctx: &CommandContext, filter: &str) -> Result<()> {
    let tokens = tokenize(filter)?;

    if ctx.json_output {
        println!("{}", format_tokens_json(&tokens)?);
    } else if !ctx.quiet {
        print!("{}", format_tokens_table(&tokens, ctx.use_colors));
    }

    Ok(())
}
