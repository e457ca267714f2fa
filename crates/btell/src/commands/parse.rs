//! Parse command implementation.
//!
//! Shows the structured filter a filter string produces.

use btell_filter::filter::{prepare_stories_query, FilterError};

use super::{CommandContext, Result};
use crate::output::{format_filter_json, format_filter_table};

/// Executes the parse command.
///
/// The filter is printed even when building it failed, so the partial state
/// is visible; the build error is then returned so the process exits non-zero.
///
/// # Errors
///
/// Returns an error if the filter has an unterminated quote or a build error.
pub fn execute(ctx: &CommandContext, filter: Option<&str>) -> Result<()> {
    let parsed = prepare_stories_query(filter)?;

    if ctx.json_output {
        println!("{}", format_filter_json(&parsed)?);
    } else if !ctx.quiet {
        print!("{}", format_filter_table(&parsed, ctx.use_colors));
    }

    match parsed.error {
        Some(error) => Err(FilterError::InvalidFilter(error).into()),
        None => Ok(()),
    }
}
