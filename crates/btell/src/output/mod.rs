//! Output formatting utilities for the btell CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//!
//! - [`filter`] - Token and structured filter output (tokens, parse)
//! - [`stories`] - Story listing output (list)
//! - [`helpers`] - Common formatting utilities (truncation, tags, timestamps)

mod filter;
pub mod helpers;
mod stories;

pub use filter::{format_filter_json, format_filter_table, format_tokens_json, format_tokens_table};
pub use stories::{format_stories_json, format_stories_table};
