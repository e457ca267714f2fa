//! Token and structured filter output formatting.

use btell_filter::filter::{FilterToken, StoryFilter, TokenKind};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::quote_list;

/// JSON output structure for the tokens command.
#[derive(Serialize)]
pub struct TokensOutput<'a> {
    pub tokens: Vec<TokenOutput<'a>>,
}

/// JSON output structure for a single token.
#[derive(Serialize)]
pub struct TokenOutput<'a> {
    pub kind: &'static str,
    pub text: &'a str,
}

/// JSON output structure for the parse command.
#[derive(Serialize)]
pub struct FilterOutput<'a> {
    pub valid: bool,
    pub author: Option<&'a str>,
    pub tags: &'a [String],
    pub completed: Option<bool>,
    pub freeform: &'a [String],
    pub sort: String,
    pub error: Option<String>,
}

/// Formats tokens as JSON.
pub fn format_tokens_json(tokens: &[FilterToken]) -> Result<String, serde_json::Error> {
    let output = TokensOutput {
        tokens: tokens
            .iter()
            .map(|t| TokenOutput {
                kind: t.kind().as_str(),
                text: t.text(),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats tokens one per line as `FIELD(name)` / `LITERAL(text)`.
pub fn format_tokens_table(tokens: &[FilterToken], use_colors: bool) -> String {
    if tokens.is_empty() {
        return "No tokens.\n".to_string();
    }

    let mut output = String::new();
    for token in tokens {
        let line = token.to_string();
        if use_colors {
            match token.kind() {
                TokenKind::Field => output.push_str(&line.cyan().to_string()),
                TokenKind::Literal => output.push_str(&line),
            }
        } else {
            output.push_str(&line);
        }
        output.push('\n');
    }
    output
}

/// Formats a structured filter as JSON.
pub fn format_filter_json(filter: &StoryFilter) -> Result<String, serde_json::Error> {
    let output = FilterOutput {
        valid: filter.is_valid(),
        author: filter.author.as_deref(),
        tags: &filter.tags,
        completed: filter.completed,
        freeform: &filter.freeform,
        sort: filter.sort_key.to_string(),
        error: filter.error_message(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a structured filter as an aligned key/value listing.
pub fn format_filter_table(filter: &StoryFilter, use_colors: bool) -> String {
    let mut output = String::new();

    if filter.is_valid() && filter.is_empty() {
        output.push_str("(empty filter, matches every story)\n");
    }

    let dash = || "-".to_string();
    let rows = [
        ("author", filter.author.clone().unwrap_or_else(dash)),
        (
            "tags",
            if filter.tags.is_empty() {
                dash()
            } else {
                filter.tags.join(", ")
            },
        ),
        (
            "completed",
            match filter.completed {
                Some(true) => "yes".to_string(),
                Some(false) => "no".to_string(),
                None => dash(),
            },
        ),
        (
            "freeform",
            if filter.freeform.is_empty() {
                dash()
            } else {
                quote_list(&filter.freeform)
            },
        ),
        ("sort", filter.sort_key.to_string()),
    ];

    for (key, value) in rows {
        let key = format!("{key:<10}");
        if use_colors {
            output.push_str(&format!("{} {}\n", key.dimmed(), value));
        } else {
            output.push_str(&format!("{} {}\n", key, value));
        }
    }

    if let Some(message) = filter.error_message() {
        let key = format!("{:<10}", "error");
        if use_colors {
            output.push_str(&format!("{} {}\n", key.red(), message.red()));
        } else {
            output.push_str(&format!("{} {}\n", key, message));
        }
    }

    output
}
