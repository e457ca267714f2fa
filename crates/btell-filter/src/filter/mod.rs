//! Story filter language.
//!
//! A filter string is a space-separated mix of free text, quoted phrases and
//! `field:value` pairs, for example:
//!
//! ```text
//! author:someone is:completed tag:fantasy "exact phrase" dragons
//! ```
//!
//! # Supported Syntax
//!
//! - `word` - free text term
//! - `"some words"` - a single free text term containing spaces
//! - `author:name` - stories by `name` (the last `author:` wins)
//! - `tag:name`, `tags:name` - stories carrying the tag (repeatable)
//! - `is:completed` - finished stories only
//!
//! Field values can be quoted: `author:"Some Fancypants"`. A colon inside
//! quotes is plain text.
//!
//! Parsing happens in two steps. [`tokenize`] splits the string into
//! [`FilterToken`]s and fails only on an unterminated quote. [`build`] turns
//! the tokens into a [`StoryFilter`]; it never fails, and records the first
//! problem it finds in [`StoryFilter::error`]. [`prepare_stories_query`] runs
//! both.

mod error;
mod evaluator;
mod lexer;
mod parser;
mod query;

pub use error::{BuildError, FilterError, FilterResult};
pub use evaluator::StoryFilterEvaluator;
pub use lexer::{tokenize, FilterToken, Lexer, TokenKind};
pub use parser::{build, prepare_stories_query};
pub use query::{suggest_field, FilterField, StoryFilter};
