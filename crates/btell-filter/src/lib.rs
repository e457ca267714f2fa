//! Story search filters for btell.
//!
//! This crate turns a user-provided filter string such as
//! `author:someone is:completed tag:fantasy "exact phrase"` into a structured
//! [`filter::StoryFilter`], and can evaluate that filter against [`Story`]
//! records held in memory.
//!
//! # Example
//!
//! ```
//! use btell_filter::filter::prepare_stories_query;
//!
//! let filter = prepare_stories_query(Some("author:someone tag:fantasy dragons")).unwrap();
//! assert_eq!(filter.author.as_deref(), Some("someone"));
//! assert_eq!(filter.tags, vec!["fantasy".to_string()]);
//! assert_eq!(filter.freeform, vec!["dragons".to_string()]);
//! assert!(filter.is_valid());
//! ```

pub mod filter;
mod sort;
mod story;

pub use sort::{SortField, SortKey, SortKeyError};
pub use story::Story;
