//! Filter evaluation against stories.
//!
//! The application normally turns a [`StoryFilter`] into a database query.
//! [`StoryFilterEvaluator`] applies the same semantics to stories held in
//! memory:
//!
//! - `author` matches the story author exactly, ignoring case.
//! - every requested tag must be on the story, ignoring case.
//! - `completed` must equal the story's completion state when set.
//! - free text matches when any term appears in the title or description.
//!
//! # Example
//!
//! ```
//! use btell_filter::filter::{prepare_stories_query, StoryFilterEvaluator};
//!
//! let filter = prepare_stories_query(Some("tag:fantasy")).unwrap();
//! let evaluator = StoryFilterEvaluator::new(&filter).unwrap();
//! let stories: Vec<btell_filter::Story> = vec![];
//! assert!(evaluator.filter_stories(&stories).is_empty());
//! ```

use super::error::{FilterError, FilterResult};
use super::query::StoryFilter;
use crate::story::Story;

/// Evaluates a valid filter against stories.
pub struct StoryFilterEvaluator<'a> {
    filter: &'a StoryFilter,
    /// Free text terms, lowercased once up front.
    terms: Vec<String>,
}

impl<'a> StoryFilterEvaluator<'a> {
    /// Creates an evaluator for the filter.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidFilter` if the filter carries a build
    /// error. Such a filter is only partially built and must not select
    /// anything.
    pub fn new(filter: &'a StoryFilter) -> FilterResult<Self> {
        if let Some(error) = &filter.error {
            return Err(FilterError::InvalidFilter(error.clone()));
        }

        Ok(Self {
            filter,
            terms: filter.freeform.iter().map(|t| t.to_lowercase()).collect(),
        })
    }

    /// Returns true if the story satisfies every part of the filter.
    pub fn matches(&self, story: &Story) -> bool {
        self.matches_author(story)
            && self.matches_tags(story)
            && self.matches_completed(story)
            && self.matches_freeform(story)
    }

    /// Returns the matching stories, ordered by the filter's sort key.
    pub fn filter_stories<'s>(&self, stories: &'s [Story]) -> Vec<&'s Story> {
        let mut matched: Vec<&Story> = stories.iter().filter(|s| self.matches(s)).collect();
        self.filter.sort_key.sort(&mut matched);
        tracing::debug!(
            total = stories.len(),
            matched = matched.len(),
            sort = %self.filter.sort_key,
            "filtered stories"
        );
        matched
    }

    fn matches_author(&self, story: &Story) -> bool {
        match &self.filter.author {
            Some(author) => story.author.to_lowercase() == author.to_lowercase(),
            None => true,
        }
    }

    fn matches_tags(&self, story: &Story) -> bool {
        self.filter.tags.iter().all(|tag| story.has_tag(tag))
    }

    fn matches_completed(&self, story: &Story) -> bool {
        match self.filter.completed {
            Some(completed) => story.completed == completed,
            None => true,
        }
    }

    fn matches_freeform(&self, story: &Story) -> bool {
        if self.terms.is_empty() {
            return true;
        }

        let title = story.title.to_lowercase();
        let description = story.description.to_lowercase();
        self.terms
            .iter()
            .any(|term| title.contains(term.as_str()) || description.contains(term.as_str()))
    }
}
