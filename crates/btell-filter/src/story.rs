//! Story records that filters are evaluated against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single story as seen by the filter evaluator.
///
/// This carries only the attributes filters and sort keys look at; chapters,
/// comments and cover images stay with the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Story ID.
    pub id: u64,

    /// Story title.
    pub title: String,

    /// Username of the author.
    pub author: String,

    /// Short description shown in listings.
    #[serde(default)]
    pub description: String,

    /// Tag names attached to the story.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Whether the author has marked the story as finished.
    #[serde(default)]
    pub completed: bool,

    /// Publication time. `None` for drafts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,

    /// Time of the last update.
    pub last_update: DateTime<Utc>,

    /// Number of likes.
    #[serde(default)]
    pub likes: u32,
}

impl Story {
    /// Returns true if the story is published, false if it is a draft.
    pub fn is_published(&self) -> bool {
        self.published.is_some()
    }

    /// Returns true if the story carries the tag (case-insensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag_lower = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag_lower)
    }
}
