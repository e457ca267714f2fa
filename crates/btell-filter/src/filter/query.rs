//! The structured result of parsing a filter string.

use strsim::levenshtein;

use super::error::BuildError;
use crate::sort::SortKey;

/// Maximum Levenshtein distance to consider a field name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Name of the predicate field handled outside the field table.
pub(crate) const PREDICATE_FIELD: &str = "is";

/// The only value `is:` accepts.
pub(crate) const COMPLETED_PREDICATE: &str = "completed";

/// A field a filter can assign through `name:value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    /// `author:` (single-valued, last assignment wins).
    Author,
    /// `tags:` or `tag:` (multi-valued).
    Tags,
}

impl FilterField {
    /// Every field name the filter accepts, predicates included.
    pub const ACCEPTED_NAMES: &'static [&'static str] =
        &["author", "tags", "tag", PREDICATE_FIELD];

    /// Resolves a field name. `tag` and `tags` are synonyms.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "author" => Some(FilterField::Author),
            "tags" | "tag" => Some(FilterField::Tags),
            _ => None,
        }
    }

    /// Returns true if the field accumulates values instead of replacing them.
    pub fn is_multi_valued(self) -> bool {
        matches!(self, FilterField::Tags)
    }
}

/// Finds the accepted field name closest to an unknown one.
///
/// Returns `None` for exact matches and for names too far from any accepted
/// field.
pub fn suggest_field(name: &str) -> Option<&'static str> {
    let name_lower = name.to_lowercase();

    let (best_match, best_distance) = FilterField::ACCEPTED_NAMES
        .iter()
        .map(|candidate| (*candidate, levenshtein(&name_lower, candidate)))
        .min_by_key(|(_, d)| *d)?;

    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}

/// Filter values parsed from a story filter string.
///
/// A default `StoryFilter` matches every story. If [`error`](Self::error) is
/// set the filter is invalid: the other fields only hold what was collected
/// before the problem and must not be used to select stories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryFilter {
    /// Required author, from `author:`.
    pub author: Option<String>,

    /// Required tags, from `tag:` and `tags:`, in order.
    pub tags: Vec<String>,

    /// Required completion state; only `is:completed` sets it.
    pub completed: Option<bool>,

    /// Free text terms and quoted phrases, in order.
    pub freeform: Vec<String>,

    /// Ordering for the results. The parser leaves it at its default.
    pub sort_key: SortKey,

    /// The first problem found while building, if any.
    pub error: Option<BuildError>,
}

impl StoryFilter {
    /// Creates an empty filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no build error was recorded.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the human-readable build error, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Returns true if the filter places no constraint on stories.
    pub fn is_empty(&self) -> bool {
        self.author.is_none()
            && self.tags.is_empty()
            && self.completed.is_none()
            && self.freeform.is_empty()
    }

    /// Applies a field assignment.
    pub(crate) fn assign(&mut self, field: FilterField, value: &str) {
        match field {
            FilterField::Author => self.author = Some(value.to_string()),
            FilterField::Tags => self.tags.push(value.to_string()),
        }
    }
}
