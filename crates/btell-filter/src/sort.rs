//! Sort keys for story listings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::story::Story;

/// Error returned when a sort key string names no known field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort field: {field} (expected one of: last_update, published, title, likes)")]
pub struct SortKeyError {
    /// The unrecognized field name.
    pub field: String,
}

/// A story attribute that listings can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// Time of the last update.
    LastUpdate,
    /// Publication time. Drafts sort last.
    Published,
    /// Title, compared case-insensitively.
    Title,
    /// Number of likes.
    Likes,
}

impl SortField {
    /// Returns the field name used in sort key strings.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::LastUpdate => "last_update",
            SortField::Published => "published",
            SortField::Title => "title",
            SortField::Likes => "likes",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "last_update" => Some(SortField::LastUpdate),
            "published" => Some(SortField::Published),
            "title" => Some(SortField::Title),
            "likes" => Some(SortField::Likes),
            _ => None,
        }
    }
}

/// Ordering applied to filtered stories.
///
/// The string form is the field name, prefixed with `-` for descending order.
/// The default, `-last_update`, lists the most recently updated stories first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    /// The attribute to sort by.
    pub field: SortField,
    /// Whether larger values come first.
    pub descending: bool,
}

impl SortKey {
    /// Creates an ascending sort key.
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            descending: false,
        }
    }

    /// Creates a descending sort key.
    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            descending: true,
        }
    }

    /// Compares two stories under this key.
    pub fn compare(&self, a: &Story, b: &Story) -> Ordering {
        // Drafts go last regardless of direction.
        if self.field == SortField::Published {
            match (a.published, b.published) {
                (Some(_), None) => return Ordering::Less,
                (None, Some(_)) => return Ordering::Greater,
                _ => {}
            }
        }

        let ordering = match self.field {
            SortField::LastUpdate => a.last_update.cmp(&b.last_update),
            SortField::Published => a.published.cmp(&b.published),
            SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortField::Likes => a.likes.cmp(&b.likes),
        };

        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }

    /// Sorts stories in place. Equal stories keep their relative order.
    pub fn sort(&self, stories: &mut [&Story]) {
        stories.sort_by(|a, b| self.compare(a, b));
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::descending(SortField::LastUpdate)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "-{}", self.field.as_str())
        } else {
            f.write_str(self.field.as_str())
        }
    }
}

impl FromStr for SortKey {
    type Err = SortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, descending) = match s.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (s, false),
        };

        SortField::from_name(name)
            .map(|field| SortKey { field, descending })
            .ok_or_else(|| SortKeyError {
                field: name.to_string(),
            })
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn story(id: u64, title: &str, day: u32, likes: u32, published: Option<u32>) -> Story {
        Story {
            id,
            title: title.to_string(),
            author: "someone".to_string(),
            description: String::new(),
            tags: vec![],
            completed: false,
            published: published.map(|d| Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()),
            last_update: Utc.with_ymd_and_hms(2024, 2, day, 12, 0, 0).unwrap(),
            likes,
        }
    }

    fn ids(stories: &[&Story]) -> Vec<u64> {
        stories.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_default_is_newest_first() {
        let key = SortKey::default();
        assert_eq!(key.field, SortField::LastUpdate);
        assert!(key.descending);
        assert_eq!(key.to_string(), "-last_update");
    }

    #[test]
    fn test_parse_sort_keys() {
        assert_eq!(
            "title".parse::<SortKey>().unwrap(),
            SortKey::ascending(SortField::Title)
        );
        assert_eq!(
            "-likes".parse::<SortKey>().unwrap(),
            SortKey::descending(SortField::Likes)
        );
        assert_eq!(
            " -published ".parse::<SortKey>().unwrap(),
            SortKey::descending(SortField::Published)
        );
    }

    #[test]
    fn test_parse_unknown_sort_key() {
        let err = "-rating".parse::<SortKey>().unwrap_err();
        assert_eq!(err.field, "rating");
        assert!(err.to_string().contains("unknown sort field: rating"));
    }

    #[test]
    fn test_sort_by_last_update_desc() {
        let a = story(1, "a", 1, 0, None);
        let b = story(2, "b", 3, 0, None);
        let c = story(3, "c", 2, 0, None);
        let mut stories = vec![&a, &b, &c];
        SortKey::default().sort(&mut stories);
        assert_eq!(ids(&stories), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_title_case_insensitive() {
        let a = story(1, "banana", 1, 0, None);
        let b = story(2, "Apple", 1, 0, None);
        let c = story(3, "cherry", 1, 0, None);
        let mut stories = vec![&a, &b, &c];
        SortKey::ascending(SortField::Title).sort(&mut stories);
        assert_eq!(ids(&stories), vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_published_drafts_last() {
        let draft = story(1, "draft", 1, 0, None);
        let old = story(2, "old", 1, 0, Some(1));
        let new = story(3, "new", 1, 0, Some(5));

        let mut stories = vec![&draft, &old, &new];
        SortKey::descending(SortField::Published).sort(&mut stories);
        assert_eq!(ids(&stories), vec![3, 2, 1]);

        let mut stories = vec![&draft, &new, &old];
        SortKey::ascending(SortField::Published).sort(&mut stories);
        assert_eq!(ids(&stories), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_is_stable() {
        let a = story(1, "a", 1, 5, None);
        let b = story(2, "b", 1, 5, None);
        let c = story(3, "c", 1, 9, None);
        let mut stories = vec![&a, &b, &c];
        SortKey::descending(SortField::Likes).sort(&mut stories);
        assert_eq!(ids(&stories), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_key_serde() {
        let json = serde_json::to_string(&SortKey::descending(SortField::Title)).unwrap();
        assert_eq!(json, "\"-title\"");
        let key: SortKey = serde_json::from_str("\"likes\"").unwrap();
        assert_eq!(key, SortKey::ascending(SortField::Likes));
        assert!(serde_json::from_str::<SortKey>("\"nope\"").is_err());
    }
}
