//! List command implementation.
//!
//! Lists stories from a JSON file, filtered by a filter string.

use std::fs;
use std::path::{Path, PathBuf};

use btell_filter::filter::{prepare_stories_query, StoryFilterEvaluator};
use btell_filter::{SortKey, Story};

use super::{CommandContext, CommandError, Result};
use crate::output::{format_stories_json, format_stories_table};

/// Number of stories shown when neither flag nor config sets a limit.
const DEFAULT_LIMIT: u32 = 50;

/// Options for the list command.
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Filter string.
    pub filter: Option<String>,
    /// Stories file, overriding the config.
    pub stories: Option<PathBuf>,
    /// Sort key, overriding the config.
    pub sort: Option<SortKey>,
    /// Limit results.
    pub limit: Option<u32>,
    /// Show all stories (no limit).
    pub all: bool,
}

/// Executes the list command.
///
/// # Errors
///
/// Returns an error if no stories file is configured, if it cannot be read,
/// or if the filter is invalid.
pub fn execute(ctx: &CommandContext, opts: &ListOptions) -> Result<()> {
    let path = stories_path(ctx, opts)?;
    let stories = load_stories(&path)?;

    let mut filter = prepare_stories_query(opts.filter.as_deref())?;
    if let Some(sort) = opts.sort.or(ctx.config.list.sort) {
        filter.sort_key = sort;
    }

    let evaluator = StoryFilterEvaluator::new(&filter)?;
    let matched = evaluator.filter_stories(&stories);
    let total = matched.len();
    let shown = apply_limit(matched, limit(ctx, opts));

    if ctx.json_output {
        println!("{}", format_stories_json(&shown, total, filter.sort_key)?);
    } else if !ctx.quiet {
        print!("{}", format_stories_table(&shown, total, ctx.use_colors));
    }

    Ok(())
}

/// Resolves the stories file: flag first, then config.
fn stories_path(ctx: &CommandContext, opts: &ListOptions) -> Result<PathBuf> {
    opts.stories
        .clone()
        .or_else(|| ctx.config.stories.clone())
        .ok_or_else(|| {
            CommandError::Config(
                "No stories file given. Pass --stories or set 'stories' in the config file."
                    .to_string(),
            )
        })
}

/// Returns the effective limit, or `None` when everything should be shown.
fn limit(ctx: &CommandContext, opts: &ListOptions) -> Option<usize> {
    if opts.all {
        return None;
    }
    let limit = opts
        .limit
        .or(ctx.config.list.limit)
        .unwrap_or(DEFAULT_LIMIT);
    Some(limit as usize)
}

fn apply_limit(mut stories: Vec<&Story>, limit: Option<usize>) -> Vec<&Story> {
    if let Some(limit) = limit {
        stories.truncate(limit);
    }
    stories
}

/// Loads a JSON array of stories.
pub fn load_stories(path: &Path) -> Result<Vec<Story>> {
    let content = fs::read_to_string(path).map_err(|e| CommandError::Stories {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let stories: Vec<Story> = serde_json::from_str(&content).map_err(|e| CommandError::Stories {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!(path = %path.display(), count = stories.len(), "loaded stories");
    Ok(stories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::config::Config;
    use tempfile::TempDir;

    fn context(config: Config) -> CommandContext {
        CommandContext {
            json_output: false,
            use_colors: false,
            quiet: true,
            config,
        }
    }

    fn write_stories(dir: &TempDir, count: u64) -> PathBuf {
        let stories: Vec<serde_json::Value> = (1..=count)
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "title": format!("Story {id}"),
                    "author": "someone",
                    "last_update": format!("2024-01-{:02}T00:00:00Z", id),
                })
            })
            .collect();
        let path = dir.path().join("stories.json");
        fs::write(&path, serde_json::to_string(&stories).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_stories_path_prefers_flag() {
        let ctx = context(Config {
            stories: Some(PathBuf::from("from-config.json")),
            ..Config::default()
        });
        let opts = ListOptions {
            stories: Some(PathBuf::from("from-flag.json")),
            ..ListOptions::default()
        };
        assert_eq!(
            stories_path(&ctx, &opts).unwrap(),
            PathBuf::from("from-flag.json")
        );
        assert_eq!(
            stories_path(&ctx, &ListOptions::default()).unwrap(),
            PathBuf::from("from-config.json")
        );
    }

    #[test]
    fn test_stories_path_missing() {
        let ctx = context(Config::default());
        let err = stories_path(&ctx, &ListOptions::default()).unwrap_err();
        assert!(matches!(err, CommandError::Config(_)));
    }

    #[test]
    fn test_limit_resolution() {
        let mut config = Config::default();
        let opts = ListOptions::default();
        assert_eq!(limit(&context(config.clone()), &opts), Some(50));

        config.list.limit = Some(10);
        assert_eq!(limit(&context(config.clone()), &opts), Some(10));

        let opts = ListOptions {
            limit: Some(2),
            ..ListOptions::default()
        };
        assert_eq!(limit(&context(config.clone()), &opts), Some(2));

        let opts = ListOptions {
            all: true,
            ..ListOptions::default()
        };
        assert_eq!(limit(&context(config), &opts), None);
    }

    #[test]
    fn test_load_stories() {
        let dir = TempDir::new().unwrap();
        let path = write_stories(&dir, 3);
        let stories = load_stories(&path).unwrap();
        assert_eq!(stories.len(), 3);
        assert_eq!(stories[2].title, "Story 3");
    }

    #[test]
    fn test_load_stories_bad_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_stories(&path).unwrap_err();
        assert!(matches!(err, CommandError::Stories { .. }));
    }

    #[test]
    fn test_execute_with_invalid_filter() {
        let dir = TempDir::new().unwrap();
        let path = write_stories(&dir, 2);
        let ctx = context(Config::default());
        let opts = ListOptions {
            filter: Some("rating:5".to_string()),
            stories: Some(path),
            ..ListOptions::default()
        };
        let err = execute(&ctx, &opts).unwrap_err();
        assert_eq!(
            err.to_string(),
            "filter error: invalid filter: Unknown field name: rating"
        );
    }

    #[test]
    fn test_execute_quiet_succeeds() {
        let dir = TempDir::new().unwrap();
        let path = write_stories(&dir, 2);
        let ctx = context(Config::default());
        let opts = ListOptions {
            filter: Some("author:someone".to_string()),
            stories: Some(path),
            ..ListOptions::default()
        };
        assert!(execute(&ctx, &opts).is_ok());
    }
}
