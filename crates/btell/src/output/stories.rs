//! Story listing output formatting.

use btell_filter::{SortKey, Story};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{format_date, format_tags, truncate_str};

/// JSON output structure for the list command.
#[derive(Serialize)]
pub struct StoriesListOutput<'a> {
    pub stories: &'a [&'a Story],
    pub total: usize,
    pub shown: usize,
    pub sort: String,
}

/// Formats stories as JSON.
pub fn format_stories_json(
    stories: &[&Story],
    total: usize,
    sort: SortKey,
) -> Result<String, serde_json::Error> {
    let output = StoriesListOutput {
        stories,
        total,
        shown: stories.len(),
        sort: sort.to_string(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats stories as a table.
pub fn format_stories_table(stories: &[&Story], total: usize, use_colors: bool) -> String {
    if stories.is_empty() {
        return "No stories found.\n".to_string();
    }

    let mut output = String::new();

    let header = format!(
        "{:<6} {:<32} {:<14} {:<6} {:<10} {}",
        "ID", "Title", "Author", "Done", "Updated", "Tags"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for story in stories {
        let done = if story.completed { "yes" } else { "" };
        let title = truncate_str(&story.title, 32);
        let title = if use_colors && !story.is_published() {
            format!("{:<32}", title).dimmed().to_string()
        } else {
            format!("{:<32}", title)
        };

        output.push_str(&format!(
            "{:<6} {} {:<14} {:<6} {:<10} {}\n",
            story.id,
            title,
            truncate_str(&story.author, 14),
            done,
            format_date(&story.last_update),
            format_tags(&story.tags),
        ));
    }

    if total > stories.len() {
        let footer = format!("Showing {} of {} stories.", stories.len(), total);
        if use_colors {
            output.push_str(&format!("{}\n", footer.dimmed()));
        } else {
            output.push_str(&footer);
            output.push('\n');
        }
    }

    output
}
