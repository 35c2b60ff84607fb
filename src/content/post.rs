//! Post model

use chrono::NaiveDateTime;

/// A blog post
#[derive(Debug, Clone)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date, wall-clock time in the site timezone
    pub date: NaiveDateTime,

    /// URL path below the site root, e.g. `/posts/hello/`
    pub url: String,

    /// Rendered HTML of the excerpt
    pub excerpt: String,

    /// Categories, first-seen order, no duplicates
    pub categories: Vec<String>,

    /// Tags, first-seen order, no duplicates
    pub tags: Vec<String>,

    /// Slug (URL-friendly name)
    pub slug: String,

    /// Source file path (relative to the source dir)
    pub source: String,

    /// Whether the post is published
    pub published: bool,

    /// Loaded from `_drafts`
    pub draft: bool,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(title: String, date: NaiveDateTime, source: String) -> Self {
        let slug = slug::slugify(&title);
        Self {
            title,
            date,
            url: format!("/{}/", slug),
            excerpt: String::new(),
            categories: Vec::new(),
            tags: Vec::new(),
            slug,
            source,
            published: true,
            draft: false,
        }
    }
}

/// Keep the first occurrence of each label
pub(crate) fn dedup_labels(labels: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(labels.len());
    for label in labels {
        if !seen.contains(&label) {
            seen.push(label);
        }
    }
    seen
}
