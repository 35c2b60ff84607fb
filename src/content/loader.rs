//! Content loader - loads posts from the source directory

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::post::dedup_labels;
use super::{FrontMatter, MarkdownRenderer, Post};
use crate::helpers::encode_path;
use crate::Blog;

/// Loads posts from `_posts` (and `_drafts` when enabled)
pub struct ContentLoader<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self {
            blog,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load all posts, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let config = &self.blog.config;
        let tz = config.tz()?;
        let excludes = config.exclude_patterns()?;
        let now = Utc::now().with_timezone(&tz).naive_local();

        let mut dirs = vec![(self.blog.source_dir.join("_posts"), false)];
        if config.render_drafts {
            dirs.push((self.blog.source_dir.join("_drafts"), true));
        }

        let mut posts = Vec::new();

        for (dir, draft) in dirs {
            if !dir.exists() {
                tracing::debug!("No {:?}, skipping", dir);
                continue;
            }

            for entry in WalkDir::new(&dir)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                if !path.is_file() || !is_markdown_file(path) {
                    continue;
                }

                let relative = path.strip_prefix(&self.blog.source_dir).unwrap_or(path);
                if excludes.iter().any(|p| p.matches_path(relative)) {
                    tracing::debug!("Excluded {:?}", relative);
                    continue;
                }

                match self.load_post(path, draft, &tz) {
                    Ok(post) => {
                        if !post.published && !config.render_drafts {
                            tracing::debug!("Skipping unpublished {:?}", post.source);
                        } else if post.date > now && !config.future {
                            tracing::debug!("Skipping future-dated {:?}", post.source);
                        } else {
                            posts.push(post);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {}", path, e);
                    }
                }
            }
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.source.cmp(&b.source)));

        tracing::debug!("Loaded {} posts", posts.len());
        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path, draft: bool, tz: &Tz) -> Result<Post> {
        let content = fs::read_to_string(path)?.replace("\r\n", "\n");
        let (fm, body) = FrontMatter::parse(&content)?;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");
        let (file_date, slug) = split_post_filename(stem);

        let date = match fm.parse_date(tz).or(file_date) {
            Some(date) => date,
            None => {
                if fm.date.is_some() {
                    tracing::warn!("Unrecognised date in {:?}, using file time", path);
                }
                let modified: DateTime<Utc> = fs::metadata(path)?.modified()?.into();
                modified.with_timezone(tz).naive_local()
            }
        };

        let title = fm.title.clone().unwrap_or_else(|| titleize(slug));

        let source = path
            .strip_prefix(&self.blog.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        let categories = dedup_labels(fm.all_categories());
        let tags = dedup_labels(fm.tags.clone());

        let url = match fm.permalink.as_deref() {
            Some(permalink) => normalize_url_path(permalink),
            None => self.generate_permalink(&date, slug, &categories),
        };

        let excerpt_md = match fm.excerpt.as_deref() {
            Some(excerpt) => excerpt,
            None => MarkdownRenderer::extract_excerpt(body, &self.blog.config.excerpt_separator),
        };

        let mut post = Post::new(title, date, source);
        post.url = url;
        post.excerpt = self.renderer.render(excerpt_md);
        post.categories = categories;
        post.tags = tags;
        post.slug = slug.to_string();
        post.published = fm.published;
        post.draft = draft;

        Ok(post)
    }

    /// Generate the URL path from the configured permalink pattern
    fn generate_permalink(&self, date: &NaiveDateTime, slug: &str, categories: &[String]) -> String {
        let pattern = &self.blog.config.permalink;

        let categories = categories
            .iter()
            .map(|c| slug::slugify(c))
            .collect::<Vec<_>>()
            .join("/");

        let result = pattern
            .replace(":categories", &categories)
            .replace(":year", &date.format("%Y").to_string())
            .replace(":month", &date.format("%m").to_string())
            .replace(":day", &date.format("%d").to_string())
            .replace(":i_month", &date.format("%-m").to_string())
            .replace(":i_day", &date.format("%-d").to_string())
            .replace(":title", slug)
            .replace(":slug", slug);

        normalize_url_path(&result)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

/// Split `2025-10-01-some-title` into its date and slug
fn split_post_filename(stem: &str) -> (Option<NaiveDateTime>, &str) {
    if stem.len() > 11 && stem.is_char_boundary(10) && stem.as_bytes()[10] == b'-' {
        if let Ok(date) = NaiveDate::parse_from_str(&stem[..10], "%Y-%m-%d") {
            return (date.and_hms_opt(0, 0, 0), &stem[11..]);
        }
    }
    (None, stem)
}

/// `getting-fluent` -> `Getting Fluent`
fn titleize(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Collapse empty segments, percent-encode the rest, keep a leading slash
/// and keep (or drop) the trailing one as written.
fn normalize_url_path(path: &str) -> String {
    let trailing = path.ends_with('/');
    let segments: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(encode_path)
        .collect();

    if segments.is_empty() {
        return "/".to_string();
    }

    let mut url = format!("/{}", segments.join("/"));
    if trailing {
        url.push('/');
    }
    url
}
