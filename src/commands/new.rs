//! Create a new post or draft

use anyhow::Result;
use chrono::Utc;
use std::fs;
use std::path::PathBuf;

use crate::Blog;

/// Create a new post in `_posts` (or a draft in `_drafts`) and return its path
pub fn create_post(blog: &Blog, title: &str, draft: bool) -> Result<PathBuf> {
    let now = Utc::now().with_timezone(&blog.config.tz()?);
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Title {:?} has nothing to build a file name from", title);
    }

    let (target_dir, filename) = if draft {
        (blog.source_dir.join("_drafts"), format!("{}.md", slug))
    } else {
        (
            blog.source_dir.join("_posts"),
            format!("{}-{}.md", now.format("%Y-%m-%d"), slug),
        )
    };

    fs::create_dir_all(&target_dir)?;
    let file_path = target_dir.join(filename);

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let scaffold_path = blog.base_dir.join("scaffolds").join("post.md");
    let scaffold = if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)?
    } else {
        "---\ntitle: {{ title }}\ndate: {{ date }}\ncategories:\ntags:\n---\n".to_string()
    };

    // A JSON string is a valid YAML scalar, which keeps titles with colons intact
    let content = scaffold
        .replace("{{ title }}", &serde_json::to_string(title)?)
        .replace("{{ date }}", &now.format("%Y-%m-%d %H:%M:%S %z").to_string());

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}
