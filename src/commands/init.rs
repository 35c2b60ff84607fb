//! Initialize a new blog

use anyhow::Result;
use std::fs;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# Site
title: My Blog
description: ''
author: ''
language: en
timezone: ''

# URL
url: http://example.com
root: /
permalink: /posts/:title/

# Directory
source_dir: source
public_dir: public
posts_dir: posts
category_dir: categories
exclude: []

# Writing
render_drafts: false
future: false
excerpt_separator: "\n\n"

# Listings
date_format: MMMM DD, YYYY
excerpt_words: 50
listing_footer: false
"#;

/// Initialize a new blog in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("{:?} already exists", config_path);
    }

    fs::create_dir_all(target_dir.join("source/_posts"))?;
    fs::create_dir_all(target_dir.join("source/_drafts"))?;
    fs::write(&config_path, CONFIG_TEMPLATE)?;

    let now = chrono::Utc::now();
    let sample_post = format!(
        r#"---
title: Hello World
date: {}
categories: meta
tags:
  - welcome
---

This is your first post. Everything up to the first blank line becomes the
excerpt shown on the Posts page.

Write more posts with `postroll new "My New Post"`, then run
`postroll generate` to rebuild the Posts and Categories pages.
"#,
        now.format("%Y-%m-%d %H:%M:%S %z")
    );

    fs::write(
        target_dir.join(format!(
            "source/_posts/{}-hello-world.md",
            now.format("%Y-%m-%d")
        )),
        sample_post,
    )?;

    tracing::debug!("Initialized blog in {:?}", target_dir);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::ContentLoader;
    use crate::Blog;

    #[test]
    fn test_init_site_is_loadable() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.excerpt_separator, "\n\n");

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello World");
        assert_eq!(posts[0].categories, vec!["meta"]);
    }

    #[test]
    fn test_init_refuses_existing_site() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
