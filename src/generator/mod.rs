//! Generator module - writes the Posts and Categories pages

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use tera::Context;

use crate::content::{group_by_category, Post};
use crate::templates::{ConfigData, NavData, PageData, TemplateRenderer};
use crate::views;
use crate::Blog;

/// Writes listing pages into the public directory
pub struct Generator {
    blog: Blog,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            blog: blog.clone(),
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Generate both listing pages. Returns the files written.
    pub fn generate(&self, posts: &[Post]) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.blog.public_dir)?;

        let written = vec![
            self.generate_posts_page(posts)?,
            self.generate_categories_page(posts)?,
        ];

        Ok(written)
    }

    /// Context shared by every page
    fn create_base_context(&self, title: &str, dir: &str) -> Context {
        let config = &self.blog.config;
        let mut context = Context::new();
        context.insert("config", &ConfigData::from(config));
        context.insert("nav", &NavData::from(config));
        context.insert("page", &PageData::listing(config, title, dir));
        context
    }

    /// Generate the posts listing page
    fn generate_posts_page(&self, posts: &[Post]) -> Result<PathBuf> {
        let listing = views::posts::render(&self.blog.config, posts);

        let mut context = self.create_base_context("Posts", &self.blog.config.posts_dir);
        context.insert("listing", &listing);
        context.insert("post_count", &posts.len());

        let html = self.renderer.render("posts.html", &context)?;
        let output_path = self.write_page(&self.blog.config.posts_dir, html)?;
        tracing::info!("Generated posts page with {} entries", posts.len());

        Ok(output_path)
    }

    /// Generate the categories listing page
    fn generate_categories_page(&self, posts: &[Post]) -> Result<PathBuf> {
        let categories = group_by_category(posts);
        let listing = views::categories::render(&self.blog.config, &categories);

        let mut context = self.create_base_context("Categories", &self.blog.config.category_dir);
        context.insert("listing", &listing);
        context.insert("category_count", &categories.len());

        let html = self.renderer.render("categories.html", &context)?;
        let output_path = self.write_page(&self.blog.config.category_dir, html)?;
        tracing::info!("Generated categories page with {} categories", categories.len());

        Ok(output_path)
    }

    /// Write `<public_dir>/<dir>/index.html`
    fn write_page(&self, dir: &str, html: String) -> Result<PathBuf> {
        let output_path = self
            .blog
            .public_dir
            .join(dir.trim_matches('/'))
            .join("index.html");
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(output_path)
    }
}
