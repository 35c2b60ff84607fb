//! Built-in page templates using the Tera template engine
//!
//! The listing fragments are produced by [`crate::views`]; these templates
//! only wrap them in the shared page layout.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::helpers::{full_url_for, html_escape, url_for};

/// Template renderer with the embedded page layout
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Listing fragments are already HTML
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("posts.html", include_str!("site/posts.html")),
            ("categories.html", include_str!("site/categories.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub url: String,
    pub root: String,
}

impl From<&SiteConfig> for ConfigData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: config.language.clone(),
            url: config.url.clone(),
            root: html_escape(&url_for(config, "")),
        }
    }
}

/// Link targets, already attribute-escaped
#[derive(Debug, Clone, Serialize)]
pub struct NavData {
    pub posts: String,
    pub categories: String,
}

impl From<&SiteConfig> for NavData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            posts: html_escape(&url_for(config, &format!("{}/", config.posts_dir))),
            categories: html_escape(&url_for(config, &format!("{}/", config.category_dir))),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    pub title: String,
    pub canonical: String,
    pub show_footer: bool,
}

impl PageData {
    /// Page data for the listing served from `dir`
    pub fn listing(config: &SiteConfig, title: &str, dir: &str) -> Self {
        Self {
            title: title.to_string(),
            canonical: html_escape(&full_url_for(config, &format!("{}/", dir.trim_matches('/')))),
            show_footer: config.listing_footer,
        }
    }
}
