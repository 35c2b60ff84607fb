//! Site configuration (_config.yml)

use anyhow::Result;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration values that parse as YAML but make no sense
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid exclude pattern {pattern:?}: {message}")]
    InvalidExclude { pattern: String, message: String },
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    /// IANA zone name used to read front-matter dates; empty means UTC
    pub timezone: String,

    // URL
    pub url: String,
    #[serde(alias = "baseurl")]
    pub root: String,
    pub permalink: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,
    pub posts_dir: String,
    pub category_dir: String,
    #[serde(default)]
    pub exclude: Vec<String>,

    // Writing
    pub render_drafts: bool,
    pub future: bool,
    pub excerpt_separator: String,

    // Listings
    pub date_format: String,
    pub excerpt_words: usize,
    pub listing_footer: bool,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            author: String::new(),
            language: "en".to_string(),
            timezone: String::new(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),
            permalink: "/posts/:title/".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),
            posts_dir: "posts".to_string(),
            category_dir: "categories".to_string(),
            exclude: Vec::new(),

            render_drafts: false,
            future: false,
            excerpt_separator: "\n\n".to_string(),

            date_format: "MMMM DD, YYYY".to_string(),
            excerpt_words: 50,
            listing_footer: false,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config: SiteConfig = serde_yaml::from_str(&content)?;
        if config.root.is_empty() {
            config.root = "/".to_string();
        }
        config.tz()?;
        config.exclude_patterns()?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Resolve the configured timezone
    pub fn tz(&self) -> Result<Tz, ConfigError> {
        let name = self.timezone.trim();
        if name.is_empty() {
            return Ok(Tz::UTC);
        }
        name.parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(name.to_string()))
    }

    /// Compile the `exclude` globs
    pub fn exclude_patterns(&self) -> Result<Vec<glob::Pattern>, ConfigError> {
        self.exclude
            .iter()
            .map(|p| {
                glob::Pattern::new(p).map_err(|e| ConfigError::InvalidExclude {
                    pattern: p.clone(),
                    message: e.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.permalink, "/posts/:title/");
        assert_eq!(config.excerpt_words, 50);
        assert_eq!(config.date_format, "MMMM DD, YYYY");
        assert_eq!(config.tz().unwrap(), Tz::UTC);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Learning Python
author: Test User
baseurl: /blog/
timezone: Europe/Berlin
exclude:
  - "_posts/wip/*"
excerpt_words: 30
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Learning Python");
        assert_eq!(config.root, "/blog/");
        assert_eq!(config.excerpt_words, 30);
        assert_eq!(config.tz().unwrap(), chrono_tz::Europe::Berlin);
        assert_eq!(config.exclude_patterns().unwrap().len(), 1);
        // untouched keys keep their defaults
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn test_invalid_timezone() {
        let config = SiteConfig {
            timezone: "Mars/Olympus".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.tz(),
            Err(ConfigError::InvalidTimezone(name)) if name == "Mars/Olympus"
        ));
    }

    #[test]
    fn test_load_rejects_bad_timezone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "timezone: Nowhere/Atlantis\n").unwrap();
        assert!(SiteConfig::load(&path).is_err());
    }
}
