//! Front-matter parsing

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Errors for front-matter that is recognisably present but broken
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("Failed to parse JSON front-matter: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unterminated JSON front-matter")]
    Unterminated,
}

/// Deserializes either a list of strings or a single whitespace-separated
/// string into a list of labels.
fn labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct Labels;

    impl<'de> Visitor<'de> for Labels {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.split_whitespace().map(str::to_string).collect())
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                let item = item.trim();
                if !item.is_empty() {
                    vec.push(item.to_string());
                }
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(Labels)
}

/// Front-matter data from a post
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    #[serde(deserialize_with = "labels", default)]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "labels", default)]
    pub categories: Vec<String>,
    /// Singular form, folded into `categories` by [`FrontMatter::all_categories`]
    pub category: Option<String>,
    pub permalink: Option<String>,
    pub excerpt: Option<String>,
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            date: None,
            tags: Vec::new(),
            categories: Vec::new(),
            category: None,
            permalink: None,
            excerpt: None,
            published: true,
        }
    }
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start();

        if content.starts_with("---") {
            return Ok(Self::parse_yaml(content));
        }

        if content.starts_with(";;;") || content.starts_with('{') {
            return Ok(Self::parse_json(content)?);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> (Self, &str) {
        let rest = &content[3..];
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            return (FrontMatter::default(), content);
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..];
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return (FrontMatter::default(), remaining);
        }

        // A `---` rule followed by prose is Markdown, not front-matter
        if !yaml_content.lines().any(looks_like_yaml_key) {
            return (FrontMatter::default(), content);
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_content) {
            Ok(fm) => (fm, remaining),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse YAML front-matter, treating as content: {}",
                    e
                );
                (FrontMatter::default(), content)
            }
        }
    }

    fn parse_json(content: &str) -> Result<(Self, &str), FrontMatterError> {
        if let Some(rest) = content.strip_prefix(";;;") {
            let end_pos = rest.find(";;;").ok_or(FrontMatterError::Unterminated)?;
            let fm: FrontMatter = serde_json::from_str(&rest[..end_pos])?;
            let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);
            return Ok((fm, remaining));
        }

        let mut depth = 0usize;
        let mut end_pos = None;
        for (i, c) in content.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        end_pos = Some(i + 1);
                        break;
                    }
                }
                _ => {}
            }
        }

        let end_pos = end_pos.ok_or(FrontMatterError::Unterminated)?;
        let fm: FrontMatter = serde_json::from_str(&content[..end_pos])?;
        let remaining = content[end_pos..].trim_start_matches(['\n', '\r']);
        Ok((fm, remaining))
    }

    /// `categories` plus the singular `category`, without duplicates
    pub fn all_categories(&self) -> Vec<String> {
        let mut all = Vec::new();
        for name in self.category.iter().chain(self.categories.iter()) {
            let name = name.trim();
            if !name.is_empty() && !all.iter().any(|c: &String| c == name) {
                all.push(name.to_string());
            }
        }
        all
    }

    /// Parse the date as wall-clock time in `tz`
    pub fn parse_date(&self, tz: &Tz) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(|s| parse_date_string(s, tz))
    }
}

/// Checks for a `key:` line; URLs and prose do not qualify
fn looks_like_yaml_key(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return false;
    }
    let Some(colon_pos) = trimmed.find(':') else {
        return false;
    };
    let key = &trimmed[..colon_pos];
    let is_valid_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && !matches!(key, "http" | "https" | "ftp");
    if !is_valid_key {
        return false;
    }
    let after_colon = &trimmed[colon_pos + 1..];
    after_colon.is_empty() || after_colon.starts_with(' ')
}

/// Parse a date string into wall-clock time in `tz`.
///
/// Strings carrying an offset are converted into `tz`; bare dates and
/// times are taken to already be in `tz`.
pub fn parse_date_string(s: &str, tz: &Tz) -> Option<NaiveDateTime> {
    let s = s.trim();

    const WITH_OFFSET: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S %z",
        "%Y-%m-%d %H:%M:%S%.f %z",
        "%Y-%m-%dT%H:%M:%S%z",
        "%Y-%m-%dT%H:%M:%S%.f%z",
    ];
    for fmt in WITH_OFFSET {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(tz).naive_local());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(tz).naive_local());
    }

    const NAIVE: [&str; 8] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in NAIVE {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: "Getting fluent in Python: some notes"
date: 2025-10-01 10:30:00
tags:
  - python
  - fluent-python
categories:
  - python
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(
            fm.title.as_deref(),
            Some("Getting fluent in Python: some notes")
        );
        assert_eq!(fm.tags, vec!["python", "fluent-python"]);
        assert_eq!(fm.categories, vec!["python"]);
        assert!(remaining.starts_with("This is the content."));
    }

    #[test]
    fn test_parse_json_frontmatter() {
        let content = r#"{"title": "Test Post", "tags": ["a", "b"]}

This is content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Test Post"));
        assert_eq!(fm.tags, vec!["a", "b"]);
        assert!(remaining.contains("This is content."));
    }

    #[test]
    fn test_unterminated_json_frontmatter() {
        assert!(FrontMatter::parse(";;;\n{\"title\": \"x\"}\nbody").is_err());
    }

    #[test]
    fn test_space_separated_labels() {
        let content = r#"---
title: Labels
categories: python notes
category: learning
tags: dunder
---
Body
"#;

        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.categories, vec!["python", "notes"]);
        assert_eq!(fm.tags, vec!["dunder"]);
        assert_eq!(fm.all_categories(), vec!["learning", "python", "notes"]);
    }

    #[test]
    fn test_duplicate_categories_collapse() {
        let fm = FrontMatter {
            categories: vec!["python".into(), "python".into()],
            category: Some("python".into()),
            ..Default::default()
        };
        assert_eq!(fm.all_categories(), vec!["python"]);
    }

    #[test]
    fn test_unpublished() {
        let (fm, _) = FrontMatter::parse("---\ntitle: Hidden\npublished: false\n---\n").unwrap();
        assert!(!fm.published);
    }

    #[test]
    fn test_markdown_separator_not_yaml() {
        let content = r#"
---

Some text with a list:
- Item 1
- Item 2

---
More content here.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(remaining.contains("Some text"));
    }

    #[test]
    fn test_content_with_url_not_yaml() {
        let content = r#"
---

Check out https://docs.python.org/3/reference/datamodel.html

---
More content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(remaining.contains("https://docs.python.org"));
    }

    #[test]
    fn test_parse_plain_date() {
        let fm = FrontMatter {
            date: Some("2025-10-01".to_string()),
            ..Default::default()
        };
        let dt = fm.parse_date(&Tz::UTC).unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2025-10-01 00:00");
    }

    #[test]
    fn test_offset_date_moves_into_site_timezone() {
        // 23:30 in New York is already the next day in Berlin
        let dt = parse_date_string("2025-09-30 23:30:00 -0400", &chrono_tz::Europe::Berlin)
            .unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2025-10-01 05:30");
    }

    #[test]
    fn test_rfc3339_date() {
        let dt = parse_date_string("2025-10-01T08:00:00Z", &Tz::UTC).unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2025-10-01 08:00");
    }

    #[test]
    fn test_garbage_date() {
        assert!(parse_date_string("next tuesday", &Tz::UTC).is_none());
    }
}
