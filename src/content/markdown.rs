//! Markdown rendering and excerpt extraction

use pulldown_cmark::{html, Options, Parser};

/// Marker that ends an excerpt regardless of the configured separator
pub const MORE_MARKER: &str = "<!-- more -->";

/// Markdown renderer
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // Front-matter is handled by FrontMatter::parse, so no metadata blocks
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION;
        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }

    /// Take the excerpt from the start of a post body.
    ///
    /// The excerpt ends at the first `separator` or at `<!-- more -->`,
    /// whichever comes first. Without either, the whole body is the excerpt.
    pub fn extract_excerpt<'a>(body: &'a str, separator: &str) -> &'a str {
        let body = body.trim_start_matches(['\n', '\r']);

        let more = body.find(MORE_MARKER);
        let sep = if separator.is_empty() {
            None
        } else {
            body.find(separator)
        };

        let end = match (more, sep) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => body.len(),
        };

        body[..end].trim_end()
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
