//! HTML helper functions

use lazy_static::lazy_static;
use regex::Regex;

use super::url::url_for;
use crate::config::SiteConfig;

lazy_static! {
    static ref SCRIPT_OR_STYLE: Regex =
        Regex::new(r"(?is)<script.*?</script>|<style.*?</style>").unwrap();
    static ref COMMENT: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref TAG: Regex = Regex::new(r"(?s)<[^>]*>").unwrap();
}

/// Generate an anchor tag. `text` and `href` are escaped, `path` goes
/// through [`url_for`] unless it is absolute.
///
/// # Examples
/// ```ignore
/// link_to(&config, "/about/", "About", None) // -> <a href="/blog/about/">About</a>
/// ```
pub fn link_to(config: &SiteConfig, path: &str, text: &str, class: Option<&str>) -> String {
    let href = if path.starts_with("http://") || path.starts_with("https://") {
        html_escape(path)
    } else {
        html_escape(&url_for(config, path))
    };

    match class {
        Some(class) => format!(
            r#"<a class="{}" href="{}">{}</a>"#,
            class,
            href,
            html_escape(text)
        ),
        None => format!(r#"<a href="{}">{}</a>"#, href, html_escape(text)),
    }
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML from a string: script and style blocks, comments, then tags.
/// Each tag becomes a space so text in adjacent elements stays apart, and
/// whitespace is collapsed afterwards. Entities are left as they are.
pub fn strip_html(s: &str) -> String {
    let s = SCRIPT_OR_STYLE.replace_all(s, " ");
    let s = COMMENT.replace_all(&s, "");
    let s = TAG.replace_all(&s, " ");
    // an unterminated `<` would otherwise leave half a tag behind
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('<', "&lt;")
}

/// Truncate to at most `words` whitespace-separated words.
///
/// When something was cut, `omission` is appended to the last kept word, so
/// the word count never goes above `words`. Whitespace is collapsed to
/// single spaces either way.
pub fn truncate_words(s: &str, words: usize, omission: &str) -> String {
    let all: Vec<&str> = s.split_whitespace().collect();

    if all.len() <= words {
        return all.join(" ");
    }

    if words == 0 {
        return String::new();
    }

    let mut out = all[..words].join(" ");
    out.push_str(omission);
    out
}
