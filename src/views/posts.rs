//! Posts listing: title link, date and a short plain-text excerpt per post

use super::EXCERPT_OMISSION;
use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{link_to, strip_html, time_tag, truncate_words};

/// Render the posts listing, one entry per post in the given order
pub fn render(config: &SiteConfig, posts: &[Post]) -> String {
    if posts.is_empty() {
        return String::new();
    }

    let mut html = String::from("<ul class=\"post-list\">\n");

    for post in posts {
        html.push_str("<li class=\"post-entry\">\n");
        html.push_str(&format!(
            "<h2 class=\"post-title\">{}</h2>\n",
            link_to(config, &post.url, &post.title, Some("post-link"))
        ));
        html.push_str(&format!(
            "<span class=\"post-meta\">{}</span>\n",
            time_tag(&post.date.date(), &config.date_format)
        ));

        let excerpt = excerpt_text(config, post);
        if !excerpt.is_empty() {
            html.push_str(&format!("<p class=\"post-excerpt\">{}</p>\n", excerpt));
        }

        html.push_str("</li>\n");
    }

    html.push_str("</ul>\n");
    html
}

/// The excerpt as it appears in the listing: no markup, word-limited
pub fn excerpt_text(config: &SiteConfig, post: &Post) -> String {
    truncate_words(
        &strip_html(&post.excerpt),
        config.excerpt_words,
        EXCERPT_OMISSION,
    )
}
