//! Categories listing: a heading per category and its posts below it

use std::collections::HashSet;

use crate::config::SiteConfig;
use crate::content::Grouping;
use crate::helpers::{html_escape, link_to, time_tag};

/// Render the categories listing in the grouping's key order
pub fn render(config: &SiteConfig, categories: &Grouping<'_>) -> String {
    let mut html = String::new();
    let mut used_ids = HashSet::new();

    for (name, posts) in categories {
        let id = unique_id(slug::slugify(name), &mut used_ids);
        html.push_str("<section class=\"category\">\n");
        if id.is_empty() {
            html.push_str(&format!(
                "<h2 class=\"category-head\">{}</h2>\n",
                html_escape(name)
            ));
        } else {
            html.push_str(&format!(
                "<h2 class=\"category-head\" id=\"{}\">{}</h2>\n",
                id,
                html_escape(name)
            ));
        }

        html.push_str("<ul class=\"category-posts\">\n");
        for post in posts {
            html.push_str(&format!(
                "<li>{} <span class=\"post-meta\">{}</span></li>\n",
                link_to(config, &post.url, &post.title, Some("post-link")),
                time_tag(&post.date.date(), &config.date_format)
            ));
        }
        html.push_str("</ul>\n</section>\n");
    }

    html
}

/// `c`, `c-2`, `c-3`, ... for names that slugify alike (`C`, `C++`)
fn unique_id(base: String, used: &mut HashSet<String>) -> String {
    if base.is_empty() {
        return base;
    }
    let mut id = base.clone();
    let mut n = 2;
    while used.contains(&id) {
        id = format!("{}-{}", base, n);
        n += 1;
    }
    used.insert(id.clone());
    id
}
