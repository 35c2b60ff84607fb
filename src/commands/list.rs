//! List site content

use anyhow::Result;
use std::fmt::Write;

use crate::content::loader::ContentLoader;
use crate::content::{group_by_category, group_by_tag, Grouping, Post};
use crate::helpers::format_date;
use crate::Blog;

/// Print site content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let posts = ContentLoader::new(blog).load_posts()?;
    print!("{}", summary(blog, &posts, content_type)?);
    Ok(())
}

/// Build the text printed by [`run`]
pub fn summary(blog: &Blog, posts: &[Post], content_type: &str) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                writeln!(
                    out,
                    "  {} - {} [{}]{}",
                    format_date(&post.date.date(), &blog.config.date_format),
                    post.title,
                    post.source,
                    if post.draft { " (draft)" } else { "" }
                )?;
            }
        }
        "category" | "categories" => {
            write_grouping(&mut out, "Categories", &group_by_category(posts))?;
        }
        "tag" | "tags" => {
            write_grouping(&mut out, "Tags", &group_by_tag(posts))?;
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category, tag",
                content_type
            );
        }
    }

    Ok(out)
}

fn write_grouping(out: &mut String, heading: &str, groups: &Grouping<'_>) -> std::fmt::Result {
    writeln!(out, "{} ({}):", heading, groups.len())?;
    for (name, posts) in groups {
        writeln!(out, "  {} ({})", name, posts.len())?;
        for post in posts {
            writeln!(out, "    {}", post.title)?;
        }
    }
    Ok(())
}
