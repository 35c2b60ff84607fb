// End-to-end: markdown sources on disk -> loaded posts -> listing pages in public/
use postroll::content::loader::ContentLoader;
use postroll::Blog;
use regex::Regex;
use std::fs;
use std::path::Path;

const CONFIG: &str = r#"
title: Learning Python
author: Test User
timezone: Europe/Berlin
exclude:
  - "_posts/wip/*"
"#;

const FLUENT: &str = r#"---
title: "Getting fluent in Python: some notes"
date: 2025-10-01
categories: [python]
tags: [fluent-python, data-model]
---

Ever wonder why we call `len(collection)`, instead of `collection.len()`? This
oddity is the tip of an iceberg: the *Python Data Model*.

### Special Methods

`len(obj)` calls `obj.__len__()`.
"#;

const READING: &str = r#"---
title: Reading list
categories: books
---

Fluent Python, second edition.
"#;

const UNPUBLISHED: &str = "---\ntitle: Not yet\npublished: false\ncategories: python\n---\n\nHidden.\n";

const FUTURE: &str = "---\ntitle: From the future\ncategories: python\n---\n\nLater.\n";

const WIP: &str = "---\ntitle: Half done\ncategories: python\n---\n\nWork in progress.\n";

const DRAFT: &str = "---\ntitle: An idea\ncategories: ideas\n---\n\nMaybe.\n";

fn special_methods() -> String {
    let words = (0..80)
        .map(|i| format!("<em>word{}</em>", i))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "---\ntitle: Special methods\ncategories: python notes\n---\n\n<div class=\"lead\">{}</div>\n\nSecond paragraph.\n",
        words
    )
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn sample_site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "_config.yml", CONFIG);
    write(root, "source/_posts/2025-10-01-getting-fluent-in-python.md", FLUENT);
    write(root, "source/_posts/2025-10-12-special-methods.md", &special_methods());
    write(root, "source/_posts/2025-09-20-reading-list.md", READING);
    write(root, "source/_posts/2025-09-01-not-yet.md", UNPUBLISHED);
    write(root, "source/_posts/2999-01-01-from-the-future.md", FUTURE);
    write(root, "source/_posts/wip/2025-10-05-half-done.md", WIP);
    write(root, "source/_posts/notes_data_model.py", "import marimo\n");
    write(root, "source/_drafts/an-idea.md", DRAFT);
    dir
}

fn link_texts(html: &str) -> Vec<String> {
    let re = Regex::new(r#"<a class="post-link" href="[^"]*">([^<]*)</a>"#).unwrap();
    re.captures_iter(html).map(|c| c[1].to_string()).collect()
}

fn headings(html: &str) -> Vec<String> {
    let re = Regex::new(r#"<h2 class="category-head"[^>]*>([^<]*)</h2>"#).unwrap();
    re.captures_iter(html).map(|c| c[1].to_string()).collect()
}

fn excerpts(html: &str) -> Vec<String> {
    let re = Regex::new(r#"(?s)<p class="post-excerpt">(.*?)</p>"#).unwrap();
    re.captures_iter(html).map(|c| c[1].to_string()).collect()
}

#[test]
fn test_loader_applies_filters_and_order() {
    let site = sample_site();
    let blog = Blog::new(site.path()).unwrap();

    let posts = ContentLoader::new(&blog).load_posts().unwrap();
    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Special methods",
            "Getting fluent in Python: some notes",
            "Reading list"
        ]
    );

    let fluent = &posts[1];
    assert_eq!(fluent.url, "/posts/getting-fluent-in-python/");
    assert_eq!(fluent.date.format("%Y-%m-%d").to_string(), "2025-10-01");
    assert_eq!(fluent.tags, vec!["fluent-python", "data-model"]);
    assert!(fluent.excerpt.contains("Python Data Model"));
    assert!(!fluent.excerpt.contains("Special Methods"));

    // date came from the filename
    assert_eq!(posts[0].date.format("%Y-%m-%d").to_string(), "2025-10-12");
    assert_eq!(posts[0].categories, vec!["python", "notes"]);
}

#[test]
fn test_generate_writes_both_pages() {
    let site = sample_site();
    let blog = Blog::new(site.path()).unwrap();
    blog.generate().unwrap();

    let posts_html = fs::read_to_string(blog.public_dir.join("posts/index.html")).unwrap();
    let categories_html =
        fs::read_to_string(blog.public_dir.join("categories/index.html")).unwrap();

    // Posts page
    assert_eq!(posts_html.matches("<li class=\"post-entry\">").count(), 3);
    assert_eq!(
        link_texts(&posts_html),
        vec![
            "Special methods",
            "Getting fluent in Python: some notes",
            "Reading list"
        ]
    );
    assert!(posts_html.contains(
        r#"<a class="post-link" href="/posts/getting-fluent-in-python/">Getting fluent in Python: some notes</a>"#
    ));
    assert!(posts_html.contains(r#"<time datetime="2025-10-01">October 01, 2025</time>"#));
    for excerpt in excerpts(&posts_html) {
        assert!(excerpt.split_whitespace().count() <= 50, "{}", excerpt);
        assert!(!excerpt.contains('<'), "{}", excerpt);
    }
    assert!(!posts_html.contains("site-footer"));

    // Categories page
    assert_eq!(headings(&categories_html), vec!["books", "python", "notes"]);
    let python = categories_html
        .split("id=\"python\"")
        .nth(1)
        .and_then(|rest| rest.split("</section>").next())
        .unwrap();
    assert_eq!(python.matches("<li>").count(), 2);
    assert!(python.find(">Special methods</a>").unwrap()
        < python.find(">Getting fluent in Python: some notes</a>").unwrap());
    assert_eq!(categories_html.matches("<li>").count(), 4);
}

#[test]
fn test_drafts_future_and_unpublished_when_enabled() {
    let site = sample_site();
    write(
        site.path(),
        "_config.yml",
        &format!("{}render_drafts: true\nfuture: true\n", CONFIG),
    );
    let blog = Blog::new(site.path()).unwrap();

    let posts = ContentLoader::new(&blog).load_posts().unwrap();
    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();

    assert_eq!(titles[0], "From the future");
    assert!(titles.contains(&"Not yet"));
    assert!(titles.contains(&"An idea"));
    assert!(!titles.contains(&"Half done"));
    assert!(posts.iter().any(|p| p.draft && p.title == "An idea"));
}

#[test]
fn test_empty_site() {
    let dir = tempfile::tempdir().unwrap();
    let blog = Blog::new(dir.path()).unwrap();
    blog.generate().unwrap();

    let posts_html = fs::read_to_string(blog.public_dir.join("posts/index.html")).unwrap();
    let categories_html =
        fs::read_to_string(blog.public_dir.join("categories/index.html")).unwrap();

    assert!(!posts_html.contains("post-entry"));
    assert!(posts_html.contains("No posts yet."));
    assert!(headings(&categories_html).is_empty());
}

#[test]
fn test_broken_post_is_skipped() {
    let site = sample_site();
    write(
        site.path(),
        "source/_posts/2025-10-03-broken.md",
        ";;;\n{\"title\": \"never closed\"\n",
    );
    let blog = Blog::new(site.path()).unwrap();
    let posts = ContentLoader::new(&blog).load_posts().unwrap();
    assert_eq!(posts.len(), 3);
}
