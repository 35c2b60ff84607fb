//! Category and tag groupings derived from the post list

use indexmap::IndexMap;

use super::Post;

/// Posts grouped under a label, in label order
pub type Grouping<'a> = IndexMap<String, Vec<&'a Post>>;

/// Group posts by category.
///
/// Categories appear in the order they are first used, reading posts from
/// oldest to newest. Posts under each category are newest first.
pub fn group_by_category(posts: &[Post]) -> Grouping<'_> {
    group_by(posts, |p| p.categories.as_slice())
}

/// Group posts by tag, with the same ordering as [`group_by_category`]
pub fn group_by_tag(posts: &[Post]) -> Grouping<'_> {
    group_by(posts, |p| p.tags.as_slice())
}

fn group_by<'a, F>(posts: &'a [Post], labels: F) -> Grouping<'a>
where
    F: Fn(&'a Post) -> &'a [String],
{
    let mut oldest_first: Vec<&Post> = posts.iter().collect();
    oldest_first.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| b.source.cmp(&a.source)));

    let mut groups: Grouping<'a> = IndexMap::new();
    for post in oldest_first {
        for label in labels(post) {
            let entry = groups.entry(label.clone()).or_default();
            if !entry.iter().any(|p| std::ptr::eq(*p, post)) {
                entry.push(post);
            }
        }
    }

    for posts in groups.values_mut() {
        posts.reverse();
    }

    groups
}
