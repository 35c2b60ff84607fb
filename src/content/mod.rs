//! Content module - posts, front-matter and the groupings derived from them

mod frontmatter;
pub mod loader;
mod markdown;
mod post;
mod taxonomy;

pub use frontmatter::{FrontMatter, FrontMatterError};
pub use markdown::MarkdownRenderer;
pub use post::Post;
pub use taxonomy::{group_by_category, group_by_tag, Grouping};
