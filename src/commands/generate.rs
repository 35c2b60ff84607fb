//! Generate the listing pages

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Blog;

/// Load posts and write the Posts and Categories pages
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = ContentLoader::new(blog);
    let posts = loader.load_posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    let generator = Generator::new(blog)?;
    let written = generator.generate(&posts)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} pages in {:.2}s",
        written.len(),
        duration.as_secs_f64()
    );

    Ok(())
}
