//! CLI entry point for postroll

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postroll")]
#[command(version)]
#[command(about = "Posts and categories listings for a Markdown blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new blog
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Put it in _drafts instead of _posts
        #[arg(long)]
        draft: bool,
    },

    /// Render the Posts and Categories pages
    #[command(alias = "g")]
    Generate,

    /// Remove the public folder
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, category, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "postroll=debug,info"
    } else {
        "postroll=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing blog in {:?}", target_dir);
            postroll::commands::init::init_site(&target_dir)?;
            println!("Initialized empty blog in {:?}", target_dir);
        }

        Commands::New { title, draft } => {
            let blog = postroll::Blog::new(&base_dir)?;
            let path = blog.new_post(&title, draft)?;
            println!("Created: {:?}", path);
        }

        Commands::Generate => {
            let blog = postroll::Blog::new(&base_dir)?;
            tracing::info!("Generating listing pages...");
            blog.generate()?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let blog = postroll::Blog::new(&base_dir)?;
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let blog = postroll::Blog::new(&base_dir)?;
            postroll::commands::list::run(&blog, &r#type)?;
        }

        Commands::Version => {
            println!("postroll version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
