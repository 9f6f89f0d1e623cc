//! CLI entry point for onepager

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use onepager::commands::new::NewPost;
use onepager::commands::snapshot::Interaction;

#[derive(Parser)]
#[command(name = "onepager")]
#[command(author = "Optimizing Sports")]
#[command(version = "0.1.0")]
#[command(about = "A one-page podcast, blog and social site generator", long_about = None)]
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
    /// Initialize a new site with the built-in posts
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Add a new post to the content file
    New {
        /// Title of the new post
        title: String,

        /// Post id (defaults to a slug of the title)
        #[arg(long)]
        id: Option<String>,

        /// Comma separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Short teaser shown in the collapsed card
        #[arg(long)]
        teaser: Option<String>,

        /// Body block in the inline markup; repeat for more blocks
        #[arg(long)]
        content: Vec<String>,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Serve without watching or live reload
        #[arg(long)]
        r#static: bool,
    },

    /// Clean the public folder
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Filter posts the same way the search box does
    Search {
        /// Search query
        #[arg(default_value = "")]
        query: String,
    },

    /// Render the page after a query and a sequence of clicks
    Snapshot {
        /// Search query typed before clicking
        #[arg(short, long)]
        query: Option<String>,

        /// Post ids to click, in order
        #[arg(short, long)]
        toggle: Vec<String>,

        /// Write the page to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "onepager=debug,info"
    } else {
        "onepager=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
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
            tracing::info!("Initializing site in {:?}", target_dir);
            onepager::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New {
            title,
            id,
            tags,
            teaser,
            content,
        } => {
            let site = onepager::Site::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let options = NewPost {
                title,
                id,
                tags: tags
                    .into_iter()
                    .map(|tag| tag.trim().to_string())
                    .filter(|tag| !tag.is_empty())
                    .collect(),
                teaser,
                content,
            };
            let post = onepager::commands::new::create_post(&site, &options)?;
            println!("Created post {}", post.id);
        }

        Commands::Generate { watch } => {
            let site = onepager::Site::new(&base_dir)?;
            tracing::info!("Generating static files...");

            onepager::commands::generate::run(&site)?;
            println!("Generated successfully!");

            if watch {
                tracing::info!("Watching for file changes...");
                onepager::commands::generate::watch(&site).await?;
            }
        }

        Commands::Server {
            port,
            ip,
            r#static,
        } => {
            let site = onepager::Site::new(&base_dir)?;

            // Generate first
            tracing::info!("Generating static files...");
            site.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            onepager::server::start(&site, &ip, port, !r#static).await?;
        }

        Commands::Clean => {
            let site = onepager::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = onepager::Site::new(&base_dir)?;
            onepager::commands::list::run(&site, &r#type)?;
        }

        Commands::Search { query } => {
            let site = onepager::Site::new(&base_dir)?;
            onepager::commands::search::run(&site, &query)?;
        }

        Commands::Snapshot {
            query,
            toggle,
            output,
        } => {
            let site = onepager::Site::new(&base_dir)?;
            let mut interactions = Vec::new();
            if let Some(query) = query {
                interactions.push(Interaction::Query(query));
            }
            interactions.extend(toggle.into_iter().map(Interaction::Toggle));
            onepager::commands::snapshot::run(&site, &interactions, output.as_deref())?;
        }

        Commands::Version => {
            println!("onepager version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
