//! twspace_dl CLI - Resolve profile URLs to user IDs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use twspace_dl::{extract_username, logging, UserDirectory, UserResolver};

/// CLI tool for resolving X/Twitter profile URLs.
#[derive(Parser)]
#[command(name = "twspace_dl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON username to user ID directory.
    #[arg(long, env = "TWSPACE_DL_USER_DIRECTORY")]
    directory: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a profile URL to a user ID.
    Resolve {
        /// Profile URL, e.g. https://x.com/<username>.
        url: Option<String>,
    },

    /// Print the username embedded in a profile URL.
    Username {
        /// Profile URL, e.g. https://x.com/<username>.
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { url } => {
            let path = cli
                .directory
                .context("A user directory is required (--directory or TWSPACE_DL_USER_DIRECTORY)")?;

            let directory = UserDirectory::from_file(&path)
                .with_context(|| format!("Failed to load user directory from {:?}", path))?;

            let resolver = UserResolver::new(directory);

            let user_id = resolver
                .user_id_from_url(url.as_deref())
                .await
                .with_context(|| format!("Failed to resolve user: {}", url.as_deref().unwrap_or("-")))?;

            println!("{}", user_id);
        }

        Commands::Username { url } => {
            let username = extract_username(&url)
                .with_context(|| format!("Invalid profile URL: {}", url))?;

            println!("{}", username);
        }
    }

    Ok(())
}
