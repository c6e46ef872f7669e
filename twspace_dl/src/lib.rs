//! twspace_dl - Resolve X/Twitter profile URLs to user IDs.
//!
//! This library provides functionality to:
//! - Extract the username from a profile URL (`x.com` or `twitter.com`)
//! - Resolve that username to a user ID through a pluggable lookup
//! - Load an offline username to user ID directory from JSON
//!
//! # Example
//!
//! ```no_run
//! use twspace_dl::{UserDirectory, UserResolver};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let directory = UserDirectory::from_file("users.json")?;
//!     let resolver = UserResolver::new(directory);
//!
//!     let user_id = resolver
//!         .user_id_from_url(Some("https://x.com/protosphinx"))
//!         .await?;
//!     println!("{}", user_id);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;
pub mod lookup;
pub mod resolver;
pub mod url_parser;

// Re-exports for convenience
pub use error::{Result, TwspaceError};
pub use lookup::{UserDirectory, UserIdLookup};
pub use resolver::UserResolver;
pub use url_parser::extract_username;
