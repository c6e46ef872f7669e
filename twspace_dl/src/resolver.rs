//! Resolves profile URLs to user IDs.

use crate::error::{Result, TwspaceError};
use crate::lookup::UserIdLookup;
use crate::url_parser::extract_username;

/// Resolves profile URLs through an injected [`UserIdLookup`].
pub struct UserResolver<L> {
    lookup: L,
}

impl<L: UserIdLookup> UserResolver<L> {
    /// Create a new UserResolver.
    ///
    /// # Arguments
    /// * `lookup` - Capability used to turn usernames into user IDs
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Get the underlying lookup.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Resolve a profile URL to a user ID.
    ///
    /// `None` fails with [`TwspaceError::MissingUrl`] before any validation.
    /// A malformed URL fails with [`TwspaceError::InvalidUserUrl`] and the
    /// lookup is never consulted. Otherwise the lookup is called exactly once
    /// with the extracted username and its result is returned as is.
    pub async fn user_id_from_url(&self, url: Option<&str>) -> Result<String> {
        let url = url.ok_or(TwspaceError::MissingUrl)?;
        let username = extract_username(url)?;

        tracing::debug!(%username, "looking up user id");
        self.lookup.user_id(&username).await
    }
}
