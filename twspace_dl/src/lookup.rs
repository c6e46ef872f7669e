//! Username to user ID lookup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{Result, TwspaceError};

/// Resolves a username to the platform's opaque user ID.
#[async_trait]
pub trait UserIdLookup: Send + Sync {
    async fn user_id(&self, username: &str) -> Result<String>;
}

#[async_trait]
impl<T: UserIdLookup + ?Sized> UserIdLookup for Arc<T> {
    async fn user_id(&self, username: &str) -> Result<String> {
        (**self).user_id(username).await
    }
}

#[async_trait]
impl<T: UserIdLookup + ?Sized> UserIdLookup for &T {
    async fn user_id(&self, username: &str) -> Result<String> {
        (**self).user_id(username).await
    }
}

/// Offline lookup backed by a username to user ID table.
///
/// The table is a flat JSON object:
///
/// ```json
/// { "protosphinx": "123456789" }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct UserDirectory {
    users: HashMap<String, String>,
}

impl UserDirectory {
    /// Create a directory from an in-memory table.
    pub fn new(users: HashMap<String, String>) -> Self {
        Self { users }
    }

    /// Load a directory from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let directory = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            users = directory.len(),
            "loaded user directory"
        );
        Ok(directory)
    }

    /// Parse a directory from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserIdLookup for UserDirectory {
    async fn user_id(&self, username: &str) -> Result<String> {
        self.users
            .get(username)
            .cloned()
            .ok_or_else(|| TwspaceError::UserNotFound(username.to_string()))
    }
}
