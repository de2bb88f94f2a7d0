//! services/portal/src/adapters/storage.rs
//!
//! File-backed implementation of the `CredentialStore` port: one small JSON
//! document holding the two fixed entries written at login success and read
//! back at application start.

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::{Map, Value};
use taskhive_core::domain::AuthSession;
use taskhive_core::ports::{CredentialStore, PortError, PortResult};

/// Storage key for the session token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken-TH";
/// Storage key for the authenticated user's id.
pub const USER_ID_KEY: &str = "userId-TH";

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A credential store that persists the session pair as a JSON document.
#[derive(Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Creates a new `FileCredentialStore` backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_entries(&self) -> PortResult<Map<String, Value>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str::<Map<String, Value>>(&raw)
                .map_err(|e| PortError::Unexpected(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(PortError::Unexpected(e.to_string())),
        }
    }
}

//=========================================================================================
// `CredentialStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn save(&self, session: &AuthSession) -> PortResult<()> {
        let mut entries = self.read_entries().await?;
        entries.insert(
            ACCESS_TOKEN_KEY.to_string(),
            Value::String(session.token.clone()),
        );
        entries.insert(
            USER_ID_KEY.to_string(),
            Value::String(session.user_id.clone()),
        );

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| PortError::Unexpected(e.to_string()))?;
            }
        }
        let raw = serde_json::to_string_pretty(&Value::Object(entries))
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))
    }

    async fn load(&self) -> PortResult<Option<AuthSession>> {
        let entries = self.read_entries().await?;
        let token = entries.get(ACCESS_TOKEN_KEY).and_then(Value::as_str);
        let user_id = entries.get(USER_ID_KEY).and_then(Value::as_str);
        // Both entries are required for a usable session.
        match (token, user_id) {
            (Some(token), Some(user_id)) => Ok(Some(AuthSession {
                token: token.to_string(),
                user_id: user_id.to_string(),
            })),
            _ => Ok(None),
        }
    }
}
