use serde::{Deserialize, Serialize};

use crate::api::ApiUser;
use crate::session::errors::SessionError;
use crate::storage::StoreData;

/// The authenticated identity carried by the session. Persisted to the
/// durable client store so it can be shown immediately on reload, before
/// token recovery completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub roles: Vec<String>,
}

impl SessionUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl From<ApiUser> for SessionUser {
    fn from(user: ApiUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            roles: user.roles,
        }
    }
}

/// Owned view of the authentication state at one observation point.
///
/// `initialized` is false until session recovery has completed once;
/// callers must treat that as "still loading", not as logged-out.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub access_token: Option<String>,
    pub user: Option<SessionUser>,
    pub initialized: bool,
}

impl Session {
    /// Authentication is derived from token presence, nothing else.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

impl From<&SessionUser> for StoreData {
    fn from(user: &SessionUser) -> Self {
        Self {
            value: serde_json::to_string(user).expect("Failed to serialize SessionUser"),
        }
    }
}

impl TryFrom<StoreData> for SessionUser {
    type Error = SessionError;

    fn try_from(data: StoreData) -> Result<Self, Self::Error> {
        serde_json::from_str(&data.value).map_err(|e| SessionError::Storage(e.to_string()))
    }
}
