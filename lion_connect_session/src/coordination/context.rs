use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

use crate::api::{AuthApi, HttpAuthApi};
use crate::session::{REMEMBERED_EMAIL_KEY, Session, SessionStore};
use crate::storage::{ClientStore, client_store_from_env};

use super::errors::CoordinationError;

/// Application-root-scoped owner of the session subsystem.
///
/// Created once at startup, passed explicitly to whatever consumes it;
/// there is no ambient global. Owns the credential store, the backend
/// client and the once-per-process recovery latch.
pub struct AuthContext {
    pub(super) session: SessionStore,
    pub(super) api: Box<dyn AuthApi>,
    pub(super) store: Arc<Mutex<Box<dyn ClientStore>>>,
    pub(super) recovery: OnceCell<()>,
}

impl AuthContext {
    /// Initialize the durable store and hydrate the persisted user.
    /// The session stays unauthenticated until `recover_session` or an
    /// explicit login supplies a token.
    pub async fn new(
        api: Box<dyn AuthApi>,
        store: Box<dyn ClientStore>,
    ) -> Result<Self, CoordinationError> {
        store.init().await?;
        let store = Arc::new(Mutex::new(store));
        let session = SessionStore::new(store.clone());

        let context = Self {
            session,
            api,
            store,
            recovery: OnceCell::new(),
        };
        context.session.hydrate().await;
        Ok(context)
    }

    /// Build a context from `LC_API_BASE_URL` and `LC_CLIENT_STORE_URL`.
    pub async fn from_env() -> Result<Self, CoordinationError> {
        let api = HttpAuthApi::from_env()?;
        let store = client_store_from_env()?;
        Self::new(Box::new(api), store).await
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Owned view of the current authentication state.
    pub async fn get_session(&self) -> Session {
        self.session.snapshot().await
    }

    /// The email remembered at a previous login, if the user opted in.
    /// Lives outside the session lifecycle; logout does not clear it.
    pub async fn remembered_email(&self) -> Option<String> {
        match self.store.lock().await.get(REMEMBERED_EMAIL_KEY).await {
            Ok(data) => data.map(|d| d.value),
            Err(e) => {
                tracing::warn!("Failed to read remembered email: {e}");
                None
            }
        }
    }
}
