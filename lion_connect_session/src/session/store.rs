use std::sync::Arc;
use tokio::sync::Mutex;

use crate::session::types::{Session, SessionUser};
use crate::storage::{ClientStore, StoreData};

pub(crate) const USER_STORE_KEY: &str = "lc.session_user";
pub(crate) const REMEMBERED_EMAIL_KEY: &str = "lc.remembered_email";

#[derive(Debug)]
struct SessionState {
    access_token: Option<String>,
    user: Option<SessionUser>,
    initialized: bool,
}

/// Exclusive owner of the in-process authentication state.
///
/// The access token lives only here, in volatile memory. The user record
/// is written through to the durable client store on every mutation so a
/// restarted process can display it while recovery runs. Invariant: a
/// token is never held without a user.
pub struct SessionStore {
    state: Mutex<SessionState>,
    store: Arc<Mutex<Box<dyn ClientStore>>>,
}

impl SessionStore {
    pub(crate) fn new(store: Arc<Mutex<Box<dyn ClientStore>>>) -> Self {
        Self {
            state: Mutex::new(SessionState {
                access_token: None,
                user: None,
                initialized: false,
            }),
            store,
        }
    }

    /// Load the persisted user record, if any. The token stays empty;
    /// a hydrated user without a token reads as not authenticated.
    pub async fn hydrate(&self) {
        let mut state = self.state.lock().await;

        let data = match self.store.lock().await.get(USER_STORE_KEY).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Failed to read persisted user: {e}");
                return;
            }
        };

        if let Some(data) = data {
            match SessionUser::try_from(data) {
                Ok(user) => {
                    tracing::debug!(user_id = %user.id, "Hydrated user from client store");
                    state.user = Some(user);
                }
                Err(e) => tracing::warn!("Discarding unreadable persisted user: {e}"),
            }
        }
    }

    /// Replace token and user unconditionally. The token's shape is the
    /// network layer's trust boundary, not validated here.
    pub async fn set_auth(&self, access_token: String, user: SessionUser) {
        let mut state = self.state.lock().await;
        state.access_token = Some(access_token);
        state.user = Some(user.clone());
        self.persist_user(&user).await;
    }

    /// Replace only the token, preserving the user. Without a user this
    /// is a silent no-op: recovery may race an unrelated logout, and a
    /// token must never exist without an identity.
    pub async fn update_access_token(&self, access_token: String) {
        let mut state = self.state.lock().await;
        if state.user.is_none() {
            tracing::debug!("Ignoring access token update without a user");
            return;
        }
        state.access_token = Some(access_token);
    }

    /// Drop token and user. The role cookie is the caller's to
    /// invalidate alongside this.
    pub async fn clear_auth(&self) {
        let mut state = self.state.lock().await;
        state.access_token = None;
        state.user = None;

        if let Err(e) = self.store.lock().await.remove(USER_STORE_KEY).await {
            tracing::warn!("Failed to remove persisted user: {e}");
        }
    }

    /// One-way latch in practice; repeated calls are harmless.
    pub async fn set_initialized(&self, initialized: bool) {
        self.state.lock().await.initialized = initialized;
    }

    pub async fn is_initialized(&self) -> bool {
        self.state.lock().await.initialized
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.lock().await.access_token.is_some()
    }

    pub async fn snapshot(&self) -> Session {
        let state = self.state.lock().await;
        Session {
            access_token: state.access_token.clone(),
            user: state.user.clone(),
            initialized: state.initialized,
        }
    }

    /// Best-effort write-through; in-memory state stays authoritative
    /// when the durable copy cannot be written.
    async fn persist_user(&self, user: &SessionUser) {
        if let Err(e) = self
            .store
            .lock()
            .await
            .put(USER_STORE_KEY, StoreData::from(user))
            .await
        {
            tracing::warn!("Failed to persist user: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryClientStore;
    use proptest::prelude::*;

    fn new_store() -> (SessionStore, Arc<Mutex<Box<dyn ClientStore>>>) {
        let backing: Arc<Mutex<Box<dyn ClientStore>>> =
            Arc::new(Mutex::new(Box::new(InMemoryClientStore::new())));
        (SessionStore::new(backing.clone()), backing)
    }

    fn talent() -> SessionUser {
        SessionUser {
            id: "1".to_string(),
            name: "A".to_string(),
            roles: vec!["TALENT".to_string()],
        }
    }

    #[tokio::test]
    async fn test_set_auth_then_clear_auth() {
        let (session, _) = new_store();

        session.set_auth("tok-1".to_string(), talent()).await;
        assert!(session.is_authenticated().await);

        session.clear_auth().await;
        let snapshot = session.snapshot().await;
        assert!(snapshot.access_token.is_none());
        assert!(snapshot.user.is_none());
        assert!(!snapshot.is_authenticated());
    }

    #[tokio::test]
    async fn test_update_access_token_without_user_is_a_no_op() {
        let (session, _) = new_store();

        session.update_access_token("tok-orphan".to_string()).await;

        let snapshot = session.snapshot().await;
        assert!(snapshot.access_token.is_none());
        assert!(snapshot.user.is_none());
        assert!(!snapshot.is_authenticated());
    }

    #[tokio::test]
    async fn test_update_access_token_preserves_user() {
        let (session, _) = new_store();
        session.set_auth("tok-1".to_string(), talent()).await;

        session.update_access_token("tok-2".to_string()).await;

        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.access_token.as_deref(), Some("tok-2"));
        assert_eq!(snapshot.user, Some(talent()));
    }

    #[tokio::test]
    async fn test_set_auth_persists_user_and_clear_auth_removes_it() {
        let (session, backing) = new_store();

        session.set_auth("tok-1".to_string(), talent()).await;
        let stored = backing.lock().await.get(USER_STORE_KEY).await.unwrap();
        let stored_user = SessionUser::try_from(stored.unwrap()).unwrap();
        assert_eq!(stored_user, talent());

        session.clear_auth().await;
        assert!(backing.lock().await.get(USER_STORE_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_access_token_is_never_persisted() {
        let (session, backing) = new_store();
        session.set_auth("tok-secret".to_string(), talent()).await;

        let stored = backing.lock().await.get(USER_STORE_KEY).await.unwrap().unwrap();
        assert!(!stored.value.contains("tok-secret"));
    }

    #[tokio::test]
    async fn test_hydrate_populates_user_but_not_token() {
        let (first, backing) = new_store();
        first.set_auth("tok-1".to_string(), talent()).await;

        // A fresh store over the same backing simulates a reload
        let second = SessionStore::new(backing);
        second.hydrate().await;

        let snapshot = second.snapshot().await;
        assert_eq!(snapshot.user, Some(talent()));
        assert!(snapshot.access_token.is_none());
        assert!(!snapshot.is_authenticated());
        assert!(!snapshot.initialized);
    }

    #[tokio::test]
    async fn test_hydrate_survives_corrupt_record() {
        let (session, backing) = new_store();
        backing
            .lock()
            .await
            .put(
                USER_STORE_KEY,
                StoreData {
                    value: "not json".to_string(),
                },
            )
            .await
            .unwrap();

        session.hydrate().await;

        let snapshot = session.snapshot().await;
        assert!(snapshot.user.is_none());
    }

    #[tokio::test]
    async fn test_set_initialized_is_idempotent() {
        let (session, _) = new_store();
        assert!(!session.is_initialized().await);

        session.set_initialized(true).await;
        session.set_initialized(true).await;
        assert!(session.is_initialized().await);
    }

    #[derive(Debug, Clone)]
    enum Op {
        SetAuth(String),
        UpdateToken(String),
        ClearAuth,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[a-z]{1,8}".prop_map(Op::SetAuth),
            "[a-z]{1,8}".prop_map(Op::UpdateToken),
            Just(Op::ClearAuth),
        ]
    }

    proptest! {
        /// For every sequence of store operations, `is_authenticated`
        /// equals token presence at every observation point, and a token
        /// is never held without a user.
        #[test]
        fn prop_is_authenticated_tracks_token(ops in proptest::collection::vec(op_strategy(), 0..24)) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            rt.block_on(async {
                let (session, _) = new_store();

                for op in ops {
                    match op {
                        Op::SetAuth(token) => session.set_auth(token, talent()).await,
                        Op::UpdateToken(token) => session.update_access_token(token).await,
                        Op::ClearAuth => session.clear_auth().await,
                    }

                    let snapshot = session.snapshot().await;
                    prop_assert_eq!(
                        snapshot.is_authenticated(),
                        snapshot.access_token.is_some()
                    );
                    if snapshot.access_token.is_some() {
                        prop_assert!(snapshot.user.is_some());
                    }
                }
                Ok(())
            })?;
        }
    }
}
