//! Auth operations: login, logout, signup.
//!
//! Each operation owns both of its side-effect targets explicitly (the
//! credential store and the role cookie) so the two cannot drift apart
//! through implicit coupling.

use http::HeaderMap;

use crate::api::{SignupRequest, call_with_retry};
use crate::session::{SessionUser, clear_roles_cookie, set_roles_cookie};
use crate::storage::StoreData;

use super::context::AuthContext;
use super::errors::CoordinationError;

/// Login form data. `remember_email` is the explicit opt-in for storing
/// the email in the durable client store.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
    pub remember_email: bool,
}

impl AuthContext {
    /// Authenticate against the backend. On success the credential store
    /// and the role cookie are updated together; the returned `HeaderMap`
    /// carries the `Set-Cookie` for the response. On failure the session
    /// is untouched and the error propagates to the caller.
    ///
    /// The network call gets at most one automatic retry, and only for
    /// connectivity failures; bad credentials are final.
    pub async fn login(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<(SessionUser, HeaderMap), CoordinationError> {
        let outcome = call_with_retry("login", || {
            self.api.login(&credentials.email, &credentials.password)
        })
        .await?;

        let user = SessionUser::from(outcome.user);
        tracing::info!(user_id = %user.id, "Login succeeded");

        self.session.set_auth(outcome.access_token, user.clone()).await;

        let mut headers = HeaderMap::new();
        set_roles_cookie(&mut headers, &user.roles);

        self.update_remembered_email(credentials).await;

        Ok((user, headers))
    }

    /// Invalidate the durable credential server-side, best-effort, then
    /// unconditionally drop the local session and expire the role
    /// cookie. Local state must never stay logged-in just because the
    /// network call failed. Navigation to the login surface is the
    /// caller's responsibility.
    pub async fn logout(&self) -> HeaderMap {
        if let Err(e) = self.api.logout().await {
            tracing::warn!("Network logout failed, proceeding with local cleanup: {e}");
        }

        self.session.clear_auth().await;

        let mut headers = HeaderMap::new();
        clear_roles_cookie(&mut headers);
        headers
    }

    /// Create an account. The session is not mutated; the user still has
    /// to log in afterward. Not retried: a repeated signup is not
    /// idempotent.
    pub async fn signup(&self, request: &SignupRequest) -> Result<SessionUser, CoordinationError> {
        let user = self.api.signup(request).await?;
        tracing::info!(user_id = %user.id, "Signup succeeded");
        Ok(SessionUser::from(user))
    }

    /// Store or drop the remembered email per the opt-in flag.
    /// Best-effort: a storage failure never fails the login.
    async fn update_remembered_email(&self, credentials: &LoginCredentials) {
        use crate::session::REMEMBERED_EMAIL_KEY;

        let result = if credentials.remember_email {
            self.store
                .lock()
                .await
                .put(
                    REMEMBERED_EMAIL_KEY,
                    StoreData {
                        value: credentials.email.clone(),
                    },
                )
                .await
        } else {
            self.store.lock().await.remove(REMEMBERED_EMAIL_KEY).await
        };

        if let Err(e) = result {
            tracing::warn!("Failed to update remembered email: {e}");
        }
    }
}
