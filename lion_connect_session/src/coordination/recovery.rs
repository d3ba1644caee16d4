//! Session recovery: exchange the durable refresh credential for a
//! fresh access token, exactly once per process lifetime.

use super::context::AuthContext;

impl AuthContext {
    /// Attempt to recover the session from the durable refresh
    /// credential. Runs at most once per context; concurrent invocations
    /// (e.g. two near-simultaneous mounts) collapse to a single network
    /// call, later ones returning after the first completes.
    ///
    /// Failure is the expected steady state for a never-logged-in
    /// visitor and is swallowed; only the initialized flag transition is
    /// observable. A recovered token without a hydrated user is
    /// discarded by the credential store rather than fabricating an
    /// identity from a bare token.
    pub async fn recover_session(&self) {
        self.recovery
            .get_or_init(|| async {
                if self.session.is_initialized().await {
                    tracing::debug!("Session already initialized, skipping recovery");
                    return;
                }

                match self.api.recover_token().await {
                    Ok(grant) => {
                        tracing::debug!("Recovered access token from refresh credential");
                        self.session.update_access_token(grant.access_token).await;
                    }
                    Err(e) => {
                        tracing::debug!("Session recovery failed: {e}");
                    }
                }

                self.session.set_initialized(true).await;
            })
            .await;
    }
}
