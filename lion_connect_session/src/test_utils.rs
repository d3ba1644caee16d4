//! Test doubles shared by the unit tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

use crate::api::{ApiError, ApiUser, AuthApi, LoginOutcome, SignupRequest, TokenGrant};

pub(crate) fn talent_user() -> ApiUser {
    ApiUser {
        id: "1".to_string(),
        name: "A".to_string(),
        roles: vec!["TALENT".to_string()],
    }
}

/// Scripted `AuthApi` with per-operation call counters. Login responses
/// are consumed in order so retry behavior can be scripted; the other
/// operations replay a fixed response. Counters are `Arc`s so a test can
/// keep a handle after the mock disappears behind `Box<dyn AuthApi>`.
pub(crate) struct MockAuthApi {
    pub(crate) login_responses: Mutex<VecDeque<Result<LoginOutcome, ApiError>>>,
    pub(crate) recover_response: Result<TokenGrant, ApiError>,
    pub(crate) logout_response: Result<(), ApiError>,
    pub(crate) signup_response: Result<ApiUser, ApiError>,
    pub(crate) login_calls: Arc<AtomicUsize>,
    pub(crate) recover_calls: Arc<AtomicUsize>,
    pub(crate) logout_calls: Arc<AtomicUsize>,
    pub(crate) signup_calls: Arc<AtomicUsize>,
}

impl Default for MockAuthApi {
    fn default() -> Self {
        Self {
            login_responses: Mutex::new(VecDeque::new()),
            recover_response: Err(ApiError::NoSession),
            logout_response: Ok(()),
            signup_response: Ok(talent_user()),
            login_calls: Arc::new(AtomicUsize::new(0)),
            recover_calls: Arc::new(AtomicUsize::new(0)),
            logout_calls: Arc::new(AtomicUsize::new(0)),
            signup_calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl MockAuthApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_login(self, response: Result<LoginOutcome, ApiError>) -> Self {
        self.login_responses
            .try_lock()
            .expect("unlocked during setup")
            .push_back(response);
        self
    }

    pub(crate) fn with_recover(mut self, response: Result<TokenGrant, ApiError>) -> Self {
        self.recover_response = response;
        self
    }

    pub(crate) fn with_logout(mut self, response: Result<(), ApiError>) -> Self {
        self.logout_response = response;
        self
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn login(&self, _email: &str, _password: &str) -> Result<LoginOutcome, ApiError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.login_responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted login response".to_string())))
    }

    async fn signup(&self, _request: &SignupRequest) -> Result<ApiUser, ApiError> {
        self.signup_calls.fetch_add(1, Ordering::SeqCst);
        self.signup_response.clone()
    }

    async fn recover_token(&self) -> Result<TokenGrant, ApiError> {
        self.recover_calls.fetch_add(1, Ordering::SeqCst);
        self.recover_response.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        self.logout_response.clone()
    }
}
