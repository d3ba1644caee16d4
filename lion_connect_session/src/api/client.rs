use async_trait::async_trait;
use http::StatusCode;
use std::future::Future;
use std::time::Duration;

use crate::config::{
    LC_API_BASE_URL, LC_API_RETRY_BACKOFF_CAP_MS, LC_API_RETRY_BACKOFF_MS, LC_API_TIMEOUT,
};

use super::errors::ApiError;
use super::types::{
    ApiUser, LoginOutcome, LoginRequest, SignupRequest, SignupResponse, TokenGrant, ValidationBody,
};

/// The four backend operations the session subsystem consumes. Transport
/// details live behind this trait; tests substitute their own
/// implementation.
#[async_trait]
pub trait AuthApi: Send + Sync + 'static {
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, ApiError>;

    async fn signup(&self, request: &SignupRequest) -> Result<ApiUser, ApiError>;

    /// Exchange the durable refresh credential for a fresh access token.
    /// The credential itself never passes through this subsystem; the
    /// HTTP client attaches it implicitly.
    async fn recover_token(&self) -> Result<TokenGrant, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;
}

/// Run `op`, retrying exactly once on a connectivity failure with a
/// capped exponential backoff. Semantic failures pass through untouched.
pub(crate) async fn call_with_retry<T, F, Fut>(op_name: &str, op: F) -> Result<T, ApiError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    const MAX_RETRIES: u32 = 1;

    let mut attempt = 0;
    loop {
        match op().await {
            Err(err) if err.is_retryable() && attempt < MAX_RETRIES => {
                let backoff =
                    (*LC_API_RETRY_BACKOFF_MS << attempt).min(*LC_API_RETRY_BACKOFF_CAP_MS);
                tracing::warn!("{op_name} failed ({err}), retrying in {backoff}ms");
                tokio::time::sleep(Duration::from_millis(backoff)).await;
                attempt += 1;
            }
            other => return other,
        }
    }
}

/// `AuthApi` over the Lion Connect REST backend.
///
/// The underlying client keeps a cookie store so the refresh credential
/// set by the backend on login rides along with every later request.
pub struct HttpAuthApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(*LC_API_TIMEOUT))
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Build a client against the backend named by `LC_API_BASE_URL`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(LC_API_BASE_URL.as_str())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(self.endpoint("/auth/login"))
            .json(&request)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::UNAUTHORIZED => Err(ApiError::InvalidCredentials),
            status => Err(ApiError::Status(status.as_u16())),
        }
    }

    async fn signup(&self, request: &SignupRequest) -> Result<ApiUser, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/auth/signup"))
            .json(request)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let body: SignupResponse = response.json().await?;
                Ok(body.user)
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let errors = match response.json::<ValidationBody>().await {
                    Ok(body) => body.errors,
                    Err(_) => Vec::new(),
                };
                Err(ApiError::Validation(errors))
            }
            status => Err(ApiError::Status(status.as_u16())),
        }
    }

    async fn recover_token(&self) -> Result<TokenGrant, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/auth/token/refresh"))
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::UNAUTHORIZED => Err(ApiError::NoSession),
            status => Err(ApiError::Status(status.as_u16())),
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let response = self.client.post(self.endpoint("/auth/logout")).send().await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            status => Err(ApiError::Status(status.as_u16())),
        }
    }
}
