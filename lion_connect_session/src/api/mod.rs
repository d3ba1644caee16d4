mod client;
mod errors;
mod types;

pub use client::{AuthApi, HttpAuthApi};
pub(crate) use client::call_with_retry;
pub use errors::ApiError;
pub use types::{ApiUser, FieldError, LoginOutcome, SignupRequest, TokenGrant};
