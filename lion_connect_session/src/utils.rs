use chrono::{DateTime, Utc};
use http::header::{HeaderMap, SET_COOKIE};

pub(crate) fn header_set_cookie<'a>(
    headers: &'a mut HeaderMap,
    name: &str,
    value: &str,
    expires_at: DateTime<Utc>,
    max_age: i64,
    secure: bool,
) -> Result<&'a HeaderMap, UtilError> {
    let expires = expires_at.format("%a, %d %b %Y %H:%M:%S GMT");
    let secure_attr = if secure { "; Secure" } else { "" };
    let cookie = format!(
        "{name}={value}; SameSite=Lax{secure_attr}; Path=/; Max-Age={max_age}; Expires={expires}"
    );
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| UtilError::Cookie("Failed to parse cookie".to_string()))?,
    );
    Ok(headers)
}

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Cookie error: {0}")]
    Cookie(String),

    #[error("Invalid format: {0}")]
    Format(String),
}
