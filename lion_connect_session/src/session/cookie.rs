//! The role cookie is a derived, non-authoritative mirror of
//! `user.roles` for the route gate. Deleting or forging it changes only
//! client-side redirects; real authorization happens server-side against
//! the access token. Every operation here degrades to a no-op or an
//! empty result instead of failing.

use chrono::{Duration, Utc};
use http::header::{COOKIE, HeaderMap};

use crate::config::{LC_COOKIE_SECURE, LC_ROLES_COOKIE_MAX_AGE, LC_ROLES_COOKIE_NAME};
use crate::utils::header_set_cookie;

/// Append a `Set-Cookie` header mirroring `roles`, overwriting any
/// existing value. The payload is a URL-encoded JSON array.
pub fn set_roles_cookie(headers: &mut HeaderMap, roles: &[String]) {
    let payload = match serde_json::to_string(roles) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("Failed to serialize roles for cookie: {e}");
            return;
        }
    };
    let value = urlencoding::encode(&payload).into_owned();
    let max_age = *LC_ROLES_COOKIE_MAX_AGE as i64;
    let expires_at = Utc::now() + Duration::seconds(max_age);

    if let Err(e) = header_set_cookie(
        headers,
        LC_ROLES_COOKIE_NAME.as_str(),
        &value,
        expires_at,
        max_age,
        *LC_COOKIE_SECURE,
    ) {
        tracing::warn!("Failed to set roles cookie: {e}");
    }
}

/// Append a `Set-Cookie` header that expires the role cookie
/// immediately.
pub fn clear_roles_cookie(headers: &mut HeaderMap) {
    if let Err(e) = header_set_cookie(
        headers,
        LC_ROLES_COOKIE_NAME.as_str(),
        "",
        Utc::now() - Duration::seconds(86400),
        -86400,
        *LC_COOKIE_SECURE,
    ) {
        tracing::warn!("Failed to clear roles cookie: {e}");
    }
}

/// Best-effort parse of the role cookie from a request `Cookie` header.
/// Missing cookie, malformed JSON and non-array payloads all read as an
/// empty role list.
pub fn read_roles_cookie(headers: &HeaderMap) -> Vec<String> {
    let Some(cookie_header) = headers.get(COOKIE) else {
        return Vec::new();
    };
    let Ok(cookie_str) = cookie_header.to_str() else {
        return Vec::new();
    };

    let cookie_name = LC_ROLES_COOKIE_NAME.as_str();
    let Some(raw) = cookie_str.split(';').map(str::trim).find_map(|s| {
        let mut parts = s.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(k), Some(v)) if k == cookie_name => Some(v),
            _ => None,
        }
    }) else {
        return Vec::new();
    };

    let Ok(decoded) = urlencoding::decode(raw) else {
        return Vec::new();
    };

    serde_json::from_str::<Vec<String>>(&decoded).unwrap_or_default()
}
