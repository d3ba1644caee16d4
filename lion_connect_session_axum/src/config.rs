//! Central configuration for the lion-connect-session-axum crate

use std::sync::LazyLock;

/// URL of the login surface anonymous visitors are sent to.
/// Default: "/login"
pub static LC_LOGIN_URL: LazyLock<String> =
    LazyLock::new(|| std::env::var("LC_LOGIN_URL").unwrap_or_else(|_| "/login".to_string()));

/// Query parameter carrying the originally requested path through the
/// login redirect.
/// Default: "return_to"
pub static LC_RETURN_TO_PARAM: LazyLock<String> = LazyLock::new(|| {
    std::env::var("LC_RETURN_TO_PARAM").unwrap_or_else(|_| "return_to".to_string())
});
