//! Central configuration for the lion-connect-session crate
//!
//! Every knob is an environment variable read once into a `LazyLock`
//! static, with a default suitable for local development.

use std::sync::LazyLock;

/// Base URL of the Lion Connect REST backend.
pub static LC_API_BASE_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("LC_API_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
});

/// Request timeout for backend calls, in seconds.
pub static LC_API_TIMEOUT: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("LC_API_TIMEOUT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10)
});

/// Base backoff before the single automatic retry, in milliseconds.
pub static LC_API_RETRY_BACKOFF_MS: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("LC_API_RETRY_BACKOFF_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(250)
});

/// Ceiling for the retry backoff, in milliseconds.
pub static LC_API_RETRY_BACKOFF_CAP_MS: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("LC_API_RETRY_BACKOFF_CAP_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1000)
});

/// Name of the role cookie mirrored for the route gate.
pub static LC_ROLES_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("LC_ROLES_COOKIE_NAME").unwrap_or_else(|_| "lc_roles".to_string())
});

/// Lifetime of the role cookie in seconds. Matches the refresh
/// credential's expiry window, 7 days by default.
pub static LC_ROLES_COOKIE_MAX_AGE: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("LC_ROLES_COOKIE_MAX_AGE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(604800)
});

/// Whether cookies carry the `Secure` attribute. Set to "false" only for
/// plain-HTTP local development.
pub static LC_COOKIE_SECURE: LazyLock<bool> = LazyLock::new(|| {
    std::env::var("LC_COOKIE_SECURE")
        .map(|val| val.to_lowercase() != "false")
        .unwrap_or(true)
});

/// URL of the durable client store backing the persisted user record.
/// Supported schemes: `memory://` and `file://<path>`.
pub static LC_CLIENT_STORE_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("LC_CLIENT_STORE_URL").unwrap_or_else(|_| "memory://".to_string())
});

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use std::env;

    /// Helper function to set an environment variable for the duration of the test
    /// and restore the original value afterward.
    fn with_env_var<F, R>(key: &str, value: Option<&str>, test: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::var(key).ok();

        match value {
            Some(val) => unsafe { env::set_var(key, val) },
            None => unsafe { env::remove_var(key) },
        }

        let result = test();

        match original {
            Some(val) => unsafe { env::set_var(key, val) },
            None => unsafe { env::remove_var(key) },
        }

        result
    }

    #[test]
    #[serial]
    fn test_parse_roles_cookie_name() {
        with_env_var("LC_ROLES_COOKIE_NAME", None, || {
            let default_value =
                env::var("LC_ROLES_COOKIE_NAME").unwrap_or_else(|_| "lc_roles".to_string());
            assert_eq!(default_value, "lc_roles");
        });

        with_env_var("LC_ROLES_COOKIE_NAME", Some("lion_roles"), || {
            let custom_value =
                env::var("LC_ROLES_COOKIE_NAME").unwrap_or_else(|_| "lc_roles".to_string());
            assert_eq!(custom_value, "lion_roles");
        });
    }

    #[test]
    #[serial]
    fn test_parse_roles_cookie_max_age() {
        with_env_var("LC_ROLES_COOKIE_MAX_AGE", None, || {
            let default_value = env::var("LC_ROLES_COOKIE_MAX_AGE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800u64);
            assert_eq!(default_value, 604800); // 7 days
        });

        with_env_var("LC_ROLES_COOKIE_MAX_AGE", Some("86400"), || {
            let custom_value = env::var("LC_ROLES_COOKIE_MAX_AGE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800u64);
            assert_eq!(custom_value, 86400);
        });

        with_env_var("LC_ROLES_COOKIE_MAX_AGE", Some("invalid"), || {
            let invalid_value = env::var("LC_ROLES_COOKIE_MAX_AGE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800u64);
            assert_eq!(invalid_value, 604800); // falls back to default
        });
    }

    #[test]
    #[serial]
    fn test_parse_cookie_secure() {
        with_env_var("LC_COOKIE_SECURE", None, || {
            let default_value = env::var("LC_COOKIE_SECURE")
                .map(|val| val.to_lowercase() != "false")
                .unwrap_or(true);
            assert!(default_value);
        });

        with_env_var("LC_COOKIE_SECURE", Some("false"), || {
            let custom_value = env::var("LC_COOKIE_SECURE")
                .map(|val| val.to_lowercase() != "false")
                .unwrap_or(true);
            assert!(!custom_value);
        });

        with_env_var("LC_COOKIE_SECURE", Some("FALSE"), || {
            let custom_value = env::var("LC_COOKIE_SECURE")
                .map(|val| val.to_lowercase() != "false")
                .unwrap_or(true);
            assert!(!custom_value);
        });

        // Any value other than "false" keeps the Secure attribute on
        with_env_var("LC_COOKIE_SECURE", Some("anything"), || {
            let custom_value = env::var("LC_COOKIE_SECURE")
                .map(|val| val.to_lowercase() != "false")
                .unwrap_or(true);
            assert!(custom_value);
        });
    }

    #[test]
    #[serial]
    fn test_parse_api_base_url() {
        with_env_var("LC_API_BASE_URL", None, || {
            let default_value =
                env::var("LC_API_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());
            assert_eq!(default_value, "http://localhost:3001");
        });

        with_env_var("LC_API_BASE_URL", Some("https://api.lion-connect.example"), || {
            let custom_value =
                env::var("LC_API_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());
            assert_eq!(custom_value, "https://api.lion-connect.example");
        });
    }
}
