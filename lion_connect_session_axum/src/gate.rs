//! The route gate: request-time, role-cookie-based access decisions.
//!
//! Advisory only. The gate reads nothing but the role cookie, so a
//! forged cookie changes redirects and nothing else; the backend
//! re-checks every API call against the real access token.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;

use lion_connect_session::read_roles_cookie;

use super::config::{LC_LOGIN_URL, LC_RETURN_TO_PARAM};

#[derive(Debug, Clone)]
struct GateRule {
    prefix: String,
    required: Vec<String>,
}

/// Outcome of a gate check for one request.
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    Allow,
    /// Redirect target, login URL with the original path preserved.
    Redirect(String),
}

/// Static map of path prefixes to required roles.
///
/// Rules match whole path segments ("/admin" guards "/admin/users" but
/// not "/administrator"); the longest matching prefix wins. A rule
/// allows the request when the visitor holds any of its roles.
pub struct RouteGate {
    rules: Vec<GateRule>,
    login_url: String,
}

impl RouteGate {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            login_url: LC_LOGIN_URL.to_string(),
        }
    }

    pub fn with_login_url(mut self, login_url: impl Into<String>) -> Self {
        self.login_url = login_url.into();
        self
    }

    /// Guard `prefix` behind any of `roles`.
    pub fn require(mut self, prefix: impl Into<String>, roles: &[&str]) -> Self {
        self.rules.push(GateRule {
            prefix: prefix.into(),
            required: roles.iter().map(|r| r.to_string()).collect(),
        });
        self
    }

    fn rule_for(&self, path: &str) -> Option<&GateRule> {
        self.rules
            .iter()
            .filter(|rule| prefix_matches(&rule.prefix, path))
            .max_by_key(|rule| rule.prefix.len())
    }

    /// Decide for a request path (with optional query) and the roles
    /// read from the cookie.
    pub fn check(&self, path_and_query: &str, roles: &[String]) -> GateDecision {
        let path = path_and_query
            .split_once('?')
            .map_or(path_and_query, |(path, _)| path);

        let Some(rule) = self.rule_for(path) else {
            return GateDecision::Allow;
        };

        if rule.required.iter().any(|required| roles.contains(required)) {
            return GateDecision::Allow;
        }

        tracing::debug!(
            path,
            required = ?rule.required,
            held = ?roles,
            "Route gate denied, redirecting to login"
        );
        GateDecision::Redirect(format!(
            "{}?{}={}",
            self.login_url,
            LC_RETURN_TO_PARAM.as_str(),
            urlencoding::encode(path_and_query)
        ))
    }
}

impl Default for RouteGate {
    fn default() -> Self {
        Self::new()
    }
}

fn prefix_matches(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Middleware adapter for `RouteGate`, for
/// `axum::middleware::from_fn_with_state`.
pub async fn role_gate(State(gate): State<Arc<RouteGate>>, req: Request, next: Next) -> Response {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| req.uri().path())
        .to_string();
    let roles = read_roles_cookie(req.headers());

    match gate.check(&path_and_query, &roles) {
        GateDecision::Allow => next.run(req).await,
        GateDecision::Redirect(target) => Redirect::temporary(&target).into_response(),
    }
}
