use axum::extract::FromRequestParts;
use http::request::Parts;
use std::convert::Infallible;

use lion_connect_session::read_roles_cookie;

/// Roles read from the role cookie, available as an extractor.
///
/// Never rejects: a missing or malformed cookie extracts as an empty
/// role list, mirroring the cookie's advisory nature. Handlers wanting
/// hard authorization must go through the backend with the access
/// token.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use lion_connect_session_axum::GateRoles;
///
/// async fn dashboard(GateRoles(roles): GateRoles) -> String {
///     format!("roles: {roles:?}")
/// }
///
/// let app: Router = Router::new().route("/dashboard", get(dashboard));
/// ```
#[derive(Debug, Clone)]
pub struct GateRoles(pub Vec<String>);

impl GateRoles {
    pub fn has_role(&self, role: &str) -> bool {
        self.0.iter().any(|r| r == role)
    }
}

impl<S> FromRequestParts<S> for GateRoles
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        Ok(GateRoles(read_roles_cookie(&parts.headers)))
    }
}
