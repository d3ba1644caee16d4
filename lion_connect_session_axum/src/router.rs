//! HTTP surface for the auth operations.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Redirect,
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;

use lion_connect_session::{
    AuthContext, LoginCredentials, Session, SessionUser, SignupRequest,
};

use super::config::LC_LOGIN_URL;
use super::error::IntoResponseError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginForm {
    email: String,
    password: String,
    #[serde(default)]
    remember_email: bool,
}

async fn login(
    State(context): State<Arc<AuthContext>>,
    Json(form): Json<LoginForm>,
) -> Result<(HeaderMap, Json<SessionUser>), (StatusCode, String)> {
    let credentials = LoginCredentials {
        email: form.email,
        password: form.password,
        remember_email: form.remember_email,
    };

    let (user, headers) = context.login(&credentials).await.into_response_error()?;
    Ok((headers, Json(user)))
}

/// Cleanup is unconditional; the response always navigates to the login
/// surface with the role cookie expired.
async fn logout(State(context): State<Arc<AuthContext>>) -> (HeaderMap, Redirect) {
    let headers = context.logout().await;
    (headers, Redirect::to(LC_LOGIN_URL.as_str()))
}

async fn signup(
    State(context): State<Arc<AuthContext>>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<SessionUser>, (StatusCode, String)> {
    let user = context.signup(&request).await.into_response_error()?;
    Ok(Json(user))
}

async fn session(State(context): State<Arc<AuthContext>>) -> Json<Session> {
    Json(context.get_session().await)
}

async fn remembered_email(State(context): State<Arc<AuthContext>>) -> Json<Option<String>> {
    Json(context.remembered_email().await)
}

/// Router exposing the session subsystem: login, logout, signup, the
/// current session snapshot and the remembered email.
pub fn session_router(context: Arc<AuthContext>) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/signup", post(signup))
        .route("/session", get(session))
        .route("/remembered-email", get(remembered_email))
        .with_state(context)
}
