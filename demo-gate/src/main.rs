use axum::{Router, middleware::from_fn_with_state, routing::get};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lion_connect_session_axum::{AuthContext, RouteGate, role_gate, session_router};

mod handlers;

use crate::handlers::{admin_home, company_home, index, login_page, talent_home};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let context = Arc::new(AuthContext::from_env().await?);

    // Run recovery before serving so session snapshots start initialized
    context.recover_session().await;

    let gate = Arc::new(
        RouteGate::new()
            .require("/talent", &["TALENT"])
            .require("/company", &["COMPANY"])
            .require("/admin", &["ADMIN"]),
    );

    let app = Router::new()
        .route("/", get(index))
        .route("/login", get(login_page))
        .route("/talent", get(talent_home))
        .route("/company", get(company_home))
        .route("/admin", get(admin_home))
        .layer(from_fn_with_state(gate, role_gate))
        .nest("/auth", session_router(context));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!("demo-gate listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
