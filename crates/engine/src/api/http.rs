//! Plain HTTP surface.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Routes that need no shared state.
pub fn routes() -> Router {
    Router::new().route("/api/healthcheck", get(healthcheck))
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    message: &'static str,
}

async fn healthcheck() -> Json<Health> {
    Json(Health {
        status: "ok",
        message: "Engine is running!",
    })
}
