use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::docs::openapi;
use crate::handlers::{create_client, delete_client, health, list_clients, update_client};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/openapi.json", get(openapi))
        .route("/api/clients", get(list_clients))
        .route("/api/clients/add", post(create_client))
        .route("/api/clients/update", put(update_client))
        .route("/api/clients/delete", delete(delete_client))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
