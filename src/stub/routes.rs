use super::handlers;
use super::state::StubState;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the stub backend router with all routes
pub fn create_router(state: StubState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Meetings
        .route(
            "/meetings",
            get(handlers::list_meetings).post(handlers::add_meeting),
        )
        .route(
            "/meetings/:meeting_id",
            get(handlers::get_meeting).delete(handlers::delete_meeting),
        )
        // Request logging, and CORS for browser clients
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
