//! Planner library - exposes the main modules so integration tests can build
//! the application router.

pub mod core;
pub mod dtos;
pub mod entities;
pub mod mail;
pub mod repositories;
pub mod services;

pub use crate::core::{AppError, AppState, config};
pub use crate::services::root;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Creates the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/trips", configure_trip_routes())
        .with_state(state)
}

/// Configures the trip lifecycle and invitation routes
fn configure_trip_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", post(create_trip))
        .route("/{trip_id}", get(get_trip_details))
        .route("/{trip_id}/participants", get(get_trip_participants))
        .route("/{trip_id}/confirm", get(confirm_trip))
        .route(
            "/{trip_id}/confirm/{participant_id}",
            get(confirm_participant),
        )
        .route("/{trip_id}/invites", post(create_invite))
}
