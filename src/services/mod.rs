//! Services module - the HTTP handlers, one sub-module per route group.

pub mod participant;
pub mod trip;

pub use participant::{confirm_participant, create_invite, get_trip_participants};
pub use trip::{confirm_trip, create_trip, get_trip_details};

use crate::core::AppState;
use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}
