use axum_test::TestServer;
use chrono::{Duration, Utc};
use planner::core::config::MailDriver;
use planner::core::{AppState, Config};
use planner::mail::MemoryMailer;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Configuration used by every integration test; redirect bases are fake
/// hosts so assertions can prove they come from the config.
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        max_connections: 5,
        web_base_url: "http://web.test".to_string(),
        api_base_url: "http://api.test".to_string(),
        mail_driver: MailDriver::Memory,
        smtp_host: "localhost".to_string(),
        smtp_port: 587,
        smtp_username: None,
        smtp_password: None,
        mail_from_name: "Planner Crew".to_string(),
        mail_from_address: "hello@planner.dev".to_string(),
        app_env: "test".to_string(),
    }
}

/// Creates an AppState for the tests, wired to the given recording mailer.
pub fn create_test_state(pool: SqlitePool, mailer: Arc<MemoryMailer>) -> Arc<AppState> {
    Arc::new(AppState::new(pool, test_config(), mailer))
}

/// Creates a TestServer ready to serve requests.
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = planner::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Valid create-trip body starting 30 days from now and lasting 5 days,
/// owned by Ana.
pub fn sample_trip_body(emails_to_invite: &[&str]) -> Value {
    let starts = Utc::now() + Duration::days(30);
    let ends = starts + Duration::days(5);
    json!({
        "destination": "Rio de Janeiro",
        "starts_at": starts.to_rfc3339(),
        "ends_at": ends.to_rfc3339(),
        "owner_name": "Ana",
        "owner_email": "ana@example.com",
        "emails_to_invite": emails_to_invite,
    })
}

/// Creates a trip through the API and returns its id.
pub async fn create_sample_trip(server: &TestServer, emails_to_invite: &[&str]) -> String {
    let response = server
        .post("/trips")
        .json(&sample_trip_body(emails_to_invite))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    body["tripId"]
        .as_str()
        .expect("tripId missing from response")
        .to_string()
}

/// Fetches the participant list of a trip.
pub async fn list_participants(server: &TestServer, trip_id: &str) -> Vec<Value> {
    let response = server.get(&format!("/trips/{trip_id}/participants")).await;
    response.assert_status_ok();

    let body: Value = response.json();
    body["participants"]
        .as_array()
        .expect("participants missing from response")
        .clone()
}
