//! Integration tests for invitation issuance and participant confirmation
//!
//! Tests for:
//! - POST /trips/{trip_id}/invites
//! - GET /trips/{trip_id}/participants
//! - GET /trips/{trip_id}/confirm/{participant_id}

mod common;

#[cfg(test)]
mod invite_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use planner::mail::MemoryMailer;
    use serde_json::{Value, json};
    use sqlx::SqlitePool;
    use std::sync::Arc;
    use uuid::Uuid;

    // ============================================================
    // POST /trips/{trip_id}/invites - create_invite
    // ============================================================

    #[sqlx::test]
    async fn test_create_invite_success(pool: SqlitePool) -> sqlx::Result<()> {
        let mailer = Arc::new(MemoryMailer::new());
        let state = create_test_state(pool, mailer.clone());
        let server = create_test_server(state);

        let trip_id = create_sample_trip(&server, &["bob@example.com"]).await;

        let response = server
            .post(&format!("/trips/{trip_id}/invites"))
            .json(&json!({ "email": "dave@example.com" }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let created: Value = response.json();
        let participant_id = created["participantId"].as_str().unwrap().to_string();

        // Participant count grew by one; the new row is an unconfirmed guest
        let participants = list_participants(&server, &trip_id).await;
        assert_eq!(participants.len(), 3);
        let new_participant = participants
            .iter()
            .find(|p| p["id"] == json!(participant_id))
            .expect("invited participant missing from list");
        assert_eq!(new_participant["email"], json!("dave@example.com"));
        assert_eq!(new_participant["is_owner"], json!(false));
        assert_eq!(new_participant["is_confirmed"], json!(false));

        // The invitation mail carries the participant's personal link
        let sent = mailer.sent();
        let last = sent.last().expect("no mail recorded");
        assert_eq!(last.to.address, "dave@example.com");
        assert!(
            last.html_body
                .contains(&format!("http://api.test/trips/{trip_id}/confirm/{participant_id}"))
        );

        Ok(())
    }

    #[sqlx::test]
    async fn test_create_invite_trip_not_found(pool: SqlitePool) -> sqlx::Result<()> {
        let mailer = Arc::new(MemoryMailer::new());
        let state = create_test_state(pool, mailer);
        let server = create_test_server(state);

        let response = server
            .post(&format!("/trips/{}/invites", Uuid::new_v4()))
            .json(&json!({ "email": "dave@example.com" }))
            .await;
        response.assert_status_not_found();

        Ok(())
    }

    #[sqlx::test]
    async fn test_create_invite_rejects_invalid_email(pool: SqlitePool) -> sqlx::Result<()> {
        let mailer = Arc::new(MemoryMailer::new());
        let state = create_test_state(pool, mailer);
        let server = create_test_server(state);

        let trip_id = create_sample_trip(&server, &[]).await;

        let response = server
            .post(&format!("/trips/{trip_id}/invites"))
            .json(&json!({ "email": "not-an-email" }))
            .await;
        response.assert_status_bad_request();

        let participants = list_participants(&server, &trip_id).await;
        assert_eq!(participants.len(), 1);

        Ok(())
    }

    #[sqlx::test]
    async fn test_create_invite_mail_failure_keeps_participant(
        pool: SqlitePool,
    ) -> sqlx::Result<()> {
        let mailer = Arc::new(MemoryMailer::failing());
        let state = create_test_state(pool, mailer);
        let server = create_test_server(state);

        let trip_id = create_sample_trip(&server, &[]).await;

        // Dispatch fails with 502 but the created row is not rolled back
        let response = server
            .post(&format!("/trips/{trip_id}/invites"))
            .json(&json!({ "email": "dave@example.com" }))
            .await;
        response.assert_status(StatusCode::BAD_GATEWAY);

        let error: Value = response.json();
        assert_eq!(error["error"], json!("Mail dispatch failed"));

        let participants = list_participants(&server, &trip_id).await;
        assert_eq!(participants.len(), 2);
        assert!(
            participants
                .iter()
                .any(|p| p["email"] == json!("dave@example.com"))
        );

        Ok(())
    }

    #[sqlx::test]
    async fn test_create_invite_allowed_after_confirmation(pool: SqlitePool) -> sqlx::Result<()> {
        let mailer = Arc::new(MemoryMailer::new());
        let state = create_test_state(pool, mailer);
        let server = create_test_server(state);

        let trip_id = create_sample_trip(&server, &[]).await;
        server
            .get(&format!("/trips/{trip_id}/confirm"))
            .await
            .assert_status(StatusCode::SEE_OTHER);

        // No guard against inviting into an already-confirmed trip
        let response = server
            .post(&format!("/trips/{trip_id}/invites"))
            .json(&json!({ "email": "late@example.com" }))
            .await;
        response.assert_status(StatusCode::CREATED);

        Ok(())
    }

    // ============================================================
    // GET /trips/{trip_id}/participants - get_trip_participants
    // ============================================================

    #[sqlx::test]
    async fn test_list_participants_trip_not_found(pool: SqlitePool) -> sqlx::Result<()> {
        let mailer = Arc::new(MemoryMailer::new());
        let state = create_test_state(pool, mailer);
        let server = create_test_server(state);

        let response = server
            .get(&format!("/trips/{}/participants", Uuid::new_v4()))
            .await;
        response.assert_status_not_found();

        Ok(())
    }

    // ============================================================
    // GET /trips/{trip_id}/confirm/{participant_id} - confirm_participant
    // ============================================================

    #[sqlx::test]
    async fn test_confirm_participant_success(pool: SqlitePool) -> sqlx::Result<()> {
        let mailer = Arc::new(MemoryMailer::new());
        let state = create_test_state(pool, mailer);
        let server = create_test_server(state);

        let trip_id = create_sample_trip(&server, &["bob@example.com"]).await;
        let participants = list_participants(&server, &trip_id).await;
        let guest = participants
            .iter()
            .find(|p| p["is_owner"] == json!(false))
            .unwrap();
        let participant_id = guest["id"].as_str().unwrap().to_string();

        let response = server
            .get(&format!("/trips/{trip_id}/confirm/{participant_id}"))
            .await;
        response.assert_status(StatusCode::SEE_OTHER);

        let location = response
            .headers()
            .get("location")
            .expect("location header missing")
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(location, format!("http://web.test/trips/{trip_id}"));

        // Exactly that participant flipped to confirmed
        let participants = list_participants(&server, &trip_id).await;
        let guest = participants
            .iter()
            .find(|p| p["id"] == json!(participant_id))
            .unwrap();
        assert_eq!(guest["is_confirmed"], json!(true));

        Ok(())
    }

    #[sqlx::test]
    async fn test_confirm_participant_is_idempotent(pool: SqlitePool) -> sqlx::Result<()> {
        let mailer = Arc::new(MemoryMailer::new());
        let state = create_test_state(pool, mailer);
        let server = create_test_server(state);

        let trip_id = create_sample_trip(&server, &["bob@example.com"]).await;
        let participants = list_participants(&server, &trip_id).await;
        let participant_id = participants
            .iter()
            .find(|p| p["is_owner"] == json!(false))
            .unwrap()["id"]
            .as_str()
            .unwrap()
            .to_string();

        for _ in 0..2 {
            let response = server
                .get(&format!("/trips/{trip_id}/confirm/{participant_id}"))
                .await;
            response.assert_status(StatusCode::SEE_OTHER);
        }

        let participants = list_participants(&server, &trip_id).await;
        let guest = participants
            .iter()
            .find(|p| p["id"] == json!(participant_id))
            .unwrap();
        assert_eq!(guest["is_confirmed"], json!(true));

        Ok(())
    }

    #[sqlx::test]
    async fn test_confirm_participant_not_found(pool: SqlitePool) -> sqlx::Result<()> {
        let mailer = Arc::new(MemoryMailer::new());
        let state = create_test_state(pool, mailer);
        let server = create_test_server(state);

        let trip_id = create_sample_trip(&server, &[]).await;

        let response = server
            .get(&format!("/trips/{trip_id}/confirm/{}", Uuid::new_v4()))
            .await;
        response.assert_status_not_found();

        let error: Value = response.json();
        assert_eq!(error["error"], json!("Participant not found"));

        Ok(())
    }

    #[sqlx::test]
    async fn test_confirm_participant_rejects_mismatched_trip(
        pool: SqlitePool,
    ) -> sqlx::Result<()> {
        let mailer = Arc::new(MemoryMailer::new());
        let state = create_test_state(pool, mailer);
        let server = create_test_server(state);

        let first_trip = create_sample_trip(&server, &["bob@example.com"]).await;
        let second_trip = create_sample_trip(&server, &[]).await;

        let participants = list_participants(&server, &first_trip).await;
        let participant_id = participants
            .iter()
            .find(|p| p["is_owner"] == json!(false))
            .unwrap()["id"]
            .as_str()
            .unwrap()
            .to_string();

        // A participant of another trip counts as absent
        let response = server
            .get(&format!("/trips/{second_trip}/confirm/{participant_id}"))
            .await;
        response.assert_status_not_found();

        Ok(())
    }
}
