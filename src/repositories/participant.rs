//! ParticipantRepository - database operations for participant records

use super::{Create, Read, Update};
use crate::dtos::{CreateParticipantDTO, UpdateParticipantDTO};
use crate::entities::Participant;
use chrono::Utc;
use sqlx::{Error, SqlitePool};
use uuid::Uuid;

pub struct ParticipantRepository {
    connection_pool: SqlitePool,
}

impl ParticipantRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Returns every participant of a trip, owner first.
    pub async fn find_many_by_trip_id(&self, trip_id: &Uuid) -> Result<Vec<Participant>, Error> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, trip_id, name, email, is_owner, is_confirmed, created_at
            FROM participants
            WHERE trip_id = ?
            ORDER BY is_owner DESC, created_at ASC
            "#,
        )
        .bind(trip_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(participants)
    }
}

impl Create<Participant, CreateParticipantDTO> for ParticipantRepository {
    async fn create(&self, data: &CreateParticipantDTO) -> Result<Participant, Error> {
        let participant = Participant {
            participant_id: Uuid::new_v4(),
            trip_id: data.trip_id,
            name: data.name.clone(),
            email: data.email.clone(),
            is_owner: data.is_owner,
            is_confirmed: data.is_confirmed,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO participants (participant_id, trip_id, name, email, is_owner, is_confirmed, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(participant.participant_id)
        .bind(participant.trip_id)
        .bind(&participant.name)
        .bind(&participant.email)
        .bind(participant.is_owner)
        .bind(participant.is_confirmed)
        .bind(participant.created_at)
        .execute(&self.connection_pool)
        .await?;

        Ok(participant)
    }
}

impl Read<Participant, Uuid> for ParticipantRepository {
    async fn read(&self, id: &Uuid) -> Result<Option<Participant>, Error> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, trip_id, name, email, is_owner, is_confirmed, created_at
            FROM participants
            WHERE participant_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(participant)
    }
}

impl Update<Participant, UpdateParticipantDTO, Uuid> for ParticipantRepository {
    async fn update(&self, id: &Uuid, data: &UpdateParticipantDTO) -> Result<Participant, Error> {
        if let Some(is_confirmed) = data.is_confirmed {
            sqlx::query("UPDATE participants SET is_confirmed = ? WHERE participant_id = ?")
                .bind(is_confirmed)
                .bind(id)
                .execute(&self.connection_pool)
                .await?;
        }

        let participant = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, trip_id, name, email, is_owner, is_confirmed, created_at
            FROM participants
            WHERE participant_id = ?
            "#,
        )
        .bind(id)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(participant)
    }
}
