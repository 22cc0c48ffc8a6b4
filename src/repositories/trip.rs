//! TripRepository - database operations for trip records

use super::{Read, Update};
use crate::dtos::{CreateTripDTO, UpdateTripDTO};
use crate::entities::Trip;
use chrono::Utc;
use sqlx::{Error, SqlitePool};
use uuid::Uuid;

pub struct TripRepository {
    connection_pool: SqlitePool,
}

impl TripRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Creates a trip together with its owner participant and one unconfirmed
    /// participant per invited email, all in a single transaction. The owner
    /// row is pre-confirmed.
    pub async fn create_with_participants(&self, data: &CreateTripDTO) -> Result<Trip, Error> {
        let now = Utc::now();

        let trip = Trip {
            trip_id: Uuid::new_v4(),
            destination: data.destination.clone(),
            starts_at: data.starts_at,
            ends_at: data.ends_at,
            is_confirmed: false,
            created_at: now,
        };

        let mut tx = self.connection_pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO trips (trip_id, destination, starts_at, ends_at, is_confirmed, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(trip.trip_id)
        .bind(&trip.destination)
        .bind(trip.starts_at)
        .bind(trip.ends_at)
        .bind(trip.is_confirmed)
        .bind(trip.created_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO participants (participant_id, trip_id, name, email, is_owner, is_confirmed, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(trip.trip_id)
        .bind(&data.owner_name)
        .bind(&data.owner_email)
        .bind(true)
        .bind(true)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        for email in &data.emails_to_invite {
            sqlx::query(
                r#"
                INSERT INTO participants (participant_id, trip_id, name, email, is_owner, is_confirmed, created_at)
                VALUES (?, ?, NULL, ?, ?, ?, ?)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(trip.trip_id)
            .bind(email)
            .bind(false)
            .bind(false)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(trip)
    }
}

impl Read<Trip, Uuid> for TripRepository {
    async fn read(&self, id: &Uuid) -> Result<Option<Trip>, Error> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            SELECT trip_id, destination, starts_at, ends_at, is_confirmed, created_at
            FROM trips
            WHERE trip_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(trip)
    }
}

impl Update<Trip, UpdateTripDTO, Uuid> for TripRepository {
    async fn update(&self, id: &Uuid, data: &UpdateTripDTO) -> Result<Trip, Error> {
        if let Some(is_confirmed) = data.is_confirmed {
            sqlx::query("UPDATE trips SET is_confirmed = ? WHERE trip_id = ?")
                .bind(is_confirmed)
                .bind(id)
                .execute(&self.connection_pool)
                .await?;
        }

        // fetch_one reports RowNotFound for an absent trip
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            SELECT trip_id, destination, starts_at, ends_at, is_confirmed, created_at
            FROM trips
            WHERE trip_id = ?
            "#,
        )
        .bind(id)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(trip)
    }
}
