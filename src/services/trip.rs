//! Trip services - trip lifecycle handlers

use crate::core::{AppError, AppState};
use crate::dtos::{CreateTripDTO, TripCreatedDTO, TripDTO, TripDetailsDTO, UpdateTripDTO};
use crate::mail::templates;
use crate::repositories::{Read, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::Redirect,
};
use axum_macros::debug_handler;
use chrono::Utc;
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

#[debug_handler]
#[instrument(skip(state, body), fields(destination = %body.destination))]
pub async fn create_trip(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateTripDTO>,
) -> Result<(StatusCode, Json<TripCreatedDTO>), AppError> {
    body.validate()?;

    // Date invariants checked before anything touches the store
    if body.starts_at < Utc::now() {
        return Err(AppError::invalid_date_range("Trip cannot start in the past"));
    }
    if body.ends_at < body.starts_at {
        return Err(AppError::invalid_date_range(
            "End date must not be before start date",
        ));
    }

    let trip = state.trip.create_with_participants(&body).await?;

    info!(
        trip_id = %trip.trip_id,
        "Trip created with {} invited participants",
        body.emails_to_invite.len()
    );

    let sender = state.config.mail_sender();
    let message = templates::trip_created(
        &sender,
        &trip,
        &body.owner_name,
        &body.owner_email,
        &state.config.api_base_url,
    );

    // Best-effort: the trip is already persisted, so a failed notification
    // must not fail the request.
    if let Err(err) = state.mailer.send(&message).await {
        warn!(trip_id = %trip.trip_id, "Failed to send trip-created mail: {}", err);
    }

    Ok((
        StatusCode::CREATED,
        Json(TripCreatedDTO {
            trip_id: trip.trip_id,
        }),
    ))
}

#[instrument(skip(state), fields(trip_id = %trip_id))]
pub async fn get_trip_details(
    State(state): State<Arc<AppState>>,
    Path(trip_id): Path<Uuid>,
) -> Result<Json<TripDetailsDTO>, AppError> {
    debug!("Fetching trip details");
    let trip = state
        .trip
        .read(&trip_id)
        .await?
        .ok_or_else(AppError::trip_not_found)?;

    Ok(Json(TripDetailsDTO {
        trip: TripDTO::from(trip),
    }))
}

#[instrument(skip(state), fields(trip_id = %trip_id))]
pub async fn confirm_trip(
    State(state): State<Arc<AppState>>,
    Path(trip_id): Path<Uuid>,
) -> Result<Redirect, AppError> {
    let trip = state
        .trip
        .read(&trip_id)
        .await?
        .ok_or_else(AppError::trip_not_found)?;

    let overview_url = format!("{}/trips/{}", state.config.web_base_url, trip_id);

    // Idempotent short-circuit: repeat confirmations change nothing and
    // notify nobody.
    if trip.is_confirmed {
        debug!("Trip already confirmed, skipping notification fan-out");
        return Ok(Redirect::to(&overview_url));
    }

    let trip = state
        .trip
        .update(
            &trip_id,
            &UpdateTripDTO {
                is_confirmed: Some(true),
            },
        )
        .await?;

    let participants = state.participant.find_many_by_trip_id(&trip_id).await?;
    let owner_name = participants
        .iter()
        .find(|p| p.is_owner)
        .and_then(|owner| owner.name.as_deref());

    let sender = state.config.mail_sender();

    // Unordered fan-out over the non-owner participants; any single failure
    // fails the whole operation, but the committed confirmation stands.
    let sends: Vec<_> = participants
        .iter()
        .filter(|p| !p.is_owner)
        .map(|participant| {
            let message = templates::participant_confirmation(
                &sender,
                &trip,
                owner_name,
                participant,
                &state.config.api_base_url,
            );
            let mailer = state.mailer.clone();
            async move { mailer.send(&message).await }
        })
        .collect();

    let notified = sends.len();
    try_join_all(sends).await?;

    info!("Trip confirmed, {} participants notified", notified);

    Ok(Redirect::to(&overview_url))
}
