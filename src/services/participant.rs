//! Participant services - invitation issuance and participant confirmation

use crate::core::{AppError, AppState};
use crate::dtos::{
    CreateInviteDTO, CreateParticipantDTO, InviteCreatedDTO, ParticipantDTO, ParticipantListDTO,
    UpdateParticipantDTO,
};
use crate::mail::templates;
use crate::repositories::{Create, Read, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::Redirect,
};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use uuid::Uuid;
use validator::Validate;

#[instrument(skip(state), fields(trip_id = %trip_id))]
pub async fn get_trip_participants(
    State(state): State<Arc<AppState>>,
    Path(trip_id): Path<Uuid>,
) -> Result<Json<ParticipantListDTO>, AppError> {
    debug!("Listing participants for trip");
    state
        .trip
        .read(&trip_id)
        .await?
        .ok_or_else(AppError::trip_not_found)?;

    let participants = state.participant.find_many_by_trip_id(&trip_id).await?;

    info!("Found {} participants", participants.len());

    Ok(Json(ParticipantListDTO {
        participants: participants.into_iter().map(ParticipantDTO::from).collect(),
    }))
}

#[debug_handler]
#[instrument(skip(state, body), fields(trip_id = %trip_id))]
pub async fn create_invite(
    State(state): State<Arc<AppState>>,
    Path(trip_id): Path<Uuid>,
    Json(body): Json<CreateInviteDTO>,
) -> Result<(StatusCode, Json<InviteCreatedDTO>), AppError> {
    body.validate()?;

    let trip = state
        .trip
        .read(&trip_id)
        .await?
        .ok_or_else(AppError::trip_not_found)?;

    let participant = state
        .participant
        .create(&CreateParticipantDTO {
            trip_id,
            name: None,
            email: body.email.clone(),
            is_owner: false,
            is_confirmed: false,
        })
        .await?;

    info!(participant_id = %participant.participant_id, "Participant invited");

    let sender = state.config.mail_sender();
    let message = templates::participant_confirmation(
        &sender,
        &trip,
        None,
        &participant,
        &state.config.api_base_url,
    );

    // The participant row stays even when dispatch fails; the caller sees
    // the 502 and can re-trigger the mail by confirming the trip again.
    state.mailer.send(&message).await?;

    Ok((
        StatusCode::CREATED,
        Json(InviteCreatedDTO {
            participant_id: participant.participant_id,
        }),
    ))
}

#[instrument(skip(state), fields(trip_id = %trip_id, participant_id = %participant_id))]
pub async fn confirm_participant(
    State(state): State<Arc<AppState>>,
    Path((trip_id, participant_id)): Path<(Uuid, Uuid)>,
) -> Result<Redirect, AppError> {
    state
        .trip
        .read(&trip_id)
        .await?
        .ok_or_else(AppError::trip_not_found)?;

    // A participant id belonging to a different trip counts as absent
    let participant = state
        .participant
        .read(&participant_id)
        .await?
        .filter(|p| p.trip_id == trip_id)
        .ok_or_else(AppError::participant_not_found)?;

    if participant.is_confirmed {
        debug!("Participant already confirmed");
    } else {
        state
            .participant
            .update(
                &participant_id,
                &UpdateParticipantDTO {
                    is_confirmed: Some(true),
                },
            )
            .await?;
        info!("Participant confirmed presence");
    }

    Ok(Redirect::to(&format!(
        "{}/trips/{}",
        state.config.web_base_url, trip_id
    )))
}
