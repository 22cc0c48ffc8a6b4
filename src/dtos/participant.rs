//! Participant DTOs

use crate::entities::Participant;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /trips/{trip_id}/invites`.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateInviteDTO {
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
}

/// DTO for creating a participant row (without participant_id, generated by
/// the repository). Owner rows only ever come from trip creation.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateParticipantDTO {
    pub trip_id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub is_owner: bool,
    pub is_confirmed: bool,
}

/// DTO for updating a participant (only the confirmation flag is mutable).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateParticipantDTO {
    pub is_confirmed: Option<bool>,
}

/// External representation of a participant record.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ParticipantDTO {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub is_owner: bool,
    pub is_confirmed: bool,
}

impl From<Participant> for ParticipantDTO {
    fn from(value: Participant) -> Self {
        Self {
            id: value.participant_id,
            name: value.name,
            email: value.email,
            is_owner: value.is_owner,
            is_confirmed: value.is_confirmed,
        }
    }
}

/// Response of `GET /trips/{trip_id}/participants`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ParticipantListDTO {
    pub participants: Vec<ParticipantDTO>,
}

/// Response of `POST /trips/{trip_id}/invites`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InviteCreatedDTO {
    #[serde(rename = "participantId")]
    pub participant_id: Uuid,
}
