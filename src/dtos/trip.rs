//! Trip DTOs

use crate::entities::Trip;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidateEmail, ValidationError};

/// Body of `POST /trips`. The invite list is optional and defaults to empty,
/// so a trip can be created with the owner alone and guests invited later.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateTripDTO {
    #[validate(length(min = 4, message = "Destination must be at least 4 characters"))]
    pub destination: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[validate(length(min = 1, message = "Owner name must not be empty"))]
    pub owner_name: String,
    #[validate(email(message = "Owner email must be a valid email address"))]
    pub owner_email: String,
    #[serde(default)]
    #[validate(custom(function = validate_email_list))]
    pub emails_to_invite: Vec<String>,
}

fn validate_email_list(emails: &[String]) -> Result<(), ValidationError> {
    if emails.iter().all(|email| email.validate_email()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("email");
        error.message = Some("emails_to_invite must contain valid email addresses".into());
        Err(error)
    }
}

/// DTO for updating a trip (only the confirmation flag is mutable, and only
/// from false to true).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateTripDTO {
    pub is_confirmed: Option<bool>,
}

/// External representation of a trip record.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TripDTO {
    pub id: Uuid,
    pub destination: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub is_confirmed: bool,
}

impl From<Trip> for TripDTO {
    fn from(value: Trip) -> Self {
        Self {
            id: value.trip_id,
            destination: value.destination,
            starts_at: value.starts_at,
            ends_at: value.ends_at,
            is_confirmed: value.is_confirmed,
        }
    }
}

/// Response of `GET /trips/{trip_id}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TripDetailsDTO {
    pub trip: TripDTO,
}

/// Response of `POST /trips`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TripCreatedDTO {
    #[serde(rename = "tripId")]
    pub trip_id: Uuid,
}
