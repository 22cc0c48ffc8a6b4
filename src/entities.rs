use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A planned trip. `is_confirmed` flips from false to true exactly once,
/// when the owner follows the confirmation link; nothing ever flips it back.
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Trip {
    pub trip_id: Uuid,
    pub destination: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub is_confirmed: bool,
    pub created_at: DateTime<Utc>,
}

/// A person invited to (or owning) a trip. Exactly one participant per trip
/// has `is_owner = true`; that row is created together with the trip and is
/// pre-confirmed.
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Participant {
    pub participant_id: Uuid,
    pub trip_id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub is_owner: bool,
    pub is_confirmed: bool,
    pub created_at: DateTime<Utc>,
}
