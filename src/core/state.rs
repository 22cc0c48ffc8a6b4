//! Application state shared between all routes.

use crate::core::Config;
use crate::mail::MailTransport;
use crate::repositories::{ParticipantRepository, TripRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Global application state, one instance behind an `Arc` for the whole
/// router.
pub struct AppState {
    /// Repository for trip records
    pub trip: TripRepository,

    /// Repository for participant records
    pub participant: ParticipantRepository,

    /// Mail transport collaborator (SMTP in production, in-memory in
    /// development and tests)
    pub mailer: Arc<dyn MailTransport>,

    /// Runtime configuration (redirect bases, sender identity)
    pub config: Config,
}

impl AppState {
    /// Creates a new AppState, initializing every repository with the given
    /// connection pool.
    pub fn new(pool: SqlitePool, config: Config, mailer: Arc<dyn MailTransport>) -> Self {
        Self {
            trip: TripRepository::new(pool.clone()),
            participant: ParticipantRepository::new(pool),
            mailer,
            config,
        }
    }
}
