//! Repositories module - one repository per entity, each owning a handle to
//! the connection pool and exposing the generic CRUD traits plus
//! entity-specific finders.

pub mod participant;
pub mod traits;
pub mod trip;

pub use traits::{Create, Read, Update};

pub use participant::ParticipantRepository;
pub use trip::TripRepository;
