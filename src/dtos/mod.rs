//! DTOs module - Data Transfer Objects for the HTTP surface.
//!
//! DTOs separate the external representation (API) from the internal one
//! (entities); request DTOs carry the validator rules.

pub mod participant;
pub mod trip;

pub use participant::{
    CreateInviteDTO, CreateParticipantDTO, InviteCreatedDTO, ParticipantDTO, ParticipantListDTO,
    UpdateParticipantDTO,
};
pub use trip::{CreateTripDTO, TripCreatedDTO, TripDTO, TripDetailsDTO, UpdateTripDTO};
