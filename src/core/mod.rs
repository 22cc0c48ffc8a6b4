//! Core module - infrastructural components of the application:
//! configuration, error handling and shared application state.

pub mod config;
pub mod error;
pub mod state;

pub use config::Config;
pub use error::AppError;
pub use state::AppState;
