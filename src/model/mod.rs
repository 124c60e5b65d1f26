//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod film;
pub mod key_action;
pub mod lighting;
pub mod profile;
pub mod settings;

// Re-export for convenience
pub use error::{AppError, ProfileError, StorageError};
pub use film::{FilmFormat, FILM_FORMATS};
pub use key_action::KeyAction;
pub use lighting::{LightingCondition, LIGHTING_CONDITIONS};
pub use profile::{InvalidProfileId, Profile, ProfileId};
pub use settings::{FilmOrientation, Settings, MAX_BRACKET_STOPS, MIN_BRACKET_STOPS};
