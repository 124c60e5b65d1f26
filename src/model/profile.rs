//! Named settings snapshots ("profiles").
//!
//! A profile captures the camera half of [`Settings`]: the body, pinhole,
//! film and the film-handling flags. Shot-specific fields (lighting
//! condition, bracket offset) are left out and survive applying a profile.

use super::film::FilmFormat;
use super::settings::{FilmOrientation, Settings};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque profile identity.
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfileId(String);

impl ProfileId {
    /// Smart constructor: validates non-empty id
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidProfileId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidProfileId::Empty);
        }
        Ok(Self(raw))
    }

    /// Derive a fresh id from a creation time, unique among `existing`.
    ///
    /// The base id is the timestamp in milliseconds; collisions get a
    /// `-2`, `-3`, ... suffix.
    pub fn generate(created_at: DateTime<Utc>, existing: &[Profile]) -> Self {
        let base = created_at.timestamp_millis().to_string();
        let taken = |candidate: &str| existing.iter().any(|p| p.id.as_str() == candidate);

        if !taken(&base) {
            return Self(base);
        }
        let mut suffix = 2usize;
        loop {
            let candidate = format!("{base}-{suffix}");
            if !taken(&candidate) {
                return Self(candidate);
            }
            suffix += 1;
        }
    }

    /// The raw id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProfileId {
    type Error = InvalidProfileId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ProfileId> for String {
    fn from(id: ProfileId) -> Self {
        id.0
    }
}

/// Why a string was rejected as a [`ProfileId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidProfileId {
    /// The id was empty.
    #[error("Profile ID cannot be empty")]
    Empty,
}

/// A persisted, named snapshot of camera settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Store identity.
    pub id: ProfileId,
    /// User-chosen display name.
    pub name: String,
    /// When the profile was first saved.
    pub created_at: DateTime<Utc>,
    /// Focal length in millimetres.
    pub focal_length: f64,
    /// Pinhole diameter in millimetres.
    pub pinhole_size: f64,
    /// Film format catalog name.
    pub film_format: String,
    /// Orientation; absent in older records means landscape.
    #[serde(default)]
    pub film_orientation: FilmOrientation,
    /// Film speed.
    pub iso: u32,
    /// Reciprocity correction flag.
    #[serde(default)]
    pub use_reciprocity_failure: bool,
    /// Red filter flag.
    #[serde(default)]
    pub use_red_filter: bool,
}

impl Profile {
    /// Capture the camera fields of `settings` under `name`.
    pub fn snapshot(
        id: ProfileId,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        settings: &Settings,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            created_at,
            focal_length: settings.focal_length,
            pinhole_size: settings.pinhole_size,
            film_format: settings.film_format.name.to_string(),
            film_orientation: settings.film_orientation,
            iso: settings.iso,
            use_reciprocity_failure: settings.use_reciprocity_failure,
            use_red_filter: settings.use_red_filter,
        }
    }

    /// Replace the camera fields of `settings` with this profile's values.
    ///
    /// A film format name that is no longer in the catalog falls back to the
    /// default format.
    pub fn apply_to(&self, settings: Settings) -> Settings {
        let film_format = FilmFormat::find(&self.film_format).unwrap_or_default();
        settings
            .with_focal_length(self.focal_length)
            .with_pinhole_size(self.pinhole_size)
            .with_film_format(film_format)
            .with_film_orientation(self.film_orientation)
            .with_iso(self.iso)
            .with_reciprocity_failure(self.use_reciprocity_failure)
            .with_red_filter(self.use_red_filter)
    }

    /// Same profile with the camera fields refreshed from `settings`.
    /// Identity, name and creation time are kept.
    pub fn updated_from(&self, settings: &Settings) -> Self {
        Self::snapshot(self.id.clone(), self.name.clone(), self.created_at, settings)
    }
}
