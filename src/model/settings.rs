//! Camera settings value record.
//!
//! `Settings` is passed to every screen and replaced wholesale on change.
//! The `with_*` builders consume the record and return a new one; nothing
//! mutates a live record in place.

use super::film::FilmFormat;
use super::lighting::LightingCondition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the film frame sits in the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilmOrientation {
    /// Long edge horizontal. Used when orientation is unspecified.
    #[default]
    Landscape,
    /// Long edge vertical; film width and height swap.
    Portrait,
}

impl FilmOrientation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            FilmOrientation::Landscape => FilmOrientation::Portrait,
            FilmOrientation::Portrait => FilmOrientation::Landscape,
        }
    }

    /// Parse the persisted/config spelling ("landscape" or "portrait").
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "landscape" => Some(FilmOrientation::Landscape),
            "portrait" => Some(FilmOrientation::Portrait),
            _ => None,
        }
    }

    /// Lowercase name, as used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            FilmOrientation::Landscape => "landscape",
            FilmOrientation::Portrait => "portrait",
        }
    }
}

impl fmt::Display for FilmOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowest bracket offset offered by the controls.
pub const MIN_BRACKET_STOPS: f64 = -3.0;
/// Highest bracket offset offered by the controls.
pub const MAX_BRACKET_STOPS: f64 = 3.0;

/// Everything the calculator needs to know about the camera and the shot.
///
/// Values are trusted: positivity of `focal_length`, `pinhole_size` and `iso`
/// is the job of whatever produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Pinhole-to-film distance in millimetres.
    pub focal_length: f64,
    /// Aperture diameter in millimetres.
    pub pinhole_size: f64,
    /// Physical frame, always stored landscape.
    pub film_format: FilmFormat,
    /// How the frame is turned in the camera.
    pub film_orientation: FilmOrientation,
    /// Film speed.
    pub iso: u32,
    /// Name of a [`LightingCondition`]; `None` means no exposure is shown.
    pub selected_condition: Option<String>,
    /// Bracketing offset in stops, usually a whole number in `[-3, 3]`.
    pub bracket_stops: f64,
    /// Correct long exposures for reciprocity failure.
    pub use_reciprocity_failure: bool,
    /// Compensate for a red filter.
    pub use_red_filter: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focal_length: 50.0,
            pinhole_size: 0.3,
            film_format: FilmFormat::default(),
            film_orientation: FilmOrientation::Landscape,
            iso: 100,
            selected_condition: None,
            bracket_stops: 0.0,
            use_reciprocity_failure: false,
            use_red_filter: false,
        }
    }
}

impl Settings {
    /// Copy with a new focal length.
    pub fn with_focal_length(self, focal_length: f64) -> Self {
        Self {
            focal_length,
            ..self
        }
    }

    /// Copy with a new pinhole diameter.
    pub fn with_pinhole_size(self, pinhole_size: f64) -> Self {
        Self {
            pinhole_size,
            ..self
        }
    }

    /// Copy with a new film format.
    pub fn with_film_format(self, film_format: FilmFormat) -> Self {
        Self {
            film_format,
            ..self
        }
    }

    /// Copy with a new film orientation.
    pub fn with_film_orientation(self, film_orientation: FilmOrientation) -> Self {
        Self {
            film_orientation,
            ..self
        }
    }

    /// Copy with a new film speed.
    pub fn with_iso(self, iso: u32) -> Self {
        Self { iso, ..self }
    }

    /// Copy with a different lighting condition, or none.
    pub fn with_condition(self, selected_condition: Option<String>) -> Self {
        Self {
            selected_condition,
            ..self
        }
    }

    /// Copy with a new bracket offset. The value is not clamped.
    pub fn with_bracket_stops(self, bracket_stops: f64) -> Self {
        Self {
            bracket_stops,
            ..self
        }
    }

    /// Copy with reciprocity correction switched on or off.
    pub fn with_reciprocity_failure(self, use_reciprocity_failure: bool) -> Self {
        Self {
            use_reciprocity_failure,
            ..self
        }
    }

    /// Copy with the red filter switched on or off.
    pub fn with_red_filter(self, use_red_filter: bool) -> Self {
        Self {
            use_red_filter,
            ..self
        }
    }

    /// Resolve `selected_condition` against the catalog.
    pub fn condition(&self) -> Option<&'static LightingCondition> {
        self.selected_condition
            .as_deref()
            .and_then(LightingCondition::find)
    }

    /// Film width and height after applying orientation.
    ///
    /// Portrait swaps the catalog dimensions, so 6x9 portrait is 56 × 84.
    pub fn effective_film_dimensions(&self) -> (f64, f64) {
        match self.film_orientation {
            FilmOrientation::Landscape => (self.film_format.width, self.film_format.height),
            FilmOrientation::Portrait => (self.film_format.height, self.film_format.width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_leave_original_untouched() {
        let original = Settings::default();
        let changed = original.clone().with_iso(400).with_red_filter(true);

        assert_eq!(original.iso, 100);
        assert!(!original.use_red_filter);
        assert_eq!(changed.iso, 400);
        assert!(changed.use_red_filter);
        assert_eq!(changed.focal_length, original.focal_length);
    }

    #[test]
    fn portrait_swaps_effective_dimensions() {
        let landscape = Settings::default();
        let portrait = landscape
            .clone()
            .with_film_orientation(FilmOrientation::Portrait);

        let (lw, lh) = landscape.effective_film_dimensions();
        let (pw, ph) = portrait.effective_film_dimensions();
        assert_eq!((lw, lh), (84.0, 56.0));
        assert_eq!((pw, ph), (lh, lw));
    }

    #[test]
    fn unknown_condition_resolves_to_none() {
        let settings = Settings::default().with_condition(Some("Moonlight".to_string()));
        assert!(settings.condition().is_none());
    }

    #[test]
    fn known_condition_resolves() {
        let settings = Settings::default().with_condition(Some("Open Shade".to_string()));
        assert_eq!(settings.condition().map(|c| c.f_stop), Some(4.0));
    }

    #[test]
    fn orientation_defaults_to_landscape() {
        assert_eq!(FilmOrientation::default(), FilmOrientation::Landscape);
    }

    #[test]
    fn orientation_parse_round_trips() {
        for orientation in [FilmOrientation::Landscape, FilmOrientation::Portrait] {
            assert_eq!(FilmOrientation::parse(orientation.as_str()), Some(orientation));
        }
        assert_eq!(FilmOrientation::parse("sideways"), None);
    }

    #[test]
    fn orientation_toggle_is_involution() {
        let o = FilmOrientation::Portrait;
        assert_eq!(o.toggled().toggled(), o);
        assert_ne!(o.toggled(), o);
    }
}
