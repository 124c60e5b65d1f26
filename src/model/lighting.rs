//! Lighting condition catalog.
//!
//! Reference apertures follow the "sunny 16" ladder: at the reference f-stop,
//! a shutter time of `1/ISO` gives a correct exposure.

/// A static lighting condition with its reference f-stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingCondition {
    /// Display name, also the lookup key for `Settings::selected_condition`.
    pub name: &'static str,
    /// Aperture that exposes correctly at `1/ISO` seconds.
    pub f_stop: f64,
    /// Short hint shown next to the name.
    pub description: &'static str,
}

impl LightingCondition {
    const fn new(name: &'static str, f_stop: f64, description: &'static str) -> Self {
        Self {
            name,
            f_stop,
            description,
        }
    }

    /// Look up a condition by exact name.
    ///
    /// Absence is not an error; callers treat `None` as "no exposure available".
    pub fn find(name: &str) -> Option<&'static LightingCondition> {
        LIGHTING_CONDITIONS.iter().find(|c| c.name == name)
    }

    /// Position of a named condition in [`LIGHTING_CONDITIONS`].
    pub fn index_of(name: &str) -> Option<usize> {
        LIGHTING_CONDITIONS.iter().position(|c| c.name == name)
    }
}

/// All lighting conditions, brightest first.
pub const LIGHTING_CONDITIONS: &[LightingCondition] = &[
    LightingCondition::new("Bright Sun", 16.0, "Hard shadows, sunny day"),
    LightingCondition::new("Hazy Sun", 11.0, "Soft shadows"),
    LightingCondition::new("Overcast", 8.0, "Barely visible shadows"),
    LightingCondition::new("Heavy Overcast", 5.6, "No shadows"),
    LightingCondition::new("Open Shade", 4.0, "Subject in shade on a sunny day"),
    LightingCondition::new("Sunset", 2.8, "Low sun, golden hour"),
    LightingCondition::new("Bright Interior", 2.0, "Well-lit room, large windows"),
    LightingCondition::new("Dim Interior", 1.4, "Home lighting at night"),
];
