//! Film format catalog.
//!
//! Physical frame dimensions of the supported film stocks. Dimensions are
//! stored landscape-first (`width >= height`); orientation is applied by
//! [`FilmOrientation`](super::FilmOrientation) at the point of use.

use std::fmt;

/// A named film frame size in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilmFormat {
    /// Catalog name, also the persisted identity (e.g. "6x9").
    pub name: &'static str,
    /// Frame width in millimetres (landscape).
    pub width: f64,
    /// Frame height in millimetres (landscape).
    pub height: f64,
}

impl FilmFormat {
    /// Build a format from raw dimensions (landscape-first).
    pub const fn new(name: &'static str, width: f64, height: f64) -> Self {
        Self {
            name,
            width,
            height,
        }
    }

    /// Look up a catalog entry by exact name.
    pub fn find(name: &str) -> Option<FilmFormat> {
        FILM_FORMATS.iter().find(|f| f.name == name).copied()
    }

    /// Landscape aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Position of this format in [`FILM_FORMATS`], if it is a catalog entry.
    pub fn catalog_index(&self) -> Option<usize> {
        FILM_FORMATS.iter().position(|f| f.name == self.name)
    }
}

impl Default for FilmFormat {
    fn default() -> Self {
        FILM_FORMATS[DEFAULT_FILM_FORMAT_INDEX]
    }
}

impl fmt::Display for FilmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Index of 6x9 in [`FILM_FORMATS`].
const DEFAULT_FILM_FORMAT_INDEX: usize = 4;

/// All supported film formats, smallest first.
pub const FILM_FORMATS: &[FilmFormat] = &[
    FilmFormat::new("35mm", 36.0, 24.0),
    FilmFormat::new("6x4.5", 56.0, 41.5),
    FilmFormat::new("6x6", 56.0, 56.0),
    FilmFormat::new("6x7", 70.0, 56.0),
    FilmFormat::new("6x9", 84.0, 56.0),
    FilmFormat::new("6x12", 112.0, 56.0),
    FilmFormat::new("6x17", 168.0, 56.0),
    FilmFormat::new("4x5", 120.0, 96.0),
    FilmFormat::new("5x7", 170.0, 120.0),
    FilmFormat::new("8x10", 250.0, 200.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_six_by_nine() {
        assert_eq!(FilmFormat::default().name, "6x9");
    }

    #[test]
    fn find_matches_exact_name_only() {
        assert_eq!(FilmFormat::find("6x6").map(|f| f.width), Some(56.0));
        assert!(FilmFormat::find("6X6").is_none());
        assert!(FilmFormat::find("").is_none());
    }

    #[test]
    fn catalog_is_landscape_first() {
        for format in FILM_FORMATS {
            assert!(
                format.width >= format.height,
                "{} should be stored landscape-first",
                format.name
            );
        }
    }

    #[test]
    fn catalog_names_are_unique() {
        for (i, a) in FILM_FORMATS.iter().enumerate() {
            for b in &FILM_FORMATS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn catalog_index_round_trips() {
        let format = FilmFormat::find("4x5").unwrap();
        assert_eq!(format.catalog_index(), Some(7));
    }
}
