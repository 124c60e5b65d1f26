//! Viewfinder geometry (pure).
//!
//! Fits the film frame into a share of the screen while keeping the film's
//! aspect ratio. One parameterised function serves every screen; screens
//! differ only in the [`ViewfinderLayout`] they pass.
//!
//! Units are whatever the caller measures the screen in. The terminal shell
//! uses half-cell units so that frames keep their true shape on screen.

use crate::model::Settings;

/// Available drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl ScreenSize {
    /// Screen of `width` × `height` units.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Landscape when strictly wider than tall.
    pub fn orientation(&self) -> DeviceOrientation {
        if self.width > self.height {
            DeviceOrientation::Landscape
        } else {
            DeviceOrientation::Portrait
        }
    }
}

/// Orientation of the screen itself (not of the film).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceOrientation {
    /// Taller than wide, or square.
    Portrait,
    /// Wider than tall.
    Landscape,
}

/// The axis that is filled first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Fill horizontally, derive the height.
    Width,
    /// Fill vertically, derive the width.
    Height,
}

/// Which screen the frame is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutVariant {
    /// Full-size frame on the viewfinder tab.
    Viewfinder,
    /// Small preview next to the settings form.
    SettingsPreview,
}

/// Fitting policy for one screen variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewfinderLayout {
    /// Share of the margin-adjusted priority-axis extent to fill.
    pub available_fraction: f64,
    /// Share of the cross-axis extent the frame may use.
    pub cross_fraction: f64,
    /// Fixed amount subtracted from the priority-axis extent before the
    /// fraction applies.
    pub margin_pixels: f64,
    /// Axis sized from the screen; the other follows the aspect ratio.
    pub axis_priority: Axis,
}

impl ViewfinderLayout {
    /// Viewfinder on a tall screen: fill the width.
    pub const VIEWFINDER_PORTRAIT: ViewfinderLayout = ViewfinderLayout {
        available_fraction: 0.92,
        cross_fraction: 0.85,
        margin_pixels: 4.0,
        axis_priority: Axis::Width,
    };

    /// Viewfinder on a wide screen: fill the height.
    pub const VIEWFINDER_LANDSCAPE: ViewfinderLayout = ViewfinderLayout {
        available_fraction: 0.85,
        cross_fraction: 0.92,
        margin_pixels: 4.0,
        axis_priority: Axis::Height,
    };

    /// Settings preview, same policy for both screen orientations.
    pub const SETTINGS_PREVIEW: ViewfinderLayout = ViewfinderLayout {
        available_fraction: 0.5,
        cross_fraction: 0.9,
        margin_pixels: 2.0,
        axis_priority: Axis::Height,
    };

    /// Canonical layout for a screen variant at the screen's orientation.
    pub fn for_screen(variant: LayoutVariant, screen: ScreenSize) -> Self {
        match (variant, screen.orientation()) {
            (LayoutVariant::Viewfinder, DeviceOrientation::Portrait) => Self::VIEWFINDER_PORTRAIT,
            (LayoutVariant::Viewfinder, DeviceOrientation::Landscape) => {
                Self::VIEWFINDER_LANDSCAPE
            }
            (LayoutVariant::SettingsPreview, _) => Self::SETTINGS_PREVIEW,
        }
    }

    /// Largest width and height a frame may take on `screen`.
    pub fn budget(&self, screen: ScreenSize) -> FrameSize {
        let reduce = |extent: f64| (extent - self.margin_pixels).max(0.0) * self.available_fraction;
        match self.axis_priority {
            Axis::Height => FrameSize {
                width: screen.width * self.cross_fraction,
                height: reduce(screen.height),
            },
            Axis::Width => FrameSize {
                width: reduce(screen.width),
                height: screen.height * self.cross_fraction,
            },
        }
    }
}

/// Fitted frame size, in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSize {
    /// Frame width.
    pub width: f64,
    /// Frame height.
    pub height: f64,
}

impl FrameSize {
    /// `width / height`
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Fit a `film_width` × `film_height` frame into `screen` under `layout`.
///
/// The priority axis is filled to its budget, the other extent follows from
/// the film aspect ratio, and if that overshoots the cross budget it is
/// clamped and the priority extent re-derived. The result always has the
/// film's aspect ratio.
pub fn fit_frame(
    film_width: f64,
    film_height: f64,
    screen: ScreenSize,
    layout: &ViewfinderLayout,
) -> FrameSize {
    let aspect = film_width / film_height;
    let budget = layout.budget(screen);

    match layout.axis_priority {
        Axis::Height => {
            let height = budget.height;
            let width = height * aspect;
            if width > budget.width {
                FrameSize {
                    width: budget.width,
                    height: budget.width / aspect,
                }
            } else {
                FrameSize { width, height }
            }
        }
        Axis::Width => {
            let width = budget.width;
            let height = width / aspect;
            if height > budget.height {
                FrameSize {
                    width: budget.height * aspect,
                    height: budget.height,
                }
            } else {
                FrameSize { width, height }
            }
        }
    }
}

/// Frame for the film described by `settings` (orientation applied) using the
/// canonical layout for `variant`.
pub fn frame_for_settings(
    settings: &Settings,
    screen: ScreenSize,
    variant: LayoutVariant,
) -> FrameSize {
    let (film_width, film_height) = settings.effective_film_dimensions();
    let layout = ViewfinderLayout::for_screen(variant, screen);
    fit_frame(film_width, film_height, screen, &layout)
}
