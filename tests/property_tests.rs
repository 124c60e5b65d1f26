//! Property-based tests for the exposure model, viewfinder geometry and
//! state transitions.
//!
//! Tests validate:
//! 1. f-stop matches focal length / pinhole size to one decimal
//! 2. Bracketing, red filter and reciprocity scale exposure as modelled
//! 3. Frames keep the film aspect ratio and stay inside the budget
//! 4. Steppers stay inside their ranges

use pinhole::exposure::{
    exposure_breakdown, exposure_seconds, f_stop, format_exposure, RECIPROCITY_EXPONENT,
};
use pinhole::model::{
    FilmOrientation, KeyAction, Settings, FILM_FORMATS, LIGHTING_CONDITIONS, MAX_BRACKET_STOPS,
    MIN_BRACKET_STOPS,
};
use pinhole::state::exposure_handler::step_bracket;
use pinhole::state::settings_handler::{step_iso, step_pinhole_size, Step, ISO_LADDER};
use pinhole::state::{handle_action, AppState, Tab};
use pinhole::viewfinder::{frame_for_settings, LayoutVariant, ScreenSize, ViewfinderLayout};
use proptest::prelude::*;

// ===== Strategies =====

fn condition_name() -> impl Strategy<Value = String> {
    prop::sample::select(LIGHTING_CONDITIONS.to_vec()).prop_map(|c| c.name.to_string())
}

fn metered_settings() -> impl Strategy<Value = Settings> {
    (
        1.0f64..500.0,
        0.05f64..2.0,
        prop::sample::select(ISO_LADDER.to_vec()),
        condition_name(),
        prop::sample::select(FILM_FORMATS.to_vec()),
    )
        .prop_map(|(focal, pinhole, iso, condition, film)| {
            Settings::default()
                .with_focal_length(focal)
                .with_pinhole_size(pinhole)
                .with_iso(iso)
                .with_condition(Some(condition))
                .with_film_format(film)
        })
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Up),
        Just(Step::Down),
        Just(Step::UpCoarse),
        Just(Step::DownCoarse)
    ]
}

fn variant() -> impl Strategy<Value = LayoutVariant> {
    prop_oneof![
        Just(LayoutVariant::Viewfinder),
        Just(LayoutVariant::SettingsPreview)
    ]
}

// ===== Property 1: f-stop =====

proptest! {
    #[test]
    fn f_stop_is_ratio_to_one_decimal(focal in 1.0f64..1000.0, pinhole in 0.01f64..5.0) {
        let settings = Settings::default()
            .with_focal_length(focal)
            .with_pinhole_size(pinhole);
        let expected = focal / pinhole;
        prop_assert!((f_stop(&settings) - expected).abs() <= 0.05 + 1e-9 * expected);
    }
}

// ===== Property 2: exposure scaling =====

proptest! {
    #[test]
    fn one_stop_bracket_doubles_exposure(settings in metered_settings()) {
        let base = exposure_seconds(&settings.clone().with_bracket_stops(0.0)).unwrap();
        let over = exposure_seconds(&settings.with_bracket_stops(1.0)).unwrap();
        prop_assert!((over - 2.0 * base).abs() <= 1e-9 * over.abs());
    }

    #[test]
    fn red_filter_multiplies_by_eight(
        settings in metered_settings(),
        reciprocity in any::<bool>(),
    ) {
        let settings = settings.with_reciprocity_failure(reciprocity);
        let plain = exposure_seconds(&settings.clone().with_red_filter(false)).unwrap();
        let filtered = exposure_seconds(&settings.with_red_filter(true)).unwrap();
        prop_assert!((filtered - 8.0 * plain).abs() <= 1e-9 * filtered.abs());
    }

    #[test]
    fn reciprocity_applies_only_above_one_second(settings in metered_settings()) {
        let breakdown = exposure_breakdown(&settings.with_reciprocity_failure(true)).unwrap();
        if breakdown.metered > 1.0 {
            prop_assert!(breakdown.reciprocity_applied);
            let expected = breakdown.metered.powf(RECIPROCITY_EXPONENT);
            prop_assert!((breakdown.corrected - expected).abs() <= 1e-9 * expected);
        } else {
            prop_assert!(!breakdown.reciprocity_applied);
            prop_assert_eq!(breakdown.corrected, breakdown.metered);
        }
    }

    #[test]
    fn formatted_exposure_never_shows_sixty_seconds(seconds in 0.0001f64..100_000.0) {
        let text = format_exposure(seconds);
        prop_assert!(text.ends_with('s') || text.ends_with('m'));
        prop_assert!(!text.ends_with(" 60s"));
    }
}

// ===== Property 3: viewfinder geometry =====

proptest! {
    #[test]
    fn frame_keeps_film_aspect_and_fits_budget(
        width in 50.0f64..4000.0,
        height in 50.0f64..4000.0,
        film in prop::sample::select(FILM_FORMATS.to_vec()),
        portrait in any::<bool>(),
        variant in variant(),
    ) {
        let orientation = if portrait {
            FilmOrientation::Portrait
        } else {
            FilmOrientation::Landscape
        };
        let settings = Settings::default()
            .with_film_format(film)
            .with_film_orientation(orientation);
        let screen = ScreenSize::new(width, height);

        let frame = frame_for_settings(&settings, screen, variant);
        let budget = ViewfinderLayout::for_screen(variant, screen).budget(screen);
        let (film_w, film_h) = settings.effective_film_dimensions();

        prop_assert!((frame.aspect_ratio() - film_w / film_h).abs() < 1e-6);
        prop_assert!(frame.width <= budget.width + 1e-9);
        prop_assert!(frame.height <= budget.height + 1e-9);
    }

    #[test]
    fn orientation_swaps_dimensions(film in prop::sample::select(FILM_FORMATS.to_vec())) {
        let landscape = Settings::default().with_film_format(film);
        let portrait = landscape.clone().with_film_orientation(FilmOrientation::Portrait);
        let (lw, lh) = landscape.effective_film_dimensions();
        prop_assert_eq!(portrait.effective_film_dimensions(), (lh, lw));
    }
}

// ===== Property 4: steppers and handlers =====

proptest! {
    #[test]
    fn bracket_stays_clamped(steps in prop::collection::vec(step(), 0..30)) {
        let stops = steps.into_iter().fold(0.0, step_bracket);
        prop_assert!((MIN_BRACKET_STOPS..=MAX_BRACKET_STOPS).contains(&stops));
    }

    #[test]
    fn iso_stays_on_ladder(steps in prop::collection::vec(step(), 1..30)) {
        let iso = steps.into_iter().fold(100, step_iso);
        prop_assert!(ISO_LADDER.contains(&iso));
    }

    #[test]
    fn pinhole_never_reaches_zero(steps in prop::collection::vec(step(), 0..50)) {
        let size = steps.into_iter().fold(0.3, step_pinhole_size);
        prop_assert!(size > 0.0);
    }

    #[test]
    fn tab_cycling_returns_home(n in 0usize..20) {
        let mut state = AppState::default();
        for _ in 0..(n * Tab::ALL.len()) {
            state = handle_action(state, KeyAction::NextTab).0;
        }
        prop_assert_eq!(state.active_tab, Tab::Viewfinder);
    }
}
