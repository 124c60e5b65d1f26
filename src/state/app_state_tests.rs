//! Tests for AppState.

use super::*;
use chrono::{TimeZone, Utc};

fn profile(id: &str, name: &str) -> Profile {
    Profile::snapshot(
        ProfileId::new(id).expect("valid profile id"),
        name,
        Utc.timestamp_millis_opt(0).unwrap(),
        &Settings::default(),
    )
}

// ===== Tab =====

#[test]
fn next_tab_wraps_from_last_to_first() {
    assert_eq!(Tab::Viewfinder.next(), Tab::Settings);
    assert_eq!(Tab::Settings.next(), Tab::Exposure);
    assert_eq!(Tab::Exposure.next(), Tab::Viewfinder);
}

#[test]
fn prev_tab_wraps_from_first_to_last() {
    assert_eq!(Tab::Viewfinder.prev(), Tab::Exposure);
    assert_eq!(Tab::Exposure.prev(), Tab::Settings);
}

#[test]
fn from_number_is_one_based() {
    assert_eq!(Tab::from_number(0), None);
    assert_eq!(Tab::from_number(1), Some(Tab::Viewfinder));
    assert_eq!(Tab::from_number(3), Some(Tab::Exposure));
    assert_eq!(Tab::from_number(4), None);
}

#[test]
fn tab_index_matches_all_order() {
    for (i, tab) in Tab::ALL.iter().enumerate() {
        assert_eq!(tab.index(), i);
    }
}

// ===== Fields =====

#[test]
fn settings_field_cycles_both_ways() {
    assert_eq!(SettingsField::Iso.next(), SettingsField::Profiles);
    assert_eq!(SettingsField::Profiles.next(), SettingsField::FocalLength);
    assert_eq!(SettingsField::FocalLength.prev(), SettingsField::Profiles);
}

#[test]
fn exposure_field_cycles_both_ways() {
    assert_eq!(ExposureField::RedFilter.next(), ExposureField::Condition);
    assert_eq!(ExposureField::Condition.prev(), ExposureField::RedFilter);
}

// ===== AppState =====

#[test]
fn new_state_starts_on_viewfinder_with_given_settings() {
    let settings = Settings::default().with_iso(400);
    let state = AppState::new(settings.clone());

    assert_eq!(state.settings, settings);
    assert_eq!(state.active_tab, Tab::Viewfinder);
    assert!(state.profiles.is_empty());
    assert_eq!(state.selected_profile, None);
    assert!(!state.help_visible);
    assert!(!state.is_typing());
}

#[test]
fn replace_profiles_selects_first_when_nothing_selected() {
    let mut state = AppState::default();
    state.replace_profiles(vec![profile("1", "a"), profile("2", "b")]);
    assert_eq!(state.selected_profile, Some(0));
}

#[test]
fn replace_profiles_follows_selected_id() {
    let mut state = AppState::default();
    state.replace_profiles(vec![profile("1", "a"), profile("2", "b")]);
    state.selected_profile = Some(1);

    state.replace_profiles(vec![profile("0", "new"), profile("1", "a"), profile("2", "b")]);

    assert_eq!(state.selected_profile_id().map(|id| id.as_str()), Some("2"));
}

#[test]
fn replace_profiles_clamps_when_selected_is_removed() {
    let mut state = AppState::default();
    state.replace_profiles(vec![profile("1", "a"), profile("2", "b")]);
    state.selected_profile = Some(1);

    state.replace_profiles(vec![profile("1", "a")]);

    assert_eq!(state.selected_profile, Some(0));
}

#[test]
fn replace_profiles_with_empty_list_clears_selection() {
    let mut state = AppState::default();
    state.replace_profiles(vec![profile("1", "a")]);
    state.replace_profiles(Vec::new());
    assert_eq!(state.selected_profile, None);
    assert!(state.selected_profile().is_none());
}

#[test]
fn toggle_help_flips_visibility() {
    let mut state = AppState::default();
    state.toggle_help();
    assert!(state.help_visible);
    state.toggle_help();
    assert!(!state.help_visible);
}
