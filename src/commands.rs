//! One-shot command-line subcommands.
//!
//! Each command writes plain text to any `io::Write`, so the binary hands them
//! stdout and tests hand them a `Vec<u8>`.

use crate::exposure::{
    bracket_series, exposure_breakdown, format_exposure, format_f_stop, to_fixed_1,
    DEFAULT_BRACKET_RANGE,
};
use crate::model::{
    AppError, Profile, ProfileId, Settings, FILM_FORMATS, LIGHTING_CONDITIONS,
};
use crate::storage::{KeyValueStore, ProfileStore};
use crate::viewfinder::{frame_for_settings, DeviceOrientation, LayoutVariant, ScreenSize};
use chrono::{DateTime, Utc};
use std::io::Write;

fn film_line(settings: &Settings) -> String {
    let (width, height) = settings.effective_film_dimensions();
    format!(
        "{} {} ({width}×{height} mm)",
        settings.film_format, settings.film_orientation
    )
}

fn corrections(settings: &Settings) -> String {
    let mut applied = Vec::new();
    if settings.use_reciprocity_failure {
        applied.push("reciprocity".to_string());
    }
    if settings.use_red_filter {
        applied.push("red filter".to_string());
    }
    if settings.bracket_stops != 0.0 {
        let sign = if settings.bracket_stops > 0.0 { "+" } else { "" };
        applied.push(format!("bracket {sign}{}", settings.bracket_stops));
    }
    if applied.is_empty() {
        "none".to_string()
    } else {
        applied.join(", ")
    }
}

/// `pinhole exposure [--series]`
pub fn exposure<W: Write>(out: &mut W, settings: &Settings, series: bool) -> Result<(), AppError> {
    writeln!(out, "Aperture:    {}", format_f_stop(settings))?;
    writeln!(out, "Film:        {}", film_line(settings))?;
    writeln!(out, "ISO:         {}", settings.iso)?;

    let Some(breakdown) = exposure_breakdown(settings) else {
        writeln!(out, "Lighting:    none")?;
        writeln!(out, "Exposure:    -- (choose a lighting condition)")?;
        return Ok(());
    };

    writeln!(
        out,
        "Lighting:    {} (f/{})",
        breakdown.condition.name, breakdown.condition.f_stop
    )?;
    writeln!(out, "Corrections: {}", corrections(settings))?;
    writeln!(out, "Exposure:    {}", format_exposure(breakdown.seconds))?;

    if series {
        if let Some(steps) = bracket_series(settings, DEFAULT_BRACKET_RANGE) {
            writeln!(out)?;
            writeln!(out, "Stops  Time")?;
            for step in steps {
                let stops = if step.stops > 0 {
                    format!("+{}", step.stops)
                } else {
                    step.stops.to_string()
                };
                writeln!(out, "{stops:>5}  {}", step.label)?;
            }
        }
    }
    Ok(())
}

/// `pinhole viewfinder --width W --height H [--layout ...]`
pub fn viewfinder<W: Write>(
    out: &mut W,
    settings: &Settings,
    screen: ScreenSize,
    variant: LayoutVariant,
) -> Result<(), AppError> {
    let frame = frame_for_settings(settings, screen, variant);
    let orientation = match screen.orientation() {
        DeviceOrientation::Portrait => "portrait",
        DeviceOrientation::Landscape => "landscape",
    };

    writeln!(
        out,
        "Screen: {} × {} ({orientation})",
        to_fixed_1(screen.width),
        to_fixed_1(screen.height)
    )?;
    writeln!(out, "Film:   {}", film_line(settings))?;
    writeln!(
        out,
        "Frame:  {} × {} (aspect {:.2})",
        to_fixed_1(frame.width),
        to_fixed_1(frame.height),
        frame.aspect_ratio()
    )?;
    Ok(())
}

/// `pinhole conditions`
pub fn conditions<W: Write>(out: &mut W) -> Result<(), AppError> {
    for condition in LIGHTING_CONDITIONS {
        let stop = format!("f/{}", condition.f_stop);
        writeln!(
            out,
            "{:<16}{stop:<7}{}",
            condition.name, condition.description
        )?;
    }
    Ok(())
}

/// `pinhole films`
pub fn films<W: Write>(out: &mut W) -> Result<(), AppError> {
    for film in FILM_FORMATS {
        let size = format!("{} × {} mm", film.width, film.height);
        writeln!(out, "{:<8}{size:<16}{:.2}", film.name, film.aspect_ratio())?;
    }
    Ok(())
}

fn profile_line(profile: &Profile) -> String {
    format!(
        "{}  {}  {}mm ⌀{}mm {} {} ISO {}",
        profile.id,
        profile.name,
        profile.focal_length,
        profile.pinhole_size,
        profile.film_format,
        profile.film_orientation,
        profile.iso
    )
}

/// `pinhole profile list`
pub fn profile_list<W: Write, S: KeyValueStore>(
    out: &mut W,
    store: &ProfileStore<S>,
) -> Result<(), AppError> {
    let profiles = store.load()?;
    if profiles.is_empty() {
        writeln!(out, "No profiles saved.")?;
    }
    for profile in &profiles {
        writeln!(out, "{}", profile_line(profile))?;
    }
    Ok(())
}

/// `pinhole profile save NAME`
pub fn profile_save<W: Write, S: KeyValueStore>(
    out: &mut W,
    store: &mut ProfileStore<S>,
    name: &str,
    settings: &Settings,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let profiles = store.create(name, settings, now)?;
    if let Some(saved) = profiles.last() {
        writeln!(out, "Saved profile '{}' ({})", saved.name, saved.id)?;
    }
    Ok(())
}

/// `pinhole profile show ID`
pub fn profile_show<W: Write, S: KeyValueStore>(
    out: &mut W,
    store: &ProfileStore<S>,
    id: &ProfileId,
) -> Result<(), AppError> {
    let profile = store.get(id)?;
    writeln!(out, "Id:           {}", profile.id)?;
    writeln!(out, "Name:         {}", profile.name)?;
    writeln!(out, "Created:      {}", profile.created_at.to_rfc3339())?;
    writeln!(out, "Focal length: {} mm", profile.focal_length)?;
    writeln!(out, "Pinhole:      {} mm", profile.pinhole_size)?;
    writeln!(out, "Film:         {} {}", profile.film_format, profile.film_orientation)?;
    writeln!(out, "ISO:          {}", profile.iso)?;
    writeln!(out, "Reciprocity:  {}", profile.use_reciprocity_failure)?;
    writeln!(out, "Red filter:   {}", profile.use_red_filter)?;
    Ok(())
}

/// `pinhole profile delete ID`
pub fn profile_delete<W: Write, S: KeyValueStore>(
    out: &mut W,
    store: &mut ProfileStore<S>,
    id: &ProfileId,
) -> Result<(), AppError> {
    let remaining = store.delete(id)?;
    writeln!(out, "Deleted profile {id} ({} left)", remaining.len())?;
    Ok(())
}
