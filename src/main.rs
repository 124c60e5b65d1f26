//! Pinhole exposure calculator - Entry Point

use clap::{Parser, Subcommand, ValueEnum};
use pinhole::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    CliOverrides, ResolvedConfig,
};
use pinhole::model::{
    AppError, FilmFormat, FilmOrientation, InvalidProfileId, LightingCondition, ProfileId,
    MAX_BRACKET_STOPS, MIN_BRACKET_STOPS,
};
use pinhole::storage::{FileStore, ProfileStore};
use pinhole::view::ColorConfig;
use pinhole::viewfinder::{LayoutVariant, ScreenSize};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Pinhole camera exposure calculator with a terminal viewfinder
#[derive(Parser, Debug)]
#[command(name = "pinhole")]
#[command(version)]
#[command(about = "Pinhole camera exposure calculator with a terminal viewfinder")]
pub struct Args {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the profile store (JSON file)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Disable colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Focal length in millimetres
    #[arg(long, global = true, value_name = "MM")]
    pub focal_length: Option<f64>,

    /// Pinhole diameter in millimetres
    #[arg(long = "pinhole", global = true, value_name = "MM")]
    pub pinhole_size: Option<f64>,

    /// Film format name (see `pinhole films`)
    #[arg(long, global = true, value_name = "NAME")]
    pub film: Option<String>,

    /// Portrait film orientation
    #[arg(long, global = true)]
    pub portrait: bool,

    /// Film speed
    #[arg(long, global = true, value_name = "N")]
    pub iso: Option<u32>,

    /// Lighting condition name (see `pinhole conditions`)
    #[arg(long, global = true, value_name = "NAME")]
    pub condition: Option<String>,

    /// Bracket offset in stops
    #[arg(
        long,
        global = true,
        value_name = "STOPS",
        allow_negative_numbers = true,
        value_parser = parse_bracket_stops
    )]
    pub bracket: Option<f64>,

    /// Correct long exposures for reciprocity failure
    #[arg(long, global = true)]
    pub reciprocity: bool,

    /// Add three stops for a red filter
    #[arg(long, global = true)]
    pub red_filter: bool,

    /// Start from a saved profile
    #[arg(long, global = true, value_name = "ID", value_parser = parse_profile_id)]
    pub profile: Option<ProfileId>,

    #[allow(missing_docs)]
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[allow(missing_docs)]
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Run the terminal UI (default)
    Tui,
    /// Print the f-stop and exposure time
    Exposure {
        /// Also print the bracket series
        #[arg(long)]
        series: bool,
    },
    /// Print the viewfinder frame size for a screen
    Viewfinder {
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
        #[arg(long, value_enum, default_value_t = LayoutArg::Viewfinder)]
        layout: LayoutArg,
    },
    /// List lighting conditions
    Conditions,
    /// List film formats
    Films,
    /// Manage saved profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[allow(missing_docs)]
#[derive(Subcommand, Debug, PartialEq)]
pub enum ProfileAction {
    /// List saved profiles
    List,
    /// Save the current settings under a new name
    Save { name: String },
    /// Show one profile
    Show {
        #[arg(value_parser = parse_profile_id)]
        id: ProfileId,
    },
    /// Delete one profile
    Delete {
        #[arg(value_parser = parse_profile_id)]
        id: ProfileId,
    },
}

#[allow(missing_docs)]
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutArg {
    Viewfinder,
    Settings,
}

impl From<LayoutArg> for LayoutVariant {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Viewfinder => LayoutVariant::Viewfinder,
            LayoutArg::Settings => LayoutVariant::SettingsPreview,
        }
    }
}

fn parse_profile_id(raw: &str) -> Result<ProfileId, InvalidProfileId> {
    ProfileId::new(raw)
}

fn parse_bracket_stops(raw: &str) -> Result<f64, String> {
    let stops: f64 = raw.parse().map_err(|_| format!("'{raw}' is not a number"))?;
    if (MIN_BRACKET_STOPS..=MAX_BRACKET_STOPS).contains(&stops) {
        Ok(stops)
    } else {
        Err(format!(
            "{stops} is not in {MIN_BRACKET_STOPS}..={MAX_BRACKET_STOPS}"
        ))
    }
}

/// Settings and store overrides given on the command line.
///
/// Switch flags only ever turn things on; leaving one off keeps the
/// configured value.
fn cli_overrides(args: &Args) -> Result<CliOverrides, AppError> {
    let film_format = args
        .film
        .as_deref()
        .map(|name| FilmFormat::find(name).ok_or_else(|| AppError::UnknownFilmFormat(name.into())))
        .transpose()?;
    let condition = args
        .condition
        .as_deref()
        .map(|name| {
            LightingCondition::find(name).ok_or_else(|| AppError::UnknownCondition(name.into()))
        })
        .transpose()?;

    Ok(CliOverrides {
        store_path: args.store.clone(),
        focal_length: args.focal_length,
        pinhole_size: args.pinhole_size,
        film_format,
        film_orientation: args.portrait.then_some(FilmOrientation::Portrait),
        iso: args.iso,
        condition,
        bracket_stops: args.bracket,
        reciprocity_failure: args.reciprocity.then_some(true),
        red_filter: args.red_filter.then_some(true),
    })
}

/// Defaults → config file → env vars → `--profile` → CLI flags.
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let overrides = cli_overrides(args)?;

    let config_file = load_config_with_precedence(args.config.clone())?;
    let mut config = apply_env_overrides(merge_config(config_file)?);

    if let Some(store_path) = &overrides.store_path {
        config.store_path = store_path.clone();
    }

    if let Some(id) = &args.profile {
        let store = ProfileStore::new(FileStore::new(&config.store_path));
        let profile = store.get(id)?;
        config.settings = profile.apply_to(config.settings);
    }

    Ok(apply_cli_overrides(config, &overrides))
}

fn run(args: Args) -> Result<(), AppError> {
    let config = resolve_config(&args)?;

    let wants_tui = matches!(args.command, None | Some(Command::Tui));
    if let Err(err) = pinhole::logging::init(&config.log_file_path) {
        // one-shot commands run without a log file
        if wants_tui {
            return Err(err.into());
        }
    }
    info!(config = ?config, "Configuration loaded and resolved");

    let settings = config.settings;
    let mut out = io::stdout().lock();

    match args.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            drop(out);
            let store = Box::new(FileStore::new(&config.store_path));
            pinhole::view::run_with_store(
                settings,
                store,
                ColorConfig::from_env_and_args(args.no_color),
            )?;
        }
        Command::Exposure { series } => pinhole::commands::exposure(&mut out, &settings, series)?,
        Command::Viewfinder {
            width,
            height,
            layout,
        } => pinhole::commands::viewfinder(
            &mut out,
            &settings,
            ScreenSize::new(width, height),
            layout.into(),
        )?,
        Command::Conditions => pinhole::commands::conditions(&mut out)?,
        Command::Films => pinhole::commands::films(&mut out)?,
        Command::Profile { action } => {
            let mut store = ProfileStore::new(FileStore::new(&config.store_path));
            match action {
                ProfileAction::List => pinhole::commands::profile_list(&mut out, &store)?,
                ProfileAction::Save { name } => pinhole::commands::profile_save(
                    &mut out,
                    &mut store,
                    &name,
                    &settings,
                    chrono::Utc::now(),
                )?,
                ProfileAction::Show { id } => {
                    pinhole::commands::profile_show(&mut out, &store, &id)?
                }
                ProfileAction::Delete { id } => {
                    pinhole::commands::profile_delete(&mut out, &mut store, &id)?
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("pinhole: {err}");
            ExitCode::FAILURE
        }
    }
}
