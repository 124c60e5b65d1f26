//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod exposure_tab;
mod help;
mod layout;
mod settings_tab;
mod styles;
pub mod tabs;
mod viewfinder_tab;

pub use help::render_help_overlay;
pub use layout::{header_text, render_layout};
pub use styles::{ColorConfig, Palette};
pub use viewfinder_tab::{frame_cells, frame_rect, screen_size_for};

use crate::config::KeyBindings;
use crate::model::{KeyAction, ProfileError, Settings};
use crate::state::profile_handler::{
    cancel_naming, handle_backspace, handle_char_input, submit_name,
};
use crate::state::{handle_action, AppState, ProfileCommand};
use crate::storage::{KeyValueStore, ProfileStore};
use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    profiles: ProfileStore<Box<dyn KeyValueStore>>,
    key_bindings: KeyBindings,
    palette: Palette,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        settings: Settings,
        store: Box<dyn KeyValueStore>,
        palette: Palette,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            settings,
            store,
            KeyBindings::default(),
            palette,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws only after an event.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    self.handle_resize(width, height)?;
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app around an existing terminal and load saved profiles.
    ///
    /// A profile list that cannot be read is logged and treated as empty.
    fn with_terminal(
        terminal: Terminal<B>,
        settings: Settings,
        store: Box<dyn KeyValueStore>,
        key_bindings: KeyBindings,
        palette: Palette,
    ) -> Self {
        let profiles = ProfileStore::new(store);
        let mut app_state = AppState::new(settings);

        match profiles.load() {
            Ok(list) => {
                debug!(count = list.len(), "Loaded profiles");
                app_state.replace_profiles(list);
            }
            Err(err) => warn!(error = %err, "Failed to load profiles, starting with none"),
        }

        Self {
            terminal,
            app_state,
            profiles,
            key_bindings,
            palette,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.is_typing() {
            self.handle_name_key(key);
            return false;
        }

        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        self.app_state.status = None;

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        if action == KeyAction::Quit {
            return true;
        }

        let (state, command) = handle_action(std::mem::take(&mut self.app_state), action);
        self.app_state = state;
        if let Some(command) = command {
            self.execute_profile_command(command);
        }
        false
    }

    /// Keys while the new-profile name prompt is open.
    fn handle_name_key(&mut self, key: KeyEvent) {
        let state = std::mem::take(&mut self.app_state);
        let (state, command) = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                (handle_char_input(state, ch), None)
            }
            KeyCode::Backspace => (handle_backspace(state), None),
            KeyCode::Esc => (cancel_naming(state), None),
            KeyCode::Enter => submit_name(state),
            _ => (state, None),
        };
        self.app_state = state;
        if let Some(command) = command {
            self.execute_profile_command(command);
        }
    }

    /// Run a storage command and feed the result back into the state.
    ///
    /// Failures leave the profile list untouched. Write failures show in the
    /// status bar; a failed reload is only logged.
    fn execute_profile_command(&mut self, command: ProfileCommand) {
        let target_name = match &command {
            ProfileCommand::Update(id) | ProfileCommand::Delete(id) => self
                .app_state
                .profiles
                .iter()
                .find(|p| &p.id == id)
                .map(|p| p.name.clone()),
            _ => None,
        };
        let settings = &self.app_state.settings;
        let result = match &command {
            ProfileCommand::Create { name } => self.profiles.create(name, settings, Utc::now()),
            ProfileCommand::Update(id) => self.profiles.update(id, settings),
            ProfileCommand::Delete(id) => self.profiles.delete(id),
            ProfileCommand::Reload => self.profiles.load().map_err(ProfileError::from),
        };

        let profiles = match result {
            Ok(profiles) => profiles,
            Err(err) => {
                warn!(error = %err, command = ?command, "Profile command failed");
                if command != ProfileCommand::Reload {
                    self.app_state.set_status(format!("Profile error: {err}"));
                }
                return;
            }
        };

        let count = profiles.len();
        self.app_state.replace_profiles(profiles);

        let message = match command {
            ProfileCommand::Create { name } => {
                // newest profile is appended
                self.app_state.selected_profile = count.checked_sub(1);
                format!("Saved profile '{name}'")
            }
            ProfileCommand::Update(id) => {
                format!("Updated profile '{}'", target_name.unwrap_or_else(|| id.to_string()))
            }
            ProfileCommand::Delete(id) => {
                format!("Deleted profile '{}'", target_name.unwrap_or_else(|| id.to_string()))
            }
            ProfileCommand::Reload => format!("Loaded {count} profiles"),
        };
        info!("{message}");
        self.app_state.set_status(message);
    }

    /// Handle a terminal resize event
    ///
    /// Frame geometry is recomputed from the area on every draw, so only the
    /// backend buffer needs resizing.
    fn handle_resize(&mut self, width: u16, height: u16) -> Result<(), TuiError> {
        debug!("Handling resize to {}x{}", width, height);
        self.terminal.autoresize()?;
        Ok(())
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let palette = &self.palette;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, palette);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        settings: Settings,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        Self::with_terminal(
            terminal,
            settings,
            store,
            KeyBindings::default(),
            Palette::new(ColorConfig::disabled()),
        )
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_store(
    settings: Settings,
    store: Box<dyn KeyValueStore>,
    color_config: ColorConfig,
) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(settings, store, Palette::new(color_config)) {
        Ok(app) => app,
        Err(err) => {
            let _ = restore_terminal();
            return Err(err);
        }
    };

    let result = app.run();
    restore_terminal()?;
    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FilmOrientation, Profile, ProfileId, StorageError};
    use crate::state::{InputMode, SettingsField, Tab};
    use crate::storage::{MemoryStore, PROFILES_KEY};
    use ratatui::backend::TestBackend;
    use std::cell::Cell;
    use std::rc::Rc;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io {
                path: "/nowhere".into(),
                source: io::Error::other("unreadable"),
            })
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: "/nowhere".into(),
                source: io::Error::other("read-only"),
            })
        }
    }

    /// Memory store whose reads start failing once `broken` is set.
    struct FlakyStore {
        inner: MemoryStore,
        broken: Rc<Cell<bool>>,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            if self.broken.get() {
                return Err(StorageError::Io {
                    path: "/flaky".into(),
                    source: io::Error::other("unreadable"),
                });
            }
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.inner.set(key, value)
        }
    }

    fn create_test_app_with(store: Box<dyn KeyValueStore>) -> TuiApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(90, 26)).unwrap();
        TuiApp::new_for_test(terminal, Settings::default(), store)
    }

    fn create_test_app() -> TuiApp<TestBackend> {
        create_test_app_with(Box::new(MemoryStore::new()))
    }

    fn press(app: &mut TuiApp<TestBackend>, code: KeyCode) -> bool {
        app.handle_key_test(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut TuiApp<TestBackend>, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn screen(app: &TuiApp<TestBackend>) -> String {
        app.terminal()
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn tui_error_from_io_error() {
        let tui_err: TuiError = io::Error::other("test error").into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn handle_key_q_returns_true() {
        let mut app = create_test_app();
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn handle_key_ctrl_c_returns_true() {
        let mut app = create_test_app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key_test(key));
    }

    #[test]
    fn unbound_key_does_nothing() {
        let mut app = create_test_app();
        let before = app.app_state().clone();
        assert!(!press(&mut app, KeyCode::Char('z')));
        assert_eq!(app.app_state(), &before);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = create_test_app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(!app.handle_key_test(key));
    }

    #[test]
    fn shortcut_changes_settings() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(
            app.app_state().settings.film_orientation,
            FilmOrientation::Portrait
        );
    }

    #[test]
    fn esc_closes_help() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.app_state().help_visible);
        press(&mut app, KeyCode::Esc);
        assert!(!app.app_state().help_visible);
    }

    #[test]
    fn q_quits_even_with_help_open() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn naming_flow_creates_and_selects_profile() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('n'));
        assert!(app.app_state().is_typing());

        // letters bound to actions are typed, not dispatched
        type_text(&mut app, "quick");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        let state = app.app_state();
        assert_eq!(state.input, InputMode::Normal);
        assert_eq!(state.profiles.len(), 1);
        assert_eq!(state.profiles[0].name, "quic");
        assert_eq!(state.selected_profile, Some(0));
        assert_eq!(state.status.as_deref(), Some("Saved profile 'quic'"));
    }

    #[test]
    fn esc_cancels_naming_without_saving() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "x");
        press(&mut app, KeyCode::Esc);

        assert!(!app.app_state().is_typing());
        assert!(app.app_state().profiles.is_empty());
    }

    #[test]
    fn created_profile_is_persisted_in_store() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "kit");
        press(&mut app, KeyCode::Enter);

        let raw = app.profiles.store().get(PROFILES_KEY).unwrap().unwrap();
        let stored: Vec<Profile> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "kit");
    }

    #[test]
    fn update_and_delete_act_on_selected_profile() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "kit");
        press(&mut app, KeyCode::Enter);

        // change ISO then overwrite the profile
        press(&mut app, KeyCode::Char('2'));
        for _ in 0..4 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.app_state().settings_field, SettingsField::Iso);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.app_state().profiles[0].iso, 200);

        press(&mut app, KeyCode::Char('d'));
        assert!(app.app_state().profiles.is_empty());
        assert_eq!(app.app_state().selected_profile, None);
    }

    #[test]
    fn startup_loads_existing_profiles() {
        let mut store = MemoryStore::new();
        let profile = Profile::snapshot(
            ProfileId::new("1").unwrap(),
            "saved",
            Utc::now(),
            &Settings::default(),
        );
        store
            .set(PROFILES_KEY, &serde_json::to_string(&vec![profile]).unwrap())
            .unwrap();

        let app = create_test_app_with(Box::new(store));
        assert_eq!(app.app_state().profiles.len(), 1);
        assert_eq!(app.app_state().selected_profile, Some(0));
    }

    #[test]
    fn broken_store_starts_empty_and_reports_save_failure() {
        let mut app = create_test_app_with(Box::new(BrokenStore));
        assert!(app.app_state().profiles.is_empty());

        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "kit");
        press(&mut app, KeyCode::Enter);

        let state = app.app_state();
        assert!(state.profiles.is_empty());
        assert!(state
            .status
            .as_deref()
            .is_some_and(|s| s.starts_with("Profile error:")));
    }

    #[test]
    fn failed_reload_keeps_profiles_and_shows_nothing() {
        let broken = Rc::new(Cell::new(false));
        let store = FlakyStore {
            inner: MemoryStore::new(),
            broken: Rc::clone(&broken),
        };
        let mut app = create_test_app_with(Box::new(store));

        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "kit");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.app_state().profiles.len(), 1);

        broken.set(true);
        app.handle_key_test(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT));

        let state = app.app_state();
        assert_eq!(state.profiles.len(), 1);
        assert_eq!(state.profiles[0].name, "kit");
        assert_eq!(state.status, None);
    }

    #[test]
    fn successful_reload_reports_count() {
        let mut app = create_test_app();
        app.handle_key_test(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT));
        assert_eq!(app.app_state().status.as_deref(), Some("Loaded 0 profiles"));
    }

    #[test]
    fn status_clears_on_next_key() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.app_state().status.as_deref(), Some("No profile selected"));
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.app_state().status, None);
    }

    #[test]
    fn draw_renders_active_tab() {
        let mut app = create_test_app();
        app.render_test().unwrap();
        assert!(screen(&app).contains("f/166.7"));

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.app_state().active_tab, Tab::Exposure);
        app.render_test().unwrap();
        assert!(screen(&app).contains("Breakdown"));
    }
}
