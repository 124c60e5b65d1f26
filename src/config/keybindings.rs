//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Vim-style letters and arrow keys both work for moving between and adjusting
/// fields.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only key presses resolve. Terminals disagree on whether shifted
    /// punctuation such as `+` or `?` carries the SHIFT modifier, so a
    /// character lookup that misses is retried without it.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let normalized = KeyEvent::new(key.code, key.modifiers);
        if let Some(action) = self.bindings.get(&normalized) {
            return Some(*action);
        }

        match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::SHIFT) => self
                .bindings
                .get(&KeyEvent::new(key.code, key.modifiers.difference(KeyModifiers::SHIFT)))
                .copied(),
            _ => None,
        }
    }

    /// Bind (or rebind) a key.
    pub fn insert(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(key.code, key.modifiers), action);
    }

    /// All keys bound to `action`, for help text.
    pub fn keys_for(&self, action: KeyAction) -> Vec<KeyEvent> {
        let mut keys: Vec<KeyEvent> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect();
        keys.sort_by_key(|k| format!("{:?}", k.code));
        keys
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use KeyCode::{BackTab, Char, Down, Enter, Left, Right, Tab, Up};

        let none = KeyModifiers::NONE;
        let shift = KeyModifiers::SHIFT;

        let table: &[(KeyCode, KeyModifiers, KeyAction)] = &[
            // Tabs
            (Tab, none, KeyAction::NextTab),
            (Char(']'), none, KeyAction::NextTab),
            (BackTab, shift, KeyAction::PrevTab),
            (Char('['), none, KeyAction::PrevTab),
            (Char('1'), none, KeyAction::SelectTab(1)),
            (Char('2'), none, KeyAction::SelectTab(2)),
            (Char('3'), none, KeyAction::SelectTab(3)),
            // Fields
            (Char('j'), none, KeyAction::NextField),
            (Down, none, KeyAction::NextField),
            (Char('k'), none, KeyAction::PrevField),
            (Up, none, KeyAction::PrevField),
            // Adjusting
            (Char('l'), none, KeyAction::Increase),
            (Right, none, KeyAction::Increase),
            (Char('+'), none, KeyAction::Increase),
            (Char('h'), none, KeyAction::Decrease),
            (Left, none, KeyAction::Decrease),
            (Char('-'), none, KeyAction::Decrease),
            (Char('L'), shift, KeyAction::IncreaseCoarse),
            (Right, shift, KeyAction::IncreaseCoarse),
            (Char('H'), shift, KeyAction::DecreaseCoarse),
            (Left, shift, KeyAction::DecreaseCoarse),
            (Enter, none, KeyAction::Activate),
            (Char(' '), none, KeyAction::Activate),
            // Shortcuts
            (Char('o'), none, KeyAction::ToggleOrientation),
            (Char('r'), none, KeyAction::ToggleReciprocity),
            (Char('f'), none, KeyAction::ToggleRedFilter),
            (Char('c'), none, KeyAction::CycleCondition),
            // Profiles
            (Char('n'), none, KeyAction::NewProfile),
            (Char('u'), none, KeyAction::UpdateProfile),
            (Char('d'), none, KeyAction::DeleteProfile),
            (Char('R'), shift, KeyAction::ReloadProfiles),
            // Application
            (Char('q'), none, KeyAction::Quit),
            (Char('c'), KeyModifiers::CONTROL, KeyAction::Quit),
            (Char('?'), none, KeyAction::Help),
        ];

        let bindings = table
            .iter()
            .map(|(code, modifiers, action)| (KeyEvent::new(*code, *modifiers), *action))
            .collect();

        Self { bindings }
    }
}
