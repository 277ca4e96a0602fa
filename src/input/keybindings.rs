//! Default keybindings for the application.
//!
//! Maps key combinations to commands per screen and modal. Keys whose
//! meaning depends on lesson state (Enter, digits, typed characters) are
//! resolved by the [`CommandRegistry`](super::CommandRegistry).

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;
use crate::app::Screen;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Global keybindings (always active)
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per modal type
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    /// Keybindings per screen
    pub screen: HashMap<Screen, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            screen: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_screen_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
    }

    fn setup_modal_bindings(&mut self) {
        let mut confirmation = HashMap::new();
        for code in [KeyCode::Char('y'), KeyCode::Enter] {
            confirmation.insert(KeyCombo::plain(code), Command::ConfirmDialog);
        }
        confirmation.insert(KeyCombo::shift(KeyCode::Char('Y')), Command::ConfirmDialog);
        for code in [KeyCode::Char('n'), KeyCode::Esc] {
            confirmation.insert(KeyCombo::plain(code), Command::CancelDialog);
        }
        confirmation.insert(KeyCombo::shift(KeyCode::Char('N')), Command::CancelDialog);
        self.modal.insert(ModalType::Confirmation, confirmation);
    }

    fn setup_screen_bindings(&mut self) {
        let mut dashboard = HashMap::new();
        dashboard.insert(KeyCombo::plain(KeyCode::Up), Command::TopicUp);
        dashboard.insert(KeyCombo::plain(KeyCode::Char('k')), Command::TopicUp);
        dashboard.insert(KeyCombo::plain(KeyCode::Down), Command::TopicDown);
        dashboard.insert(KeyCombo::plain(KeyCode::Char('j')), Command::TopicDown);
        dashboard.insert(KeyCombo::plain(KeyCode::Enter), Command::StartSelectedTopic);
        dashboard.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.screen.insert(Screen::Dashboard, dashboard);

        let mut lesson = HashMap::new();
        lesson.insert(KeyCombo::plain(KeyCode::Esc), Command::RequestExit);
        lesson.insert(KeyCombo::ctrl(KeyCode::Char('s')), Command::Speak);
        lesson.insert(KeyCombo::plain(KeyCode::Up), Command::OptionUp);
        lesson.insert(KeyCombo::plain(KeyCode::Down), Command::OptionDown);
        lesson.insert(KeyCombo::plain(KeyCode::Backspace), Command::DeleteChar);
        self.screen.insert(Screen::Lesson, lesson);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|bindings| bindings.get(combo))
    }

    pub fn get_screen(&self, screen: Screen, combo: &KeyCombo) -> Option<&Command> {
        self.screen.get(&screen).and_then(|bindings| bindings.get(combo))
    }
}
