//! Command registry for dispatching keyboard input to commands.
//!
//! The [`CommandRegistry`] maps key events to commands based on the current
//! [`InputContext`]:
//! - Global bindings (always active)
//! - Modal bindings (confirmation and notice dialogs)
//! - Screen bindings (dashboard vs lesson)
//! - Lesson keys whose meaning depends on the session phase

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::{InputContext, ModalType};
use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::app::Screen;

/// Registry for dispatching key events to commands.
///
/// Priority order:
/// 1. Ctrl+C - always quits
/// 2. Modal bindings - an open dialog swallows all other input
/// 3. Screen bindings
/// 4. Phase-dependent lesson keys (Enter, digits, typed characters)
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        let combo = KeyCombo::new(key.code, key.modifiers);

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }

        match context.modal {
            ModalType::Confirmation => {
                return Some(
                    self.config
                        .get_modal(ModalType::Confirmation, &combo)
                        .cloned()
                        .unwrap_or(Command::Noop),
                );
            }
            ModalType::Notice => return Some(Command::DismissDialog),
            ModalType::None => {}
        }

        match context.screen {
            Screen::Dashboard => self.config.get_screen(Screen::Dashboard, &combo).cloned(),
            Screen::Lesson => self.dispatch_lesson(key, &combo, context),
        }
    }

    fn dispatch_lesson(
        &self,
        key: KeyEvent,
        combo: &KeyCombo,
        context: &InputContext,
    ) -> Option<Command> {
        if key.code == KeyCode::Enter && key.modifiers.is_empty() {
            return if context.is_checked() {
                Some(Command::Continue)
            } else if context.is_answering() {
                Some(Command::CheckAnswer)
            } else {
                None
            };
        }

        if let Some(cmd) = self.config.get_screen(Screen::Lesson, combo) {
            return Some(cmd.clone());
        }

        let KeyCode::Char(c) = key.code else {
            return None;
        };
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
            || !context.is_answering()
        {
            return None;
        }

        if context.text_entry {
            return Some(Command::InsertChar(c));
        }
        match c.to_digit(10) {
            Some(digit @ 1..=9) if (digit as usize) <= context.option_count => {
                Some(Command::ChooseOption(digit as usize - 1))
            }
            _ => None,
        }
    }
}
