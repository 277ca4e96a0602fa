//! Input handling module for keyboard and command processing.
//!
//! All input follows the same path:
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App::execute_command() -> App mutation
//! ```
//!
//! # Modules
//!
//! - [`command`] - The [`Command`] enum with all possible user actions
//! - [`context`] - [`InputContext`] for tracking current UI state
//! - [`registry`] - [`CommandRegistry`] for mapping keys to commands
//! - [`keybindings`] - Default key binding configuration

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crossterm::event::KeyEvent;

use crate::app::App;

impl App {
    /// Builds an InputContext from the current application state.
    pub fn build_input_context(&self) -> InputContext {
        let mut context = InputContext::new(self.screen).with_modal(ModalType::from(self.dialog));

        if let Some(session) = self.session() {
            context = context.with_phase(session.phase());
            if let Some(question) = session.current_question() {
                context = if question.presents_options() {
                    context.with_options(question.options().len())
                } else {
                    context.with_text_entry()
                };
            }
        }
        context
    }

    /// Executes a command. Returns `true` if the command was handled.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        tracing::debug!(command = ?cmd, "execute_command");

        if cmd.marks_dirty() {
            self.mark_dirty();
        }

        match cmd {
            Command::Quit => self.quit(),
            Command::Noop => {}
            Command::TopicUp => self.move_topic_up(),
            Command::TopicDown => self.move_topic_down(),
            Command::StartSelectedTopic => self.start_selected_topic(),
            Command::OptionUp => self.option_up(),
            Command::OptionDown => self.option_down(),
            Command::ChooseOption(index) => self.choose_option(index),
            Command::InsertChar(c) => self.insert_char(c),
            Command::DeleteChar => self.delete_char(),
            Command::CheckAnswer => self.check_answer(),
            Command::Continue => self.continue_lesson(),
            Command::RequestExit => self.request_exit(),
            Command::Speak => self.speak_prompt(),
            Command::ConfirmDialog => self.confirm_exit(),
            Command::CancelDialog => self.cancel_dialog(),
            Command::DismissDialog => self.dismiss_dialog(),
        }
        true
    }
}

/// Translate a key press into a command and run it against `app`.
///
/// Returns `true` when the key mapped to a command.
pub fn handle_key_event(app: &mut App, registry: &CommandRegistry, key: KeyEvent) -> bool {
    let context = app.build_input_context();
    match registry.dispatch(key, &context) {
        Some(cmd) => app.execute_command(cmd),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::{MockContentProvider, RecordingSpeech};
    use crate::app::{Dialog, Screen};
    use crate::config::AppConfig;
    use crate::models::Question;
    use crate::state::SessionPhase;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn create_test_app(questions: Vec<Question>) -> App {
        App::new(
            AppConfig::default(),
            Arc::new(MockContentProvider::with_lesson(questions)),
            Arc::new(RecordingSpeech::new()),
        )
    }

    #[test]
    fn test_build_input_context_default() {
        let app = create_test_app(Vec::new());
        let ctx = app.build_input_context();

        assert_eq!(ctx.screen, Screen::Dashboard);
        assert_eq!(ctx.modal, ModalType::None);
        assert!(ctx.phase.is_none());
    }

    #[test]
    fn test_build_input_context_with_dialog() {
        let mut app = create_test_app(Vec::new());
        app.dialog = Some(Dialog::OutOfHearts);
        assert_eq!(app.build_input_context().modal, ModalType::Notice);
    }

    #[test]
    fn test_execute_command_quit() {
        let mut app = create_test_app(Vec::new());
        assert!(app.execute_command(Command::Quit));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_keys_drive_a_text_question() {
        let mut app = create_test_app(vec![Question::translate_backwards(
            "q1",
            "أنا جائع",
            "I'm hungry",
        )]);
        let registry = CommandRegistry::new();

        handle_key_event(&mut app, &registry, key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Lesson);
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        app.process_pending_messages();

        let ctx = app.build_input_context();
        assert!(ctx.text_entry);
        assert_eq!(ctx.phase, Some(SessionPhase::Answering));

        for c in " i'm HUNGRY ".chars() {
            handle_key_event(&mut app, &registry, key(KeyCode::Char(c)));
        }
        handle_key_event(&mut app, &registry, key(KeyCode::Enter));

        assert_eq!(app.profile().hearts(), 5);
        assert!(app.build_input_context().is_checked());
    }
}
