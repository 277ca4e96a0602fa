//! Message handling for the App.

use crate::state::SessionId;

use super::{App, AppMessage, Dialog};

impl App {
    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::LessonLoaded {
                session_id,
                questions,
            } => {
                if !self.is_active_session(session_id) {
                    tracing::debug!(
                        session = %session_id,
                        "dropping questions for a closed lesson"
                    );
                    return;
                }
                if let Some(lesson) = self.lesson.as_mut() {
                    lesson.load_task = None;
                    lesson.session.load(questions);
                }
            }
            AppMessage::HeartRecoveryTick => {
                if !self.profile.is_full() {
                    self.profile = self.profile.with_heart_recovered();
                    tracing::debug!(hearts = self.profile.hearts(), "heart recovered");
                }
            }
            AppMessage::ForcedEndElapsed { session_id } => {
                if !self.is_active_session(session_id) {
                    tracing::debug!(session = %session_id, "stale forced end ignored");
                    return;
                }
                self.end_lesson();
                self.dialog = Some(Dialog::OutOfHearts);
            }
            AppMessage::CompletionElapsed { session_id } => {
                if self.is_active_session(session_id) {
                    self.dialog = None;
                    self.end_lesson();
                }
            }
        }
    }

    fn is_active_session(&self, session_id: SessionId) -> bool {
        self.session()
            .is_some_and(|session| session.id() == session_id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::adapters::{MockContentProvider, RecordingSpeech};
    use crate::app::{App, AppMessage, Dialog, Screen};
    use crate::config::AppConfig;
    use crate::models::Question;
    use crate::state::{ProfileState, SessionId, SessionPhase};

    fn hanging_app() -> App {
        App::new(
            AppConfig::default(),
            Arc::new(MockContentProvider::hanging()),
            Arc::new(RecordingSpeech::new()),
        )
    }

    fn question() -> Question {
        Question::fill_in_blank("q1", "I ___ tea", vec!["drink".to_string()], "drink")
    }

    #[tokio::test]
    async fn test_lesson_loaded_for_active_session() {
        let mut app = hanging_app();
        app.start_topic(0);
        let session_id = app.session().unwrap().id();

        app.handle_message(AppMessage::LessonLoaded {
            session_id,
            questions: vec![question()],
        });
        assert_eq!(app.session().unwrap().phase(), SessionPhase::Answering);
    }

    #[tokio::test]
    async fn test_lesson_loaded_for_other_session_is_dropped() {
        let mut app = hanging_app();
        app.start_topic(0);

        app.handle_message(AppMessage::LessonLoaded {
            session_id: SessionId::new(),
            questions: vec![question()],
        });
        assert_eq!(app.session().unwrap().phase(), SessionPhase::Loading);
    }

    #[tokio::test]
    async fn test_empty_lesson_is_unavailable() {
        let mut app = hanging_app();
        app.start_topic(0);
        let session_id = app.session().unwrap().id();

        app.handle_message(AppMessage::LessonLoaded {
            session_id,
            questions: Vec::new(),
        });
        assert_eq!(app.session().unwrap().phase(), SessionPhase::Unavailable);
    }

    #[test]
    fn test_recovery_tick_caps_at_max() {
        let mut app = hanging_app().with_profile(ProfileState::starting_with_hearts(4));
        app.handle_message(AppMessage::HeartRecoveryTick);
        app.handle_message(AppMessage::HeartRecoveryTick);
        assert_eq!(app.profile().hearts(), 5);
    }

    #[tokio::test]
    async fn test_stale_forced_end_is_ignored() {
        let mut app = hanging_app();
        app.start_topic(0);

        app.handle_message(AppMessage::ForcedEndElapsed {
            session_id: SessionId::new(),
        });
        assert_eq!(app.screen, Screen::Lesson);
        assert!(app.dialog.is_none());
    }

    #[tokio::test]
    async fn test_forced_end_replaces_confirmation() {
        let mut app = hanging_app();
        app.start_topic(0);
        let session_id = app.session().unwrap().id();
        app.handle_message(AppMessage::LessonLoaded {
            session_id,
            questions: vec![question()],
        });
        app.request_exit();
        assert_eq!(app.dialog, Some(Dialog::ConfirmExit));

        app.handle_message(AppMessage::ForcedEndElapsed { session_id });
        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.dialog, Some(Dialog::OutOfHearts));
        assert!(app.session().is_none());
    }
}
