//! Navigation methods for the App.

use crate::models::catalog;
use crate::provider::LessonRequest;
use crate::state::LessonSession;

use super::{ActiveLesson, App, AppMessage, Dialog, ScheduledTask, Screen};

impl App {
    /// Move the topic cursor up
    pub fn move_topic_up(&mut self) {
        if self.dashboard_index > 0 {
            self.dashboard_index -= 1;
        }
    }

    /// Move the topic cursor down
    pub fn move_topic_down(&mut self) {
        let max = catalog().len();
        if max > 0 && self.dashboard_index < max - 1 {
            self.dashboard_index += 1;
        }
    }

    pub fn start_selected_topic(&mut self) {
        self.start_topic(self.dashboard_index);
    }

    /// Open a lesson for the topic at `index` in the catalog.
    ///
    /// With no hearts left this opens the `NotEnoughHearts` notice instead
    /// and no session is created.
    pub fn start_topic(&mut self, index: usize) {
        let Some(topic) = catalog().get(index).copied() else {
            return;
        };
        self.dashboard_index = index;
        self.mark_dirty();

        if !self.profile.can_start_lesson() {
            tracing::info!(topic = topic.id, "topic gated: no hearts");
            self.dialog = Some(Dialog::NotEnoughHearts);
            return;
        }

        let session = LessonSession::start(topic);
        let session_id = session.id();
        tracing::info!(
            topic = topic.id,
            session = %session_id,
            provider = self.provider.name(),
            "starting lesson"
        );

        let provider = self.provider.clone();
        let tx = self.message_tx.clone();
        let request = LessonRequest::for_topic(&topic);
        let load_task = ScheduledTask::spawn(async move {
            let questions = provider.generate_lesson(&request).await;
            let _ = tx.send(AppMessage::LessonLoaded {
                session_id,
                questions,
            });
        });

        let mut lesson = ActiveLesson::new(session);
        lesson.load_task = Some(load_task);
        self.lesson = Some(lesson);
        self.screen = Screen::Lesson;
    }

    /// Ask before leaving the lesson. Ignored while questions are loading.
    pub fn request_exit(&mut self) {
        let can_exit = self.session().is_some_and(|session| session.can_exit());
        if can_exit && self.dialog.is_none() {
            self.dialog = Some(Dialog::ConfirmExit);
            self.mark_dirty();
        }
    }

    /// Leave the lesson without awarding anything.
    pub fn confirm_exit(&mut self) {
        if self.dialog == Some(Dialog::ConfirmExit) {
            self.dialog = None;
            tracing::info!("lesson abandoned");
            self.end_lesson();
        }
    }

    /// Close a confirmation without acting on it.
    pub fn cancel_dialog(&mut self) {
        if self.dialog == Some(Dialog::ConfirmExit) {
            self.dialog = None;
            self.mark_dirty();
        }
    }

    /// Acknowledge a notice.
    pub fn dismiss_dialog(&mut self) {
        if self.dialog.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Drop the active lesson, cancelling its timers, and go back to the dashboard.
    pub(super) fn end_lesson(&mut self) {
        self.lesson = None;
        self.screen = Screen::Dashboard;
        self.mark_dirty();
    }
}
