//! Lesson actions triggered by user input.

use crate::state::SessionSignal;

use super::{App, AppMessage, ScheduledTask};

impl App {
    /// Move the option highlight up. With nothing chosen, picks the last option.
    pub fn option_up(&mut self) {
        let Some(lesson) = self.lesson.as_mut() else {
            return;
        };
        let count = lesson
            .session
            .current_question()
            .map_or(0, |question| question.options().len());
        if count == 0 {
            return;
        }
        let next = match lesson.session.selected_option_index() {
            Some(index) => index.saturating_sub(1),
            None => count - 1,
        };
        lesson.session.select_option_at(next);
        self.mark_dirty();
    }

    /// Move the option highlight down. With nothing chosen, picks the first option.
    pub fn option_down(&mut self) {
        let Some(lesson) = self.lesson.as_mut() else {
            return;
        };
        let count = lesson
            .session
            .current_question()
            .map_or(0, |question| question.options().len());
        if count == 0 {
            return;
        }
        let next = match lesson.session.selected_option_index() {
            Some(index) => (index + 1).min(count - 1),
            None => 0,
        };
        lesson.session.select_option_at(next);
        self.mark_dirty();
    }

    pub fn choose_option(&mut self, index: usize) {
        if let Some(lesson) = self.lesson.as_mut() {
            lesson.session.select_option_at(index);
            self.mark_dirty();
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(lesson) = self.lesson.as_mut() {
            lesson.session.push_char(c);
            self.mark_dirty();
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(lesson) = self.lesson.as_mut() {
            lesson.session.pop_char();
            self.mark_dirty();
        }
    }

    /// Judge the pending answer and charge a heart when it is wrong.
    ///
    /// Losing the last heart schedules the forced end of the lesson.
    pub fn check_answer(&mut self) {
        let Some(lesson) = self.lesson.as_mut() else {
            return;
        };
        let Some(SessionSignal::HeartLost) = lesson.session.check() else {
            self.mark_dirty();
            return;
        };

        let loss = self.profile.with_heart_lost();
        self.profile = loss.profile;
        tracing::info!(hearts = self.profile.hearts(), "heart lost");

        if loss.depleted && lesson.forced_end.is_none() {
            let session_id = lesson.session.id();
            tracing::info!(session = %session_id, "out of hearts, ending lesson");
            lesson.forced_end = Some(ScheduledTask::after(
                self.config.forced_end_delay,
                self.message_tx.clone(),
                AppMessage::ForcedEndElapsed { session_id },
            ));
        }
        self.mark_dirty();
    }

    /// Move past the feedback sheet. Finishing the last question awards the
    /// lesson and schedules the return to the dashboard.
    pub fn continue_lesson(&mut self) {
        let Some(lesson) = self.lesson.as_mut() else {
            return;
        };
        if let Some(SessionSignal::Completed { xp_award }) = lesson.session.continue_lesson() {
            let topic_id = lesson.session.topic().id;
            self.profile = self.profile.with_completion(topic_id, xp_award);
            tracing::info!(topic = topic_id, xp = self.profile.xp(), "lesson completed");

            let session_id = lesson.session.id();
            lesson.completion = Some(ScheduledTask::after(
                self.config.completion_delay,
                self.message_tx.clone(),
                AppMessage::CompletionElapsed { session_id },
            ));
        }
        self.mark_dirty();
    }

    /// Read the current prompt aloud. Prompts in the native language are skipped.
    pub fn speak_prompt(&self) {
        let Some(question) = self.session().and_then(|session| session.current_question()) else {
            return;
        };
        if question.is_speakable() {
            self.speech.speak(&question.prompt, &self.config.speech_language);
        }
    }
}
