//! Lesson session state machine.
//!
//! ```text
//! Loading ──load──▶ Answering ──check──▶ Checked(Correct | Incorrect)
//!    │                  ▲                        │
//!    │                  └──────continue──────────┤ (more questions)
//!    │                                           ▼
//!    └──load([])──▶ Unavailable          Completed (after the last one)
//! ```
//!
//! The session only reports what happened through [`SessionSignal`]s; the
//! app applies them to the profile.

use std::fmt;
use uuid::Uuid;

use crate::models::{Question, TopicConfig};

/// Experience awarded for finishing a lesson, however many answers were wrong.
pub const LESSON_XP_AWARD: u32 = 15;

/// Identity of one session, used to discard stale deferred messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the content provider.
    Loading,
    Answering,
    Checked(Feedback),
    /// The last question was continued past.
    Completed,
    /// The provider returned no questions.
    Unavailable,
}

/// The learner's pending answer for the current question.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    Choice(String),
    Text(String),
}

impl Selection {
    pub fn as_str(&self) -> &str {
        match self {
            Selection::Empty => "",
            Selection::Choice(value) | Selection::Text(value) => value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

/// Effects the app must apply to the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    HeartLost,
    Completed { xp_award: u32 },
}

#[derive(Debug, Clone)]
pub struct LessonSession {
    id: SessionId,
    topic: TopicConfig,
    questions: Vec<Question>,
    current_index: usize,
    selection: Selection,
    phase: SessionPhase,
}

impl LessonSession {
    /// Start a session for `topic`, waiting for questions.
    pub fn start(topic: TopicConfig) -> Self {
        Self {
            id: SessionId::new(),
            topic,
            questions: Vec::new(),
            current_index: 0,
            selection: Selection::Empty,
            phase: SessionPhase::Loading,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn topic(&self) -> &TopicConfig {
        &self.topic
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn feedback(&self) -> Option<Feedback> {
        match self.phase {
            SessionPhase::Checked(feedback) => Some(feedback),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            SessionPhase::Answering | SessionPhase::Checked(_) => {
                self.questions.get(self.current_index)
            }
            _ => None,
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    /// Share of the lesson already behind the learner, in percent.
    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current_index * 100) as f64 / self.questions.len() as f64
    }

    /// Exit needs a loaded (or failed) session.
    pub fn can_exit(&self) -> bool {
        self.phase != SessionPhase::Loading
    }

    /// True when the check action would be accepted.
    pub fn can_check(&self) -> bool {
        self.phase == SessionPhase::Answering && !self.selection.is_empty()
    }

    /// Deliver the provider's questions. Ignored unless still loading.
    pub fn load(&mut self, questions: Vec<Question>) {
        if self.phase != SessionPhase::Loading {
            tracing::debug!(
                session = %self.id,
                "ignoring questions for a session that already loaded"
            );
            return;
        }
        self.phase = if questions.is_empty() {
            tracing::warn!(
                session = %self.id,
                topic = self.topic.id,
                "provider returned no questions"
            );
            SessionPhase::Unavailable
        } else {
            tracing::debug!(session = %self.id, count = questions.len(), "lesson loaded");
            SessionPhase::Answering
        };
        self.questions = questions;
        self.current_index = 0;
        self.selection = Selection::Empty;
    }

    pub fn select_option(&mut self, value: impl Into<String>) {
        if self.phase == SessionPhase::Answering {
            self.selection = Selection::Choice(value.into());
        }
    }

    /// Select the option at `index` of the current question, if it exists.
    pub fn select_option_at(&mut self, index: usize) {
        let option = self
            .current_question()
            .and_then(|question| question.options().get(index))
            .cloned();
        if let Some(option) = option {
            self.select_option(option);
        }
    }

    /// Position of the chosen option within the current question's options.
    pub fn selected_option_index(&self) -> Option<usize> {
        let Selection::Choice(value) = &self.selection else {
            return None;
        };
        self.current_question()?
            .options()
            .iter()
            .position(|option| option == value)
    }

    pub fn set_text_input(&mut self, value: impl Into<String>) {
        if self.phase == SessionPhase::Answering {
            self.selection = Selection::Text(value.into());
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.phase != SessionPhase::Answering {
            return;
        }
        let mut text = match std::mem::take(&mut self.selection) {
            Selection::Text(text) => text,
            _ => String::new(),
        };
        text.push(c);
        self.selection = Selection::Text(text);
    }

    pub fn pop_char(&mut self) {
        if self.phase != SessionPhase::Answering {
            return;
        }
        if let Selection::Text(text) = &mut self.selection {
            text.pop();
        }
    }

    /// Judge the pending answer.
    ///
    /// Accepted only while answering with a non-empty selection. Returns
    /// `HeartLost` when the answer is wrong. A second call before
    /// `continue_lesson` is ignored, so one wrong answer costs one heart.
    pub fn check(&mut self) -> Option<SessionSignal> {
        if !self.can_check() {
            return None;
        }
        let question = self.questions.get(self.current_index)?;
        let feedback = if question.accepts(self.selection.as_str()) {
            Feedback::Correct
        } else {
            Feedback::Incorrect
        };
        tracing::debug!(
            session = %self.id,
            index = self.current_index,
            ?feedback,
            "answer checked"
        );
        self.phase = SessionPhase::Checked(feedback);
        match feedback {
            Feedback::Correct => None,
            Feedback::Incorrect => Some(SessionSignal::HeartLost),
        }
    }

    /// Move past the feedback.
    ///
    /// Advances to the next question, or completes the lesson after the last
    /// one and returns the completion award.
    pub fn continue_lesson(&mut self) -> Option<SessionSignal> {
        if !matches!(self.phase, SessionPhase::Checked(_)) {
            return None;
        }
        self.selection = Selection::Empty;
        if self.is_last_question() {
            tracing::debug!(session = %self.id, topic = self.topic.id, "lesson completed");
            self.phase = SessionPhase::Completed;
            Some(SessionSignal::Completed {
                xp_award: LESSON_XP_AWARD,
            })
        } else {
            self.current_index += 1;
            self.phase = SessionPhase::Answering;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::find_topic;

    fn topic() -> TopicConfig {
        *find_topic("food").unwrap()
    }

    fn lesson() -> Vec<Question> {
        vec![
            Question::multiple_choice(
                "q0",
                "Which one is a drink?",
                vec!["Coffee".to_string(), "Bread".to_string()],
                "Coffee",
            )
            .with_explanation("القهوة مشروب."),
            Question::translate_backwards("q1", "أنا جائع", "I'm hungry")
                .with_acceptable_answers(["i am hungry"]),
            Question::fill_in_blank(
                "q2",
                "I ___ tea every morning.",
                vec!["drink".to_string(), "eat".to_string()],
                "drink",
            ),
        ]
    }

    fn loaded() -> LessonSession {
        let mut session = LessonSession::start(topic());
        session.load(lesson());
        session
    }

    #[test]
    fn test_start_is_loading_and_ignores_input() {
        let mut session = LessonSession::start(topic());
        assert_eq!(session.phase(), SessionPhase::Loading);
        assert!(!session.can_exit());

        session.select_option("Coffee");
        session.push_char('a');
        assert!(session.selection().is_empty());
        assert_eq!(session.check(), None);
        assert_eq!(session.continue_lesson(), None);
    }

    #[test]
    fn test_load_empty_is_unavailable() {
        let mut session = LessonSession::start(topic());
        session.load(Vec::new());
        assert_eq!(session.phase(), SessionPhase::Unavailable);
        assert!(session.current_question().is_none());
        assert!(session.can_exit());
        assert_eq!(session.progress_percent(), 0.0);
    }

    #[test]
    fn test_second_load_is_ignored() {
        let mut session = loaded();
        session.load(Vec::new());
        assert_eq!(session.phase(), SessionPhase::Answering);
        assert_eq!(session.questions().len(), 3);
    }

    #[test]
    fn test_check_requires_selection() {
        let mut session = loaded();
        assert!(!session.can_check());
        assert_eq!(session.check(), None);
        assert_eq!(session.phase(), SessionPhase::Answering);
    }

    #[test]
    fn test_correct_choice_emits_nothing() {
        let mut session = loaded();
        session.select_option_at(0);
        assert_eq!(session.selected_option_index(), Some(0));
        assert_eq!(session.check(), None);
        assert_eq!(session.feedback(), Some(Feedback::Correct));
    }

    #[test]
    fn test_incorrect_check_signals_once() {
        let mut session = loaded();
        session.select_option("Bread");
        assert_eq!(session.check(), Some(SessionSignal::HeartLost));
        assert_eq!(session.check(), None);
        assert_eq!(session.check(), None);
        assert_eq!(session.feedback(), Some(Feedback::Incorrect));
    }

    #[test]
    fn test_selection_frozen_while_checked() {
        let mut session = loaded();
        session.select_option("Bread");
        session.check();
        session.select_option("Coffee");
        assert_eq!(session.selection(), &Selection::Choice("Bread".to_string()));
    }

    #[test]
    fn test_free_text_normalization() {
        let mut session = loaded();
        session.select_option("Coffee");
        session.check();
        session.continue_lesson();

        for c in " I AM HUNGRY ".chars() {
            session.push_char(c);
        }
        assert_eq!(session.check(), None);
        assert_eq!(session.feedback(), Some(Feedback::Correct));
    }

    #[test]
    fn test_pop_char_edits_text() {
        let mut session = loaded();
        session.continue_lesson();
        session.set_text_input("ab");
        session.pop_char();
        assert_eq!(session.selection(), &Selection::Text("a".to_string()));
    }

    #[test]
    fn test_continue_advances_and_resets_selection() {
        let mut session = loaded();
        session.select_option("Coffee");
        session.check();
        assert_eq!(session.continue_lesson(), None);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.phase(), SessionPhase::Answering);
        assert!(session.selection().is_empty());
        assert_eq!(session.continue_lesson(), None);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_progress_reflects_start_of_question() {
        let mut session = loaded();
        assert_eq!(session.progress_percent(), 0.0);
        session.select_option("Coffee");
        session.check();
        session.continue_lesson();
        assert!((session.progress_percent() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_completion_after_last_question() {
        let mut session = loaded();
        let answers = ["Bread", "nope", "drink"];
        let mut hearts_lost = 0;
        let mut completion = None;

        for (index, answer) in answers.iter().enumerate() {
            assert_eq!(session.current_index(), index);
            if session.current_question().unwrap().presents_options() {
                session.select_option(*answer);
            } else {
                session.set_text_input(*answer);
            }
            if session.check() == Some(SessionSignal::HeartLost) {
                hearts_lost += 1;
            }
            completion = session.continue_lesson();
        }

        assert_eq!(hearts_lost, 2);
        assert_eq!(
            completion,
            Some(SessionSignal::Completed {
                xp_award: LESSON_XP_AWARD
            })
        );
        assert_eq!(session.phase(), SessionPhase::Completed);
        assert!(session.current_question().is_none());
        assert_eq!(session.continue_lesson(), None);
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(LessonSession::start(topic()).id(), LessonSession::start(topic()).id());
    }
}
