//! Common test utilities for integration tests.
//!
//! Fixtures for lessons, a builder for apps wired to mock adapters, and
//! helpers that answer the current question the way a learner would.
//!
//! ```ignore
//! let mut harness = TestAppBuilder::new().with_hearts(1).build();
//! harness.app.start_topic(1);
//! settle(&mut harness.app).await;
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use lingodeck::app::App;
use lingodeck::config::AppConfig;
use lingodeck::models::Question;
use lingodeck::state::ProfileState;

/// Index of "Food" in the topic catalog.
pub const FOOD_INDEX: usize = 1;

/// Five questions covering every kind.
pub fn sample_lesson() -> Vec<Question> {
    vec![
        Question::multiple_choice(
            "q-1",
            "Which one is a drink?",
            vec![
                "خبز".to_string(),
                "قهوة".to_string(),
                "أرز".to_string(),
                "تفاحة".to_string(),
            ],
            "قهوة",
        )
        .with_explanation("Coffee تعني قهوة."),
        Question::translate_backwards("q-2", "أنا جائع", "I'm hungry")
            .with_acceptable_answers(["i am hungry"]),
        Question::fill_in_blank(
            "q-3",
            "I would like a ___ of water.",
            vec!["glass".to_string(), "plate".to_string(), "fork".to_string()],
            "glass",
        ),
        Question::translate_forwards("q-4", "Bread", "خبز"),
        Question::multiple_choice(
            "q-5",
            "What do you say before eating?",
            vec!["Bon appétit".to_string(), "Good night".to_string()],
            "Bon appétit",
        ),
    ]
}

/// The app plus handles on the mocks it was built with.
pub struct TestHarness {
    pub app: App,
    pub provider: MockContentProvider,
    pub speech: Arc<RecordingSpeech>,
}

/// Builder for creating test App instances with various configurations.
pub struct TestAppBuilder {
    lesson: Vec<Question>,
    hearts: Option<u8>,
    hanging: bool,
    config: AppConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            lesson: sample_lesson(),
            hearts: None,
            hanging: false,
            config: AppConfig::default(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lesson(mut self, lesson: Vec<Question>) -> Self {
        self.lesson = lesson;
        self
    }

    pub fn with_hearts(mut self, hearts: u8) -> Self {
        self.hearts = Some(hearts);
        self
    }

    /// Provider calls never return.
    pub fn hanging(mut self) -> Self {
        self.hanging = true;
        self
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> TestHarness {
        let provider = if self.hanging {
            MockContentProvider::hanging()
        } else {
            MockContentProvider::with_lesson(self.lesson)
        };
        let speech = Arc::new(RecordingSpeech::new());
        let mut app = App::new(self.config, Arc::new(provider.clone()), speech.clone());
        if let Some(hearts) = self.hearts {
            app = app.with_profile(ProfileState::starting_with_hearts(hearts));
        }
        TestHarness {
            app,
            provider,
            speech,
        }
    }
}

/// Let spawned tasks run, then handle whatever they sent.
pub async fn settle(app: &mut App) {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
    app.process_pending_messages();
}

/// Advance (paused) time by `millis`, then handle what arrived.
pub async fn advance(app: &mut App, millis: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(millis)).await;
    settle(app).await;
}

/// Start the Food lesson and wait for its questions.
pub async fn start_food_lesson(app: &mut App) {
    app.start_topic(FOOD_INDEX);
    settle(app).await;
}

/// Enter the right answer for the current question and check it.
pub fn answer_correctly(app: &mut App) {
    let question = current_question(app);
    if question.presents_options() {
        let index = question
            .options()
            .iter()
            .position(|option| *option == question.correct_answer)
            .expect("correct answer among options");
        app.choose_option(index);
    } else {
        for c in question.correct_answer.chars() {
            app.insert_char(c);
        }
    }
    app.check_answer();
}

/// Enter a wrong answer for the current question and check it.
pub fn answer_wrong(app: &mut App) {
    let question = current_question(app);
    if question.presents_options() {
        let index = question
            .options()
            .iter()
            .position(|option| *option != question.correct_answer)
            .expect("a wrong option");
        app.choose_option(index);
    } else {
        for c in "definitely wrong".chars() {
            app.insert_char(c);
        }
    }
    app.check_answer();
}

pub fn current_question(app: &App) -> Question {
    app.session()
        .and_then(|session| session.current_question())
        .cloned()
        .expect("a question on screen")
}
