//! Scripted content provider for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::models::Question;
use crate::provider::{ContentProvider, LessonRequest};

/// Returns a fixed lesson, or never returns at all when built with [`hanging`].
///
/// [`hanging`]: MockContentProvider::hanging
#[derive(Debug, Clone, Default)]
pub struct MockContentProvider {
    lesson: Arc<Mutex<Vec<Question>>>,
    hang: bool,
    requests: Arc<Mutex<Vec<LessonRequest>>>,
}

impl MockContentProvider {
    pub fn with_lesson(lesson: Vec<Question>) -> Self {
        Self {
            lesson: Arc::new(Mutex::new(lesson)),
            ..Self::default()
        }
    }

    /// A provider whose calls stay pending forever.
    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::default()
        }
    }

    pub fn set_lesson(&self, lesson: Vec<Question>) {
        if let Ok(mut current) = self.lesson.lock() {
            *current = lesson;
        }
    }

    pub fn requests(&self) -> Vec<LessonRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ContentProvider for MockContentProvider {
    async fn generate_lesson(&self, request: &LessonRequest) -> Vec<Question> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        if self.hang {
            std::future::pending::<()>().await;
        }
        self.lesson
            .lock()
            .map(|lesson| lesson.clone())
            .unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
