//! AppMessage enum for async communication within the application.

use crate::models::Question;
use crate::state::SessionId;

/// Messages delivered to the event loop by background tasks.
///
/// Lesson-scoped messages carry the id of the session that scheduled them;
/// the app drops any whose session is no longer active.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The content provider answered.
    LessonLoaded {
        session_id: SessionId,
        questions: Vec<Question>,
    },
    /// Passive heart recovery interval elapsed.
    HeartRecoveryTick,
    /// The out-of-hearts grace period elapsed.
    ForcedEndElapsed { session_id: SessionId },
    /// The completion banner has been shown long enough.
    CompletionElapsed { session_id: SessionId },
}
