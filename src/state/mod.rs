//! State management.
//!
//! - [`profile`] - hearts, xp, streak and completed lessons
//! - [`session`] - the per-lesson question loop

pub mod profile;
pub mod session;

pub use profile::{HeartLoss, ProfileState, INITIAL_STREAK, MAX_HEARTS};
pub use session::{
    Feedback, LessonSession, Selection, SessionId, SessionPhase, SessionSignal, LESSON_XP_AWARD,
};
