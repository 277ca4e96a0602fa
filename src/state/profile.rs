//! Learner profile: hearts, experience, streak and completed lessons.
//!
//! The profile is an immutable value. Each rule consumes the current value
//! and produces the next one; the app swaps the whole value in one
//! assignment. Heart loss, heart recovery and completion recording are the
//! only operations that produce a changed profile.

pub const MAX_HEARTS: u8 = 5;
pub const INITIAL_STREAK: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileState {
    hearts: u8,
    xp: u32,
    streak: u32,
    completed_lessons: Vec<String>,
}

/// Result of applying a heart loss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartLoss {
    pub profile: ProfileState,
    /// True only when this loss took hearts from above zero to zero.
    pub depleted: bool,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileState {
    /// Fresh profile: full hearts, no xp, streak of one.
    pub fn new() -> Self {
        Self {
            hearts: MAX_HEARTS,
            xp: 0,
            streak: INITIAL_STREAK,
            completed_lessons: Vec::new(),
        }
    }

    /// Fresh profile starting at `hearts`, clamped to `MAX_HEARTS`.
    pub fn starting_with_hearts(hearts: u8) -> Self {
        Self {
            hearts: hearts.min(MAX_HEARTS),
            ..Self::new()
        }
    }

    pub fn hearts(&self) -> u8 {
        self.hearts
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn completed_lessons(&self) -> &[String] {
        &self.completed_lessons
    }

    pub fn has_completed(&self, topic_id: &str) -> bool {
        self.completed_lessons.iter().any(|id| id == topic_id)
    }

    /// Topic gate: a lesson may start only with at least one heart.
    pub fn can_start_lesson(&self) -> bool {
        self.hearts > 0
    }

    pub fn is_full(&self) -> bool {
        self.hearts >= MAX_HEARTS
    }

    /// Lose one heart, floored at zero.
    pub fn with_heart_lost(&self) -> HeartLoss {
        let hearts = self.hearts.saturating_sub(1);
        HeartLoss {
            depleted: self.hearts > 0 && hearts == 0,
            profile: Self {
                hearts,
                ..self.clone()
            },
        }
    }

    /// Regain one heart unless already full.
    pub fn with_heart_recovered(&self) -> Self {
        Self {
            hearts: (self.hearts + 1).min(MAX_HEARTS),
            ..self.clone()
        }
    }

    /// Record a finished lesson. Repeated topics are appended again.
    pub fn with_completion(&self, topic_id: &str, xp_award: u32) -> Self {
        let mut completed_lessons = self.completed_lessons.clone();
        completed_lessons.push(topic_id.to_string());
        Self {
            xp: self.xp.saturating_add(xp_award),
            completed_lessons,
            ..self.clone()
        }
    }
}
