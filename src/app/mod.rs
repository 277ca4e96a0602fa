//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`Dialog`] - Blocking modal dialogs
//! - [`AppMessage`] - Messages from background tasks
//! - [`ScheduledTask`] - Cancellable timers owned by the app or a lesson

mod actions;
mod handlers;
mod messages;
mod navigation;
mod timers;
mod types;

pub use messages::AppMessage;
pub use timers::ScheduledTask;
pub use types::{Dialog, Screen};

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::provider::ContentProvider;
use crate::state::{LessonSession, ProfileState};
use crate::traits::SpeechSynthesizer;

/// The lesson on screen plus the timers that belong to it.
///
/// Dropping an `ActiveLesson` aborts its provider call and any pending
/// forced-end or completion timer.
#[derive(Debug)]
pub struct ActiveLesson {
    pub session: LessonSession,
    load_task: Option<ScheduledTask>,
    forced_end: Option<ScheduledTask>,
    completion: Option<ScheduledTask>,
}

impl ActiveLesson {
    fn new(session: LessonSession) -> Self {
        Self {
            session,
            load_task: None,
            forced_end: None,
            completion: None,
        }
    }

    pub fn forced_end_pending(&self) -> bool {
        self.forced_end.is_some()
    }

    pub fn completion_pending(&self) -> bool {
        self.completion.is_some()
    }
}

/// Main application state
pub struct App {
    pub config: AppConfig,
    /// Current screen being displayed
    pub screen: Screen,
    /// Modal dialog, if one is open
    pub dialog: Option<Dialog>,
    /// Highlighted row in the topic list
    pub dashboard_index: usize,
    profile: ProfileState,
    lesson: Option<ActiveLesson>,
    provider: Arc<dyn ContentProvider>,
    speech: Arc<dyn SpeechSynthesizer>,
    heart_recovery: Option<ScheduledTask>,
    /// Receiver for async messages, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set on state mutations, cleared after each draw.
    pub needs_redraw: bool,
    /// Tick counter for animations
    pub tick_count: u64,
}

impl App {
    pub fn new(
        config: AppConfig,
        provider: Arc<dyn ContentProvider>,
        speech: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            config,
            screen: Screen::default(),
            dialog: None,
            dashboard_index: 0,
            profile: ProfileState::new(),
            lesson: None,
            provider,
            speech,
            heart_recovery: None,
            message_rx: Some(message_rx),
            message_tx,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
        }
    }

    /// Replace the starting profile. Intended for setup before the first event.
    pub fn with_profile(mut self, profile: ProfileState) -> Self {
        self.profile = profile;
        self
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn lesson(&self) -> Option<&ActiveLesson> {
        self.lesson.as_ref()
    }

    pub fn session(&self) -> Option<&LessonSession> {
        self.lesson.as_ref().map(|lesson| &lesson.session)
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Start the process-wide heart recovery timer. Must run inside a tokio runtime.
    pub fn start_background_tasks(&mut self) {
        if self.heart_recovery.is_some() {
            return;
        }
        tracing::debug!(
            interval_secs = self.config.heart_recovery_interval.as_secs(),
            "starting heart recovery timer"
        );
        self.heart_recovery = Some(ScheduledTask::every(
            self.config.heart_recovery_interval,
            self.message_tx.clone(),
            || AppMessage::HeartRecoveryTick,
        ));
    }

    /// Handle every message already queued, without waiting.
    ///
    /// Returns the number of messages handled. Does nothing once the event
    /// loop has taken the receiver.
    pub fn process_pending_messages(&mut self) -> usize {
        let mut drained = Vec::new();
        if let Some(rx) = self.message_rx.as_mut() {
            while let Ok(message) = rx.try_recv() {
                drained.push(message);
            }
        }
        let count = drained.len();
        for message in drained {
            self.handle_message(message);
        }
        count
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations. Only the loading spinner needs periodic redraws.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        let loading = self
            .session()
            .is_some_and(|session| session.phase() == crate::state::SessionPhase::Loading);
        if loading && self.tick_count % 6 == 0 {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        tracing::info!(
            xp = self.profile.xp(),
            completed = self.profile.completed_lessons().len(),
            "quitting"
        );
        self.lesson = None;
        self.heart_recovery = None;
        self.should_quit = true;
    }
}
