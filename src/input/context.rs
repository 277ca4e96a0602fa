//! Input context for determining which commands are available.
//!
//! The [`InputContext`] captures the application state relevant to input
//! handling, so the registry can map keys without touching the [`App`].
//!
//! [`App`]: crate::app::App

use crate::app::{Dialog, Screen};
use crate::state::SessionPhase;

/// The kind of modal dialog currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    #[default]
    None,
    /// A yes/no question
    Confirmation,
    /// An informational notice dismissed by any key
    Notice,
}

impl From<Option<Dialog>> for ModalType {
    fn from(dialog: Option<Dialog>) -> Self {
        match dialog {
            None => ModalType::None,
            Some(dialog) if dialog.is_confirmation() => ModalType::Confirmation,
            Some(_) => ModalType::Notice,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub screen: Screen,
    pub modal: ModalType,
    /// Phase of the active lesson, if any
    pub phase: Option<SessionPhase>,
    /// The current question takes typed answers instead of options
    pub text_entry: bool,
    /// Number of options the current question presents
    pub option_count: usize,
}

impl InputContext {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            ..Self::default()
        }
    }

    pub fn with_modal(mut self, modal: ModalType) -> Self {
        self.modal = modal;
        self
    }

    pub fn with_phase(mut self, phase: SessionPhase) -> Self {
        self.phase = Some(phase);
        self
    }

    pub fn with_text_entry(mut self) -> Self {
        self.text_entry = true;
        self.option_count = 0;
        self
    }

    pub fn with_options(mut self, count: usize) -> Self {
        self.text_entry = false;
        self.option_count = count;
        self
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }

    pub fn is_answering(&self) -> bool {
        self.phase == Some(SessionPhase::Answering)
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.phase, Some(SessionPhase::Checked(_)))
    }
}
