//! Reusable UI Components
//!
//! - `DialogFrame` - Centered dialog overlay with rounded borders
//! - `StatusIndicator` - Spinner, success, and error indicators

mod dialog_frame;
mod status_indicator;

pub use dialog_frame::{calculate_total_dialog_height, render_dialog_frame, DialogFrameConfig};
pub use status_indicator::{
    calculate_status_height, get_spinner_char, render_status_indicator, StatusIndicatorType,
};
