//! Structured logging to a file.
//!
//! The TUI owns stdout and stderr, so log lines go to
//! `<data dir>/lingodeck/lingodeck.log`. The filter comes from
//! `LINGODECK_LOG` (same syntax as `RUST_LOG`) and defaults to `info`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{DrillError, DrillResult};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "LINGODECK_LOG";

const DEFAULT_FILTER: &str = "info";

/// Default log location, if the platform has a data directory.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("lingodeck").join("lingodeck.log"))
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> DrillResult<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| DrillError::system("create log directory", e))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| DrillError::system("open log file", e))
}

/// Install the global subscriber writing to `path`.
///
/// Only the first successful call installs a subscriber; later calls still
/// open the file so the caller learns about permission problems.
pub fn init_logging(path: &Path) -> DrillResult<()> {
    static INIT: Once = Once::new();

    let file = open_log_file(path)?;
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let fmt_layer = fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(Mutex::new(file));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init();
    });
    Ok(())
}
