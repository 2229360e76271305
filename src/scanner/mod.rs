//! Signal collectors that feed the analysis core.
//!
//! Each collector inspects one corner of the local environment - session
//! logs, editor settings, workspace files, installed extensions - and
//! produces a result carrying a hint map. The core only ever sees these
//! already-materialized results; all I/O happens here.

mod extensions;
mod logs;
mod settings;
mod workspace;

use std::collections::HashMap;
use thiserror::Error;

pub use extensions::{scan_extensions, scan_installed_extensions, ExtensionInfo, ExtensionsResult};
pub use logs::{
    analyze_logs, default_log_dir, detect_hints_in_text, parse_log_file, scan_editor_logs,
    scan_logs, LogEntry, LogSummary, KNOWN_HINTS,
};
pub use settings::{default_settings_path, scan_settings, SettingsResult};
pub use workspace::{scan_workspace, WorkspaceResult};

/// Map from lowercase hint key to presence.
///
/// By construction only `true` values are ever materialized when maps from
/// several collectors are merged.
pub type HintMap = HashMap<String, bool>;

/// Errors from collector discovery.
///
/// Collectors degrade to empty results for missing files and unreadable
/// entries; these errors only surface when the environment itself cannot be
/// located.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("could not determine the user home directory")]
    NoHomeDir,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
