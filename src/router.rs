//! Sink selection driven by an external, hand-editable configuration file.
//!
//! The configuration is read fresh on every decision so a live edit takes
//! effect on the next event without restarting the host process. Torn reads
//! are tolerated; at worst one event takes a wrong decision.
//!
//! Format (plain text, line-oriented, unknown lines ignored):
//!
//! ```text
//! packageName=com.example.app
//! saveType=0
//! ```

use std::fs;
use std::path::PathBuf;

/// Recognized configuration keys.
const PACKAGE_NAME_KEY: &str = "packageName=";
const SAVE_TYPE_KEY: &str = "saveType=";

/// Configuration file name under the analysis root.
pub const CONFIG_FILE: &str = "config.txt";

/// Per-application event log file name.
pub const EVENT_LOG_FILE: &str = "analysis.txt";

/// Where to send one event. Derived fresh per emission, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkDecision {
    /// Drop the event without capturing anything.
    Suppress,
    /// Emit to the process log stream.
    Stream,
    /// Append to the per-application event log at this path.
    Persist(PathBuf),
}

/// Decides, per event, whether and where to emit.
#[derive(Debug, Clone)]
pub struct SinkRouter {
    package_name: String,
    config_path: PathBuf,
    analysis_root: PathBuf,
}

impl SinkRouter {
    /// A router for `package_name` rooted at `analysis_root`. The
    /// configuration is expected at `<analysis_root>/config.txt` unless
    /// overridden with [`SinkRouter::with_config_path`].
    pub fn new(package_name: impl Into<String>, analysis_root: impl Into<PathBuf>) -> Self {
        let analysis_root = analysis_root.into();
        Self {
            package_name: package_name.into(),
            config_path: analysis_root.join(CONFIG_FILE),
            analysis_root,
        }
    }

    /// Read the configuration from a non-default location.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    /// Re-read the configuration and derive a fresh decision.
    ///
    /// Missing or unreadable configuration, an empty package name, or a
    /// `packageName=` line naming some other application all suppress. A
    /// non-matching identifier wins over any `saveType=` line. Otherwise the
    /// last `saveType=` line decides: `1` streams, `0` persists, anything
    /// else suppresses.
    pub fn decide(&self) -> SinkDecision {
        if self.package_name.is_empty() {
            return SinkDecision::Suppress;
        }
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(_) => return SinkDecision::Suppress,
        };
        let mut mode: Option<i32> = None;
        for line in contents.lines() {
            if let Some(rest) = line.strip_prefix(PACKAGE_NAME_KEY) {
                if rest.trim() != self.package_name {
                    return SinkDecision::Suppress;
                }
            } else if let Some(rest) = line.strip_prefix(SAVE_TYPE_KEY) {
                mode = rest.trim().parse().ok();
            }
        }
        match mode {
            Some(1) => SinkDecision::Stream,
            Some(0) => SinkDecision::Persist(self.event_log_path()),
            _ => SinkDecision::Suppress,
        }
    }

    /// `<analysis_root>/<package_name>/analysis.txt`
    pub fn event_log_path(&self) -> PathBuf {
        self.analysis_root
            .join(&self.package_name)
            .join(EVENT_LOG_FILE)
    }
}
