//! Recorder entry points — the only surface instrumented call sites touch.
//!
//! A `Recorder` is constructed once per process and shared. Both entry
//! points are safe to call from any thread; the capture-serialize-emit
//! sequence runs under a single internal lock so persisted lines are never
//! interleaved. No failure inside the recorder ever reaches the caller:
//! every internal error becomes a counted no-op.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::Result;
use crate::events::EventType;
use crate::record::EventRecord;
use crate::router::{SinkDecision, SinkRouter};
use crate::stack::{self, ENTRY_METHOD_NAMES};
use crate::value::{TypeTag, TypedValue};

/// Log target the stream sink emits under.
const STREAM_TARGET: &str = "calltap::events";

/// Shared call recorder for one host application.
pub struct Recorder {
    package_name: String,
    router: SinkRouter,
    emit_lock: Mutex<()>,
    suppressed_errors: AtomicU64,
}

impl Recorder {
    /// A recorder identifying as `package_name`, persisting under
    /// `analysis_root` and reading its configuration from
    /// `<analysis_root>/config.txt`.
    pub fn new(package_name: impl Into<String>, analysis_root: impl Into<PathBuf>) -> Self {
        let package_name = package_name.into();
        Self {
            router: SinkRouter::new(package_name.clone(), analysis_root),
            package_name,
            emit_lock: Mutex::new(()),
            suppressed_errors: AtomicU64::new(0),
        }
    }

    /// Read the gating configuration from a non-default location.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.router = self.router.clone().with_config_path(path);
        self
    }

    /// Application identifier this recorder stamps on every event.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Number of events dropped because of recorder-internal errors.
    /// Diagnostic only; never observable through the entry points.
    pub fn suppressed_errors(&self) -> u64 {
        self.suppressed_errors.load(Ordering::Relaxed)
    }

    /// Record an event carrying no argument or return data.
    #[inline(never)] // keep the entry frame visible to the stack trimmer
    pub fn record_simple(&self, event_type: EventType) {
        self.record(event_type, &[], &[], None, &Value::Null, None);
    }

    /// Record an event with typed arguments and a typed return value.
    ///
    /// `arg_tags` and `arg_values` are zipped; a length mismatch produces a
    /// best-effort partial record truncated to the shorter slice. `note`
    /// lands in the record's free-text `other` field.
    #[inline(never)] // keep the entry frame visible to the stack trimmer
    #[allow(clippy::too_many_arguments)]
    pub fn record_detailed(
        &self,
        event_type: EventType,
        arg_tags: &[TypeTag],
        arg_values: &[Value],
        return_tag: Option<TypeTag>,
        return_value: Value,
        note: Option<&str>,
    ) {
        self.record(event_type, arg_tags, arg_values, return_tag, &return_value, note);
    }

    fn record(
        &self,
        event_type: EventType,
        arg_tags: &[TypeTag],
        arg_values: &[Value],
        return_tag: Option<TypeTag>,
        return_value: &Value,
        note: Option<&str>,
    ) {
        // One logical writer at a time, around the whole sequence: a fresh
        // decision, the capture, and the sink write must not interleave.
        let _guard = self
            .emit_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let decision = self.router.decide();
        if decision == SinkDecision::Suppress {
            return;
        }
        if let Err(err) = self.emit(decision, event_type, arg_tags, arg_values, return_tag, return_value, note)
        {
            self.suppressed_errors.fetch_add(1, Ordering::Relaxed);
            debug!(target: "calltap", error = %err, event = %event_type, "event dropped");
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn emit(
        &self,
        decision: SinkDecision,
        event_type: EventType,
        arg_tags: &[TypeTag],
        arg_values: &[Value],
        return_tag: Option<TypeTag>,
        return_value: &Value,
        note: Option<&str>,
    ) -> Result<()> {
        let frames = stack::trim_frames(stack::capture_frames(), ENTRY_METHOD_NAMES);
        let arguments: Vec<TypedValue> = arg_tags
            .iter()
            .zip(arg_values.iter())
            .map(|(tag, value)| TypedValue::new(*tag, value.clone()))
            .collect();
        let record = EventRecord::new(
            self.package_name.clone(),
            frames,
            event_type,
            &arguments,
            return_tag,
            return_value,
            note.map(str::to_owned),
        );
        let line = record.to_json()?;
        match decision {
            SinkDecision::Stream => info!(target: STREAM_TARGET, "{}", line),
            SinkDecision::Persist(path) => append_line(&path, &line)?,
            SinkDecision::Suppress => {}
        }
        Ok(())
    }
}

/// Append one newline-terminated UTF-8 line, opening and closing the file
/// per event. No handle is held across calls.
fn append_line(path: &Path, line: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}
