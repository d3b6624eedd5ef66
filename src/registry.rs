//! Process-wide recorder registry and the name-based dispatch variant.
//!
//! Instrumented code in layers that cannot depend on this crate's types at
//! build time reaches the recorder through a registry installed once at
//! startup, addressing events by wire name. A missing recorder or an
//! unknown name degrades to a silent no-op, identical to the entry points'
//! own error policy.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde_json::Value;

use crate::events::EventType;
use crate::recorder::Recorder;
use crate::value::TypeTag;

static RECORDER: OnceCell<Arc<Recorder>> = OnceCell::new();

/// Install the process-wide recorder. The first install wins; subsequent
/// calls leave the original in place and return `false`.
pub fn install(recorder: Arc<Recorder>) -> bool {
    RECORDER.set(recorder).is_ok()
}

/// The installed recorder, if any.
pub fn installed() -> Option<Arc<Recorder>> {
    RECORDER.get().cloned()
}

/// Zero-data dispatch through the registry.
pub fn record_event(event_type: EventType) {
    if let Some(recorder) = installed() {
        recorder.record_simple(event_type);
    }
}

/// Full dispatch for call sites that only hold string names.
///
/// The event type resolves through [`EventType::from_name`]; tag names
/// resolve through [`TypeTag::from_name`] (unknown tags collapse to
/// `other`). An unknown event name or an empty registry is a no-op.
#[inline(never)] // keep the entry frame visible to the stack trimmer
pub fn record_by_name(
    event_type_name: &str,
    arg_tag_names: &[&str],
    arg_values: &[Value],
    return_tag_name: Option<&str>,
    return_value: Value,
    note: Option<&str>,
) {
    let recorder = match installed() {
        Some(recorder) => recorder,
        None => return,
    };
    let event_type = match EventType::from_name(event_type_name) {
        Some(event_type) => event_type,
        None => return,
    };
    let tags: Vec<TypeTag> = arg_tag_names
        .iter()
        .map(|name| TypeTag::from_name(name))
        .collect();
    recorder.record_detailed(
        event_type,
        &tags,
        arg_values,
        return_tag_name.map(TypeTag::from_name),
        return_value,
        note,
    );
}
