//! The immutable per-call event record and its wire serialization.
//!
//! A record is built synchronously inside an entry point, serialized exactly
//! once to a single JSON line, and discarded. Argument and return values are
//! normalized at construction, so a constructed record is already wire-ready.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::events::EventType;
use crate::stack::CallFrame;
use crate::value::{normalize, TypeTag, TypedValue};

/// One captured call, in the exact shape of the persisted JSON line.
#[derive(Debug, Serialize)]
pub struct EventRecord {
    #[serde(rename = "packageName")]
    package_name: String,
    #[serde(rename = "dataType")]
    data_type: EventType,
    elements: Vec<CallFrame>,
    #[serde(rename = "argClassNames")]
    arg_class_names: Vec<&'static str>,
    #[serde(rename = "argValues")]
    arg_values: Vec<Value>,
    #[serde(rename = "returnClassName")]
    return_class_name: Option<&'static str>,
    #[serde(rename = "returnValue")]
    return_value: Value,
    other: Option<String>,
}

impl EventRecord {
    /// Build a record from already-trimmed frames and typed call data.
    ///
    /// A return value supplied without a declared tag is normalized under
    /// the generic fallback rule while `returnClassName` stays null.
    pub fn new(
        package_name: String,
        frames: Vec<CallFrame>,
        event_type: EventType,
        arguments: &[TypedValue],
        return_tag: Option<TypeTag>,
        return_value: &Value,
        note: Option<String>,
    ) -> Self {
        let arg_class_names = arguments.iter().map(|a| a.tag.as_str()).collect();
        let arg_values = arguments
            .iter()
            .map(|a| normalize(a.tag, &a.value))
            .collect();
        Self {
            package_name,
            data_type: event_type,
            elements: frames,
            arg_class_names,
            arg_values,
            return_class_name: return_tag.map(|t| t.as_str()),
            return_value: normalize(return_tag.unwrap_or(TypeTag::Other), return_value),
            other: note,
        }
    }

    /// Serialize to one JSON object, no trailing newline.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    #[cfg(test)]
    pub(crate) fn arg_len(&self) -> (usize, usize) {
        (self.arg_class_names.len(), self.arg_values.len())
    }
}
