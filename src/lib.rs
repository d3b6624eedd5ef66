//! Calltap - in-process API call recorder with stack provenance
//!
//! This library provides the shared recorder that instrumented API entry
//! points invoke: it captures the live call stack, normalizes typed
//! argument/return data into a JSON line, and emits one event per call to a
//! stream or per-application file sink, gated by an external configuration.
//! The recorder is invisible to its callers by contract: misconfiguration
//! and internal failures degrade to silent no-ops.

pub mod error;
pub mod events;
pub mod record;
pub mod recorder;
pub mod registry;
pub mod router;
pub mod stack;
pub mod value;
