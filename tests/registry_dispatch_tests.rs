//! Registry and name-based dispatch tests.
//!
//! The registry is process-global and set-once, so the full lifecycle is
//! exercised in a single serialized test.

use std::fs;
use std::sync::Arc;

use calltap::events::EventType;
use calltap::recorder::Recorder;
use calltap::registry;
use calltap::router::CONFIG_FILE;
use calltap::stack::ENTRY_METHOD_NAMES;
use serde_json::{json, Value};
use serial_test::serial;
use tempfile::TempDir;

#[test]
#[serial]
fn test_registry_lifecycle_and_name_dispatch() {
    // Before anything is installed, dispatch degrades to a silent no-op.
    registry::record_by_name("probe", &[], &[], None, Value::Null, None);
    registry::record_event(EventType::Probe);
    assert!(registry::installed().is_none());

    // Keep the sandbox alive for the whole process: the installed recorder
    // outlives this test function.
    let dir = Box::leak(Box::new(TempDir::new().unwrap()));
    fs::write(
        dir.path().join(CONFIG_FILE),
        "packageName=com.registry.app\nsaveType=0\n",
    )
    .unwrap();

    let recorder = Arc::new(Recorder::new("com.registry.app", dir.path()));
    assert!(registry::install(Arc::clone(&recorder)));

    // First install wins; the loser is dropped.
    let other = Arc::new(Recorder::new("com.other.app", dir.path()));
    assert!(!registry::install(other));
    assert_eq!(
        registry::installed().unwrap().package_name(),
        "com.registry.app"
    );

    // Unknown event names never reach the recorder.
    registry::record_by_name(
        "definitely_not_an_event",
        &["string"],
        &[json!("x")],
        None,
        Value::Null,
        None,
    );
    assert!(!dir.path().join("com.registry.app").exists());

    // A known name dispatches the full call shape; unknown tag names
    // collapse to the generic fallback tag rather than failing.
    registry::record_by_name(
        "runtime_exec",
        &["string[]", "java.lang.ProcessBuilder"],
        &[json!(["sh", "-c", "id"]), json!({"redirect": true})],
        Some("string"),
        json!("Process[pid=314]"),
        Some("bridged"),
    );
    registry::record_event(EventType::DebuggerCheck);

    let contents =
        fs::read_to_string(dir.path().join("com.registry.app").join("analysis.txt")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    let event: Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(event["packageName"], json!("com.registry.app"));
    assert_eq!(event["dataType"], json!("runtime_exec"));
    assert_eq!(event["argClassNames"], json!(["string[]", "other"]));
    assert_eq!(
        event["argValues"],
        json!([["sh", "-c", "id"], "{\"redirect\":true}"])
    );
    assert_eq!(event["returnClassName"], json!("string"));
    assert_eq!(event["returnValue"], json!("Process[pid=314]"));
    assert_eq!(event["other"], json!("bridged"));

    // The dispatch frame itself is trimmed along with the entry frames.
    for element in event["elements"].as_array().unwrap() {
        let method = element["methodName"].as_str().unwrap();
        assert!(!ENTRY_METHOD_NAMES.contains(&method));
    }

    let simple: Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(simple["dataType"], json!("debugger_check"));
    assert_eq!(simple["argClassNames"], json!([]));
}

#[test]
#[serial]
fn test_name_dispatch_never_panics_on_garbage() {
    registry::record_by_name("", &[], &[], None, Value::Null, None);
    registry::record_by_name(
        "prefs_put",
        &["", "???", "byte[]"],
        &[Value::Null], // shorter than the tag list on purpose
        Some(""),
        json!({"deep": [1, {"k": null}]}),
        None,
    );
}
