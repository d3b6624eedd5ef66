//! Call-stack capture and trimming for call-site provenance.
//!
//! Every emitted event carries the stack that was live when the instrumented
//! call invoked the recorder. The recorder's own entry frames (and anything
//! inside them) are cut away so the first recorded frame is the real caller.

use backtrace::Backtrace;
use serde::Serialize;

/// Maximum stack depth to capture (prevent runaway walks).
const MAX_STACK_DEPTH: usize = 64;

/// Method names of the recorder's public entry points. Frames at or inside
/// the last occurrence of any of these are discarded by [`trim_frames`].
pub const ENTRY_METHOD_NAMES: &[&str] = &["record_simple", "record_detailed", "record_by_name"];

/// One resolved stack frame.
#[derive(Debug, Clone, Serialize)]
pub struct CallFrame {
    /// Plain method name (final path segment of the symbol).
    #[serde(rename = "methodName")]
    pub method_name: String,
    /// Declaring path of the method (everything before the final segment).
    #[serde(rename = "className")]
    pub type_name: String,
    /// Source file, when debug info resolves it.
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    /// Source line, 0 when unknown.
    #[serde(rename = "lineNumber")]
    pub line_number: u32,
}

/// Capture and resolve the current thread's stack, innermost frame first.
pub fn capture_frames() -> Vec<CallFrame> {
    let bt = Backtrace::new();
    let mut frames = Vec::with_capacity(16);
    for frame in bt.frames() {
        for symbol in frame.symbols() {
            let name = match symbol.name() {
                Some(name) => name.to_string(),
                None => continue,
            };
            let (type_name, method_name) = split_symbol(&name);
            frames.push(CallFrame {
                method_name,
                type_name,
                file_name: symbol.filename().map(|p| p.display().to_string()),
                line_number: symbol.lineno().unwrap_or(0),
            });
            if frames.len() >= MAX_STACK_DEPTH {
                return frames;
            }
        }
    }
    frames
}

/// Drop every frame at or inside the *last* occurrence of an entry-point
/// name. Frames are ordered innermost-first, so the last match is the entry
/// invocation closest to the real caller; picking it also swallows any
/// re-entrant recorder frames in between. A stack with no match is returned
/// untrimmed.
pub fn trim_frames(mut frames: Vec<CallFrame>, entry_names: &[&str]) -> Vec<CallFrame> {
    let mut cut = None;
    for (i, frame) in frames.iter().enumerate() {
        if entry_names.iter().any(|n| frame.method_name == *n) {
            cut = Some(i + 1);
        }
    }
    match cut {
        Some(idx) => frames.split_off(idx),
        None => frames,
    }
}

/// Split a demangled symbol into (declaring path, method name), stripping
/// the trailing `::h<hash>` segment rustc appends to monomorphized symbols.
fn split_symbol(symbol: &str) -> (String, String) {
    let trimmed = strip_hash_suffix(symbol);
    match trimmed.rfind("::") {
        Some(pos) => (trimmed[..pos].to_string(), trimmed[pos + 2..].to_string()),
        None => (String::new(), trimmed.to_string()),
    }
}

fn strip_hash_suffix(symbol: &str) -> &str {
    if let Some(pos) = symbol.rfind("::") {
        let tail = &symbol[pos + 2..];
        let is_hash = tail.len() == 17
            && tail.starts_with('h')
            && tail[1..].chars().all(|c| c.is_ascii_hexdigit());
        if is_hash {
            return &symbol[..pos];
        }
    }
    symbol
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(method: &str) -> CallFrame {
        CallFrame {
            method_name: method.to_string(),
            type_name: "app::module".to_string(),
            file_name: None,
            line_number: 0,
        }
    }

    fn names(frames: &[CallFrame]) -> Vec<&str> {
        frames.iter().map(|f| f.method_name.as_str()).collect()
    }

    #[test]
    fn test_trim_cuts_after_entry_frame() {
        let frames = vec![
            frame("capture_frames"),
            frame("emit"),
            frame("record_detailed"),
            frame("put_string"),
            frame("main"),
        ];
        let trimmed = trim_frames(frames, ENTRY_METHOD_NAMES);
        assert_eq!(names(&trimmed), vec!["put_string", "main"]);
    }

    #[test]
    fn test_trim_picks_last_occurrence_on_reentry() {
        let frames = vec![
            frame("capture_frames"),
            frame("record_detailed"),
            frame("helper"),
            frame("record_by_name"),
            frame("real_caller"),
            frame("main"),
        ];
        let trimmed = trim_frames(frames, ENTRY_METHOD_NAMES);
        assert_eq!(names(&trimmed), vec!["real_caller", "main"]);
    }

    #[test]
    fn test_trim_without_match_returns_full_stack() {
        let frames = vec![frame("a"), frame("b")];
        let trimmed = trim_frames(frames, ENTRY_METHOD_NAMES);
        assert_eq!(names(&trimmed), vec!["a", "b"]);
    }

    #[test]
    fn test_trim_entry_as_innermost_frame_yields_empty() {
        let frames = vec![frame("record_simple")];
        assert!(trim_frames(frames, ENTRY_METHOD_NAMES).is_empty());
    }

    #[test]
    fn test_split_symbol() {
        let (ty, method) = split_symbol("app::storage::Prefs::put_string");
        assert_eq!(ty, "app::storage::Prefs");
        assert_eq!(method, "put_string");

        let (ty, method) = split_symbol("main");
        assert_eq!(ty, "");
        assert_eq!(method, "main");
    }

    #[test]
    fn test_split_symbol_strips_monomorphization_hash() {
        let (ty, method) = split_symbol("app::hooks::observe::h0123456789abcdef");
        assert_eq!(ty, "app::hooks");
        assert_eq!(method, "observe");
        // A final segment that merely looks hash-like but is short stays.
        let (_, method) = split_symbol("app::hooks::h1");
        assert_eq!(method, "h1");
    }

    #[test]
    fn test_capture_resolves_frames() {
        let frames = capture_frames();
        assert!(!frames.is_empty());
        assert!(frames.len() <= MAX_STACK_DEPTH);
        assert!(frames.iter().all(|f| !f.method_name.is_empty()));
    }
}
