//! Normalization of loosely-typed call data into JSON-compatible values.
//!
//! Instrumented call sites hand the recorder a declared-type tag plus a
//! runtime value for every argument and return. [`normalize`] flattens that
//! pair into the wire representation: scalars pass through, arrays stay
//! ordered, paths reduce to their string form, and anything unrecognized
//! falls back to its textual form. The function is total and idempotent on
//! its own output.

use serde_json::Value;

/// Sentinel value that bypasses every type-specific rule. Probe events use
/// it to verify the pipeline end to end without caring about declared types.
const PROBE_SENTINEL: &str = "pass";

/// Declared-type tag attached to each argument and return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Int,
    Short,
    Long,
    Double,
    Float,
    Bool,
    Byte,
    Str,
    StrArray,
    ByteArray,
    Path,
    Other,
}

impl TypeTag {
    /// Stable wire name, emitted in the `argClassNames` / `returnClassName`
    /// fields of the event schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Int => "int",
            TypeTag::Short => "short",
            TypeTag::Long => "long",
            TypeTag::Double => "double",
            TypeTag::Float => "float",
            TypeTag::Bool => "boolean",
            TypeTag::Byte => "byte",
            TypeTag::Str => "string",
            TypeTag::StrArray => "string[]",
            TypeTag::ByteArray => "byte[]",
            TypeTag::Path => "path",
            TypeTag::Other => "other",
        }
    }

    /// Resolve a wire name to a tag. Unknown names collapse to
    /// [`TypeTag::Other`], so name-based dispatch never fails on a tag.
    pub fn from_name(name: &str) -> TypeTag {
        match name {
            "int" => TypeTag::Int,
            "short" => TypeTag::Short,
            "long" => TypeTag::Long,
            "double" => TypeTag::Double,
            "float" => TypeTag::Float,
            "boolean" => TypeTag::Bool,
            "byte" => TypeTag::Byte,
            "string" => TypeTag::Str,
            "string[]" => TypeTag::StrArray,
            "byte[]" => TypeTag::ByteArray,
            "path" => TypeTag::Path,
            _ => TypeTag::Other,
        }
    }
}

/// A declared-type tag paired with its runtime value.
#[derive(Debug, Clone)]
pub struct TypedValue {
    pub tag: TypeTag,
    pub value: Value,
}

impl TypedValue {
    pub fn new(tag: TypeTag, value: Value) -> Self {
        Self { tag, value }
    }

    /// Convenience constructor for string arguments.
    pub fn string(s: impl Into<String>) -> Self {
        Self::new(TypeTag::Str, Value::String(s.into()))
    }

    /// Convenience constructor for integer arguments.
    pub fn int(v: i64) -> Self {
        Self::new(TypeTag::Int, Value::from(v))
    }

    /// Convenience constructor for boolean arguments.
    pub fn boolean(v: bool) -> Self {
        Self::new(TypeTag::Bool, Value::Bool(v))
    }

    /// Convenience constructor for byte-array arguments; bytes are carried
    /// as small integers, preserving order.
    pub fn bytes(v: &[u8]) -> Self {
        Self::new(
            TypeTag::ByteArray,
            Value::Array(v.iter().map(|b| Value::from(*b)).collect()),
        )
    }

    /// Convenience constructor for string-array arguments.
    pub fn strings<S: AsRef<str>>(v: &[S]) -> Self {
        Self::new(
            TypeTag::StrArray,
            Value::Array(
                v.iter()
                    .map(|s| Value::String(s.as_ref().to_owned()))
                    .collect(),
            ),
        )
    }

    /// Convenience constructor for path-like arguments.
    pub fn path(p: impl Into<String>) -> Self {
        Self::new(TypeTag::Path, Value::String(p.into()))
    }
}

/// Flatten a (declared tag, runtime value) pair into its wire form.
///
/// Rules, in order:
/// - the literal string `"pass"` passes through unchanged for every tag;
/// - scalar tags and `string` pass the value through as supplied;
/// - array tags pass arrays through element-for-element and turn a null
///   array into an empty one;
/// - `path` keeps null as null and a string as itself;
/// - everything else keeps null as null, a string as itself, and renders
///   any other value as its compact JSON text.
pub fn normalize(tag: TypeTag, value: &Value) -> Value {
    if value.as_str() == Some(PROBE_SENTINEL) {
        return value.clone();
    }
    match tag {
        TypeTag::Int
        | TypeTag::Short
        | TypeTag::Long
        | TypeTag::Double
        | TypeTag::Float
        | TypeTag::Bool
        | TypeTag::Byte
        | TypeTag::Str => value.clone(),
        TypeTag::StrArray | TypeTag::ByteArray => match value {
            Value::Array(_) => value.clone(),
            Value::Null => Value::Array(Vec::new()),
            other => textual(other),
        },
        TypeTag::Path => match value {
            Value::Null | Value::String(_) => value.clone(),
            other => textual(other),
        },
        TypeTag::Other => textual(value),
    }
}

/// Generic fallback: null stays null, a string stays itself, anything else
/// becomes its compact JSON text.
fn textual(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::String(_) => value.clone(),
        other => Value::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars_pass_through() {
        assert_eq!(normalize(TypeTag::Int, &json!(42)), json!(42));
        assert_eq!(normalize(TypeTag::Long, &json!(-7)), json!(-7));
        assert_eq!(normalize(TypeTag::Double, &json!(1.5)), json!(1.5));
        assert_eq!(normalize(TypeTag::Bool, &json!(true)), json!(true));
        assert_eq!(normalize(TypeTag::Str, &json!("hello")), json!("hello"));
        assert_eq!(normalize(TypeTag::Byte, &json!(255)), json!(255));
    }

    #[test]
    fn test_probe_sentinel_overrides_every_tag() {
        for tag in [
            TypeTag::Int,
            TypeTag::ByteArray,
            TypeTag::StrArray,
            TypeTag::Path,
            TypeTag::Other,
        ] {
            assert_eq!(normalize(tag, &json!("pass")), json!("pass"));
        }
    }

    #[test]
    fn test_null_array_becomes_empty_array() {
        assert_eq!(normalize(TypeTag::ByteArray, &Value::Null), json!([]));
        assert_eq!(normalize(TypeTag::StrArray, &Value::Null), json!([]));
    }

    #[test]
    fn test_arrays_preserve_element_order() {
        let bytes = json!([1, 2, 3, 255]);
        assert_eq!(normalize(TypeTag::ByteArray, &bytes), bytes);
        let strings = json!(["b", "a", "c"]);
        assert_eq!(normalize(TypeTag::StrArray, &strings), strings);
    }

    #[test]
    fn test_path_rules() {
        assert_eq!(normalize(TypeTag::Path, &Value::Null), Value::Null);
        assert_eq!(
            normalize(TypeTag::Path, &json!("/data/app/base.apk")),
            json!("/data/app/base.apk")
        );
        // Non-string path values fall back textually.
        assert_eq!(normalize(TypeTag::Path, &json!(3)), json!("3"));
    }

    #[test]
    fn test_other_fallback_is_textual() {
        assert_eq!(normalize(TypeTag::Other, &Value::Null), Value::Null);
        assert_eq!(normalize(TypeTag::Other, &json!("x")), json!("x"));
        assert_eq!(normalize(TypeTag::Other, &json!(12)), json!("12"));
        assert_eq!(
            normalize(TypeTag::Other, &json!({"k": 1})),
            json!("{\"k\":1}")
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let cases = [
            (TypeTag::Int, json!(1)),
            (TypeTag::Str, json!("s")),
            (TypeTag::ByteArray, Value::Null),
            (TypeTag::ByteArray, json!([7, 8])),
            (TypeTag::StrArray, json!("not-an-array")),
            (TypeTag::Path, json!({"p": "/x"})),
            (TypeTag::Other, json!([1, 2])),
        ];
        for (tag, value) in cases {
            let once = normalize(tag, &value);
            assert_eq!(normalize(tag, &once), once, "tag {:?}", tag);
        }
    }

    #[test]
    fn test_tag_name_round_trip() {
        for tag in [
            TypeTag::Int,
            TypeTag::Short,
            TypeTag::Long,
            TypeTag::Double,
            TypeTag::Float,
            TypeTag::Bool,
            TypeTag::Byte,
            TypeTag::Str,
            TypeTag::StrArray,
            TypeTag::ByteArray,
            TypeTag::Path,
            TypeTag::Other,
        ] {
            assert_eq!(TypeTag::from_name(tag.as_str()), tag);
        }
        assert_eq!(TypeTag::from_name("java.lang.Object"), TypeTag::Other);
    }

    #[test]
    fn test_bytes_constructor_preserves_order() {
        let tv = TypedValue::bytes(&[9, 0, 127]);
        assert_eq!(tv.tag, TypeTag::ByteArray);
        assert_eq!(tv.value, json!([9, 0, 127]));
    }
}
