use serde_yaml::Value;

/// Renders a scalar YAML node as text. Numbers and booleans are stringified;
/// nulls, sequences and mappings have no text form.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// A printable label for any node, used in error messages.
pub(crate) fn label(value: &Value) -> String {
    scalar_text(value).unwrap_or_else(|| "~".to_string())
}
