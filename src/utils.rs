//! Small shared helpers for YAML scalar display and HTML escaping

use serde_yaml::Value;

/// Render a YAML value the way it should appear in a table cell.
///
/// Strings are used verbatim, other scalars via their canonical text form,
/// null becomes the empty string. Nested mappings and sequences fall back to
/// their YAML serialization (they are not expected in the scalar attributes).
pub fn yaml_display(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::Bool(b) => b.to_string(),
    Value::Number(n) => n.to_string(),
    Value::String(s) => s.clone(),
    other => serde_yaml::to_string(other).map(|s| s.trim_end().to_string()).unwrap_or_default(),
  }
}

/// Escape plain text for inclusion in HTML body content or attributes
pub fn escape_html(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for ch in text.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(ch),
    }
  }
  out
}
