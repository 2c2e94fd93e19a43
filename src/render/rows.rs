//! Row formatting for the specification tables
//!
//! One enriched check becomes one ordered list of cell strings, one per
//! documented attribute. The attribute order and labels are fixed by
//! `CHECK_ATTRIBUTES`; the per-attribute formatting rules are part of the
//! output contract and must stay byte-stable.

use crate::checks::EnrichedCheck;
use crate::core::diagnostics::Diagnostics;
use crate::links::CheckLibIndex;
use crate::utils::yaml_display;

/// Documented check attributes, in column order, with display labels
pub const CHECK_ATTRIBUTES: [(&str, &str); 7] = [
  ("check_id", "Check ID"),
  ("description", "Description"),
  ("check_level", "Level"),
  ("check_responses", "Responses"),
  ("comments", "Comments"),
  ("base_check", "Python check (link to repository)"),
  ("check_unittest", "Python unittest"),
];

/// Column headers in table order
pub fn table_headers() -> Vec<&'static str> {
  CHECK_ATTRIBUTES.iter().map(|(_, label)| *label).collect()
}

/// Format one enriched check into its ordered cell contents
pub fn format_row(check: &EnrichedCheck, index: &CheckLibIndex, diag: &mut Diagnostics) -> Vec<String> {
  CHECK_ATTRIBUTES
    .iter()
    .map(|(key, _)| format_cell(key, check, index, diag))
    .collect()
}

fn format_cell(key: &str, check: &EnrichedCheck, index: &CheckLibIndex, diag: &mut Diagnostics) -> String {
  match key {
    "check_id" => format!("<b>{}</b>", declared_value(check, key)),
    "description" => check.description.clone(),
    "check_responses" => format_responses(&check.responses),
    "base_check" => base_check_cell(check, index, diag),
    "check_unittest" => unittest_cell(check, index, diag),
    _ => declared_value(check, key),
  }
}

fn declared_value(check: &EnrichedCheck, key: &str) -> String {
  check.declared.attribute(key).map(yaml_display).unwrap_or_default()
}

/// `index: message` per response, `<br/>`-joined, closed by a synthetic
/// success line numbered one past the last response
fn format_responses(responses: &[String]) -> String {
  if responses.is_empty() {
    return "0: SUCCESS!".to_string();
  }

  let lines: Vec<String> = responses
    .iter()
    .enumerate()
    .map(|(i, message)| format!("{}: {}", i, message))
    .collect();

  format!("{}<br/>{}: SUCCESS!", lines.join("<br/>\n"), responses.len())
}

fn base_check_cell(check: &EnrichedCheck, index: &CheckLibIndex, diag: &mut Diagnostics) -> String {
  let module = check.declared.module_path();
  let class_name = check.declared.class_name();

  let line = index.locate_definition(&module, class_name, diag);
  let url = index.check_url(&module, line);

  let mut cell = format!("<a href='{}'>{}</a>", url, class_name);

  if check.declared.parameters.is_empty() {
    cell.push_str("<br/>No parameters.");
  } else {
    cell.push_str("<br/>Parameters:");
    for (key, value) in &check.declared.parameters {
      cell.push_str(&format!("<br/><b>{}:</b> '{}'", yaml_display(key), yaml_display(value)));
    }
  }

  cell
}

fn unittest_cell(check: &EnrichedCheck, index: &CheckLibIndex, diag: &mut Diagnostics) -> String {
  match index.locate_test(check.declared.class_name(), diag) {
    Some(module) => format!("<a href='{}'>{}</a>", index.test_url(&module), module),
    None => String::new(),
  }
}
