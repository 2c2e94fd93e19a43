//! Include resolution through the full binary

use crate::helpers::*;
use anyhow::Result;

fn args_with_suites<'a>(base: &'a [String], suites: &[&'a str]) -> Vec<&'a str> {
  let mut args: Vec<&str> = base.iter().map(String::as_str).collect();
  args.extend_from_slice(suites);
  args
}

const SIZE_CHECK: &str = "check_name: checklib.register.file_checks_register.FileSizeCheck";

#[test]
fn test_included_checks_are_spliced_in_order() -> Result<()> {
  let project = TestProject::with_populated_check_lib()?;
  project.write_file(
    "host.yml",
    &format!(
      "suite_name: core\n\
       checks:\n\
       - {SIZE_CHECK}\n\
       \x20 parameters: {{threshold: 1}}\n\
       \x20 check_id: first\n\
       - include: nested/mid.yml\n\
       - {SIZE_CHECK}\n\
       \x20 parameters: {{threshold: 4}}\n\
       \x20 check_id: last\n"
    ),
  )?;
  project.write_file(
    "nested/mid.yml",
    &format!(
      "checks:\n\
       - {SIZE_CHECK}\n\
       \x20 parameters: {{threshold: 2}}\n\
       \x20 check_id: middle\n\
       - include: leaf.yml\n"
    ),
  )?;
  project.write_file(
    "nested/leaf.yml",
    &format!(
      "checks:\n\
       - {SIZE_CHECK}\n\
       \x20 parameters: {{threshold: 3}}\n\
       \x20 check_id: deep\n"
    ),
  )?;

  let base = project.base_args();
  run_checkspec(&project.path, &args_with_suites(&base, &["host.yml"]))?;

  let html = project.read_file("spec.html")?;
  let positions: Vec<usize> = ["first", "middle", "deep", "last"]
    .iter()
    .map(|id| {
      html
        .find(&format!("<b>{}</b>", id))
        .unwrap_or_else(|| panic!("check id '{}' missing from document", id))
    })
    .collect();

  assert!(positions.windows(2).all(|w| w[0] < w[1]), "rows out of order: {:?}", positions);

  Ok(())
}

#[test]
fn test_include_cycle_is_fatal() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("a.yml", "suite_name: core\nchecks:\n- include: b.yml\n")?;
  project.write_file("b.yml", "checks:\n- include: a.yml\n")?;

  let base = project.base_args();
  let output = run_checkspec_expect_failure(&project.path, &args_with_suites(&base, &["a.yml"]))?;

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("cycle"), "stderr should mention the cycle: {}", stderr);
  assert!(!project.file_exists("spec.html"));

  Ok(())
}

#[test]
fn test_missing_include_target_is_fatal() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("host.yml", "suite_name: core\nchecks:\n- include: nowhere.yml\n")?;

  let base = project.base_args();
  let output = run_checkspec_expect_failure(&project.path, &args_with_suites(&base, &["host.yml"]))?;

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("nowhere.yml"));

  Ok(())
}
