//! End-to-end tests for the write pipeline

use crate::helpers::*;
use anyhow::Result;

const CORE_SUITE: &str = "suite_name: core\n\
                          checks:\n\
                          - check_name: checklib.register.file_checks_register.FileSizeCheck\n\
                          \x20 parameters:\n\
                          \x20   threshold: 4\n\
                          \x20 check_id: filesize\n\
                          \x20 check_level: HIGH\n\
                          \x20 comments: Applies to all data files\n";

fn args_with_suites<'a>(base: &'a [String], suites: &[&'a str]) -> Vec<&'a str> {
  let mut args: Vec<&str> = base.iter().map(String::as_str).collect();
  args.extend_from_slice(suites);
  args
}

#[test]
fn test_write_produces_full_document() -> Result<()> {
  let project = TestProject::with_populated_check_lib()?;
  project.write_file("core.yml", CORE_SUITE)?;

  let base = project.base_args();
  run_checkspec(&project.path, &args_with_suites(&base, &["core.yml"]))?;

  let html = project.read_file("spec.html")?;
  assert!(html.contains("<h1>ESA CCI</h1>"));
  assert!(html.contains("<h2>core</h2>"));
  assert!(html.contains("<b>filesize</b>"));
  assert!(html.contains("Data file is no larger than 4 Mbytes."));
  assert!(html.contains("0: Data file exceeds the size limit of 4 Mbytes.<br/>1: SUCCESS!"));
  assert!(html.contains(
    "<a href='https://example.com/check-lib/blob/master/checklib/register/file_checks_register.py#L4'>FileSizeCheck</a>"
  ));
  assert!(html.contains(
    "<a href='https://example.com/check-lib/blob/master/checklib/test/test_file_checks.py'>test_file_checks.py</a>"
  ));
  assert!(html.contains("<b>threshold:</b> '4'"));

  Ok(())
}

#[test]
fn test_zero_suite_files_is_clean_exit() -> Result<()> {
  let project = TestProject::new()?;

  let base = project.base_args();
  let output = run_checkspec(&project.path, &args_with_suites(&base, &[]))?;

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("No check suite files given"));
  assert!(!project.file_exists("spec.html"));

  Ok(())
}

#[test]
fn test_missing_metadata_key_fails_naming_key() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file(
    "metadata.yml",
    "canonicalName: esacci\n\
     label: ESA CCI\n\
     description: Climate data checks\n\
     vocab_authority: ceda\n\
     vocab_scope: cci\n",
  )?;
  project.write_file("core.yml", CORE_SUITE)?;

  let base = project.base_args();
  let output = run_checkspec_expect_failure(&project.path, &args_with_suites(&base, &["core.yml"]))?;

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("checks_version"));
  assert_eq!(output.status.code(), Some(3));
  assert!(!project.file_exists("spec.html"));

  Ok(())
}

#[test]
fn test_malformed_suite_yaml_names_file() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("broken.yml", "suite_name: [unclosed\n")?;

  let base = project.base_args();
  let output = run_checkspec_expect_failure(&project.path, &args_with_suites(&base, &["broken.yml"]))?;

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("broken.yml"));
  assert_eq!(output.status.code(), Some(1));
  assert!(!project.file_exists("spec.html"));

  Ok(())
}

#[test]
fn test_unknown_check_name_is_fatal() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("core.yml", "suite_name: core\nchecks:\n- check_name: no.such.Check\n")?;

  let base = project.base_args();
  let output = run_checkspec_expect_failure(&project.path, &args_with_suites(&base, &["core.yml"]))?;

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("no.such.Check"));
  assert!(!project.file_exists("spec.html"));

  Ok(())
}

#[test]
fn test_missing_check_lib_degrades_to_warnings() -> Result<()> {
  // Empty checkout: both the source-line and unit-test lookups fail, the
  // run still succeeds and the links fall back to placeholders
  let project = TestProject::new()?;
  project.write_file("core.yml", CORE_SUITE)?;

  let base = project.base_args();
  let output = run_checkspec(&project.path, &args_with_suites(&base, &["core.yml"]))?;

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("WARNING"));
  assert!(stderr.contains("could not locate unit test for: FileSizeCheck"));

  let html = project.read_file("spec.html")?;
  assert!(html.contains("file_checks_register.py#L'"));

  Ok(())
}

#[test]
fn test_two_suites_render_in_argument_order() -> Result<()> {
  let project = TestProject::with_populated_check_lib()?;
  project.write_file("core.yml", CORE_SUITE)?;
  project.write_file(
    "extra.yml",
    "suite_name: extra\n\
     checks:\n\
     - check_name: checklib.register.nc_file_checks_register.GlobalAttrRegexCheck\n\
     \x20 parameters:\n\
     \x20   attribute: title\n\
     \x20   regex: '.*CCI.*'\n\
     \x20 check_id: title-regex\n",
  )?;

  let base = project.base_args();
  run_checkspec(&project.path, &args_with_suites(&base, &["core.yml", "extra.yml"]))?;

  let html = project.read_file("spec.html")?;
  let core = html.find("<h2>core</h2>").expect("core section missing");
  let extra = html.find("<h2>extra</h2>").expect("extra section missing");
  assert!(core < extra);

  Ok(())
}

#[test]
fn test_duplicate_suite_name_is_fatal() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("core.yml", CORE_SUITE)?;
  project.write_file("core2.yml", CORE_SUITE)?;

  let base = project.base_args();
  let output =
    run_checkspec_expect_failure(&project.path, &args_with_suites(&base, &["core.yml", "core2.yml"]))?;

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("core"));
  assert!(!project.file_exists("spec.html"));

  Ok(())
}
