mod checks;
mod commands;
mod core;
mod links;
mod loader;
mod render;
mod suite;
mod utils;

use std::path::PathBuf;

use clap::Parser;

use crate::core::error::{print_error, SpecError};
use crate::links::{DEFAULT_CHECK_LIB_DIR, DEFAULT_CHECK_LIB_REPO};

/// Create an HTML specification document from YAML check-suite files
#[derive(Parser)]
#[command(name = "checkspec")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Project metadata YAML file
  #[arg(short = 'p', long, value_name = "FILE")]
  project_metadata: PathBuf,

  /// Output HTML file
  #[arg(short = 'o', long, value_name = "FILE")]
  output: PathBuf,

  /// Check-suite YAML files, in document order
  #[arg(value_name = "SUITE_FILE")]
  suite_files: Vec<PathBuf>,

  /// Local checkout of the check library, used for source and test links
  #[arg(long, value_name = "DIR", default_value = DEFAULT_CHECK_LIB_DIR)]
  check_lib_dir: PathBuf,

  /// Browsable repository URL for the check library
  #[arg(long, value_name = "URL", default_value = DEFAULT_CHECK_LIB_REPO)]
  check_lib_repo: String,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let opts = commands::WriteOptions {
    project_metadata: cli.project_metadata,
    output: cli.output,
    suite_files: cli.suite_files,
    check_lib_dir: cli.check_lib_dir,
    check_lib_repo: cli.check_lib_repo,
  };

  let registry = checks::CheckRegistry::with_builtins();
  let mut diag = crate::core::diagnostics::Diagnostics::new();

  let result = commands::run_write(&opts, &registry, &mut diag);

  // Non-fatal warnings are reported whether or not the run succeeded
  diag.flush_to_stderr();

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: SpecError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
