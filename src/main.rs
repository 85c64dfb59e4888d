mod artifact;
mod core;
mod hosting;
mod maven;
mod ui;
mod vcs;
mod wizard;

use crate::core::context::WizardContext;
use crate::core::error::{WizardError, print_error};
use crate::core::process::SystemRunner;
use clap::Parser;
use std::path::PathBuf;

/// Interactive release wizard: version bump, commit, push, tag, and
/// shaded-JAR upload to GitHub Releases
#[derive(Parser)]
#[command(name = "release-wizard")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Project root directory (default: current directory)
  #[arg(short = 'C', long = "dir", value_name = "PATH")]
  dir: Option<PathBuf>,
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
  env_logger::init();
  let cli = Cli::parse();

  let root = match cli.dir {
    Some(dir) => dir,
    None => match std::env::current_dir() {
      Ok(dir) => dir,
      Err(e) => {
        eprintln!("Error: Failed to get current directory: {}", e);
        std::process::exit(1);
      }
    },
  };

  let ctx = match WizardContext::build(root) {
    Ok(ctx) => ctx,
    Err(err) => handle_error(err),
  };

  let runner = SystemRunner;
  let stdin = std::io::stdin();
  let mut wizard = wizard::Wizard::new(&ctx, &runner, stdin.lock());
  if let Err(err) = wizard.run() {
    handle_error(err);
  }
}

fn handle_error(err: WizardError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code());
}
