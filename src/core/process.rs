//! Subprocess execution abstraction
//!
//! Every external command the wizard runs goes through the
//! `CommandRunner` trait: spawn, block until completion, capture the
//! exit code and combined output. Steps stay testable by substituting a
//! scripted fake runner.

use crate::core::error::{WizardError, WizardResult};
use log::debug;
use std::path::Path;
use std::process::Command;

/// Exit code and captured output of a completed command
#[derive(Debug, Clone)]
pub struct CommandOutput {
  /// Process exit code (-1 when terminated by signal)
  pub code: i32,
  /// Captured stdout and stderr, interleaved stdout-first
  pub output: String,
}

impl CommandOutput {
  pub fn success(&self) -> bool {
    self.code == 0
  }
}

/// Render a command line for error messages and logging
pub fn render_command(program: &str, args: &[&str]) -> String {
  let mut rendered = program.to_string();
  for arg in args {
    rendered.push(' ');
    rendered.push_str(arg);
  }
  rendered
}

/// Blocking, fire-and-wait command execution
pub trait CommandRunner {
  /// Run a command to completion, capturing exit code and output.
  ///
  /// A non-zero exit is NOT an error here; callers that branch on the
  /// exit code (tag existence, release existence) inspect `code`
  /// directly. A command that cannot be spawned at all is an error.
  fn run(&self, program: &str, args: &[&str], cwd: &Path) -> WizardResult<CommandOutput>;

  /// Run a command, mapping a non-zero exit to `CommandFailed`
  fn run_checked(&self, program: &str, args: &[&str], cwd: &Path) -> WizardResult<CommandOutput> {
    let out = self.run(program, args, cwd)?;
    if !out.success() {
      return Err(WizardError::CommandFailed {
        command: render_command(program, args),
        output: out.output,
      });
    }
    Ok(out)
  }
}

/// Production runner backed by `std::process::Command`
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
  fn run(&self, program: &str, args: &[&str], cwd: &Path) -> WizardResult<CommandOutput> {
    debug!("running: {} (in {})", render_command(program, args), cwd.display());

    let result = Command::new(program).args(args).current_dir(cwd).output();

    match result {
      Ok(out) => {
        let mut combined = String::from_utf8_lossy(&out.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&out.stderr);
        if !stderr.is_empty() {
          combined.push_str(&stderr);
        }
        Ok(CommandOutput {
          code: out.status.code().unwrap_or(-1),
          output: combined,
        })
      }
      Err(e) => Err(WizardError::CommandFailed {
        command: render_command(program, args),
        output: e.to_string(),
      }),
    }
  }
}

/// Scripted runner for unit tests: records every invocation and
/// replays canned responses matched by command-line prefix.
#[cfg(test)]
pub struct FakeRunner {
  pub calls: std::cell::RefCell<Vec<String>>,
  responses: Vec<(String, i32, String)>,
  spawn_failures: Vec<String>,
}

#[cfg(test)]
impl FakeRunner {
  pub fn new() -> Self {
    Self {
      calls: std::cell::RefCell::new(Vec::new()),
      responses: Vec::new(),
      spawn_failures: Vec::new(),
    }
  }

  /// Respond to commands starting with `prefix` with the given exit
  /// code and output. First matching prefix wins; unmatched commands
  /// succeed with empty output.
  pub fn respond(mut self, prefix: &str, code: i32, output: &str) -> Self {
    self.responses.push((prefix.to_string(), code, output.to_string()));
    self
  }

  /// Treat commands starting with `prefix` as unspawnable
  pub fn fail_spawn(mut self, prefix: &str) -> Self {
    self.spawn_failures.push(prefix.to_string());
    self
  }

  pub fn calls(&self) -> Vec<String> {
    self.calls.borrow().clone()
  }

  pub fn invoked(&self, prefix: &str) -> bool {
    self.calls.borrow().iter().any(|c| c.starts_with(prefix))
  }
}

#[cfg(test)]
impl CommandRunner for FakeRunner {
  fn run(&self, program: &str, args: &[&str], _cwd: &Path) -> WizardResult<CommandOutput> {
    let rendered = render_command(program, args);
    self.calls.borrow_mut().push(rendered.clone());

    if self.spawn_failures.iter().any(|p| rendered.starts_with(p.as_str())) {
      return Err(WizardError::CommandFailed {
        command: rendered,
        output: "No such file or directory".to_string(),
      });
    }

    for (prefix, code, output) in &self.responses {
      if rendered.starts_with(prefix.as_str()) {
        return Ok(CommandOutput {
          code: *code,
          output: output.clone(),
        });
      }
    }

    Ok(CommandOutput {
      code: 0,
      output: String::new(),
    })
  }
}
