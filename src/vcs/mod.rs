//! Git operations via the system git client
//!
//! Thin wrappers over the command runner; no libgit2, the wizard only
//! needs a handful of porcelain commands.

use crate::core::error::WizardResult;
use crate::core::process::{CommandOutput, CommandRunner};
use std::path::Path;

/// Git client bound to a repository root
pub struct GitClient<'a, R: CommandRunner> {
  runner: &'a R,
  root: &'a Path,
}

impl<'a, R: CommandRunner> GitClient<'a, R> {
  pub fn new(runner: &'a R, root: &'a Path) -> Self {
    Self { runner, root }
  }

  /// Stage a single file
  pub fn stage(&self, path: &str) -> WizardResult<()> {
    self.runner.run_checked("git", &["add", path], self.root)?;
    Ok(())
  }

  /// Commit with a message, tolerating a non-zero exit (nothing to
  /// commit is a normal outcome after a no-op bump). Returns the raw
  /// result so the caller can report it.
  pub fn commit(&self, message: &str) -> WizardResult<CommandOutput> {
    self.runner.run("git", &["commit", "-m", message], self.root)
  }

  /// Push the current branch
  pub fn push(&self) -> WizardResult<CommandOutput> {
    self.runner.run("git", &["push"], self.root)
  }

  /// Check whether a tag reference exists locally
  pub fn tag_exists(&self, tag: &str) -> WizardResult<bool> {
    let refspec = format!("refs/tags/{}", tag);
    let out = self
      .runner
      .run("git", &["rev-parse", "-q", "--verify", &refspec], self.root)?;
    Ok(out.success())
  }

  /// Create an annotated tag with a message
  pub fn create_annotated_tag(&self, tag: &str, message: &str) -> WizardResult<()> {
    self
      .runner
      .run_checked("git", &["tag", "-a", tag, "-m", message], self.root)?;
    Ok(())
  }

  /// Push a single tag to a named remote
  pub fn push_tag(&self, remote: &str, tag: &str) -> WizardResult<CommandOutput> {
    self.runner.run("git", &["push", remote, tag], self.root)
  }
}
