//! The interactive release flow
//!
//! A flat sequence of steps sharing one context and one current-version
//! value: optional version bump, commit, push, tag creation/push, and
//! the optional build-and-upload sub-flow (see `upload`).
//!
//! Failure policy: command failures inside a step are reported and the
//! flow continues with a fallback or skips the step. Only a missing git
//! and a closed input stream abort the wizard.

mod upload;

use crate::core::context::WizardContext;
use crate::core::error::{WizardError, WizardResult};
use crate::core::process::{CommandOutput, CommandRunner};
use crate::maven::Maven;
use crate::ui;
use crate::ui::prompt;
use crate::vcs::GitClient;
use std::io::BufRead;

/// Derive the release tag for a version
pub fn release_tag(version: &str) -> String {
  format!("v{}", version)
}

/// Interactive wizard state: context, runner, scripted-or-real input,
/// and the current version threaded through the steps.
pub struct Wizard<'a, R: CommandRunner, I: BufRead> {
  ctx: &'a WizardContext,
  runner: &'a R,
  input: I,
  version: String,
}

/// Flatten a command result into (success, captured output),
/// propagating only non-command errors
fn outcome(res: WizardResult<CommandOutput>) -> WizardResult<(bool, String)> {
  match res {
    Ok(out) => {
      let success = out.success();
      Ok((success, out.output))
    }
    Err(WizardError::CommandFailed { output, .. }) => Ok((false, output)),
    Err(other) => Err(other),
  }
}

/// Same as `outcome` for unit-returning operations
fn unit_outcome(res: WizardResult<()>) -> WizardResult<(bool, String)> {
  match res {
    Ok(()) => Ok((true, String::new())),
    Err(WizardError::CommandFailed { output, .. }) => Ok((false, output)),
    Err(other) => Err(other),
  }
}

/// Print captured command output, if any
fn print_output(output: &str) {
  if !output.trim().is_empty() {
    println!("{}", output.trim_end());
  }
}

impl<'a, R: CommandRunner, I: BufRead> Wizard<'a, R, I> {
  pub fn new(ctx: &'a WizardContext, runner: &'a R, input: I) -> Self {
    Self {
      ctx,
      runner,
      input,
      version: String::new(),
    }
  }

  fn confirm(&mut self, question: &str, default: bool) -> WizardResult<bool> {
    prompt::confirm(&mut self.input, question, default)
  }

  fn git(&self) -> GitClient<'a, R> {
    GitClient::new(self.runner, self.ctx.root())
  }

  fn maven(&self) -> Maven<'a, R> {
    Maven::new(self.runner, self.ctx.root())
  }

  /// Run the whole wizard to completion
  pub fn run(&mut self) -> WizardResult<()> {
    println!("== Release Wizard ==");

    if !self.ctx.tools.git {
      return Err(WizardError::ToolMissing {
        tool: "git".to_string(),
      });
    }
    if !self.ctx.tools.mvn {
      ui::warn("Maven (mvn) not found in PATH. Version bump/build will be unavailable.");
    }

    self.version = self.maven().current_version(self.ctx.tools.mvn);
    if self.version.is_empty() {
      ui::warn("Unable to read project version automatically; you may be asked to enter it.");
      println!("Current project version: (unknown)");
    } else {
      println!("Current project version: {}", self.version);
    }

    self.bump_step()?;
    self.push_step()?;
    let tag = self.tag_step()?;
    self.upload_step(&tag)?;

    Ok(())
  }

  /// Optional version bump plus add/commit of pom.xml
  fn bump_step(&mut self) -> WizardResult<()> {
    if !self.ctx.tools.mvn {
      return Ok(());
    }
    if !self.confirm("Do you want to bump the version in pom.xml?", false)? {
      return Ok(());
    }

    // Retry until the bump succeeds; the only way out without success
    // is closing the input stream
    loop {
      let new_version = prompt::prompt_nonempty(&mut self.input, "Enter new version (e.g., 1.0.1): ")?;
      println!("🔧 Setting version to {} via Maven ...", new_version);
      let (bumped, output) = unit_outcome(self.maven().set_version(&new_version))?;
      if bumped {
        let after = self.maven().current_version(true);
        ui::ok(&format!("Version is now: {}", after));
        self.version = new_version;
        break;
      }
      ui::warn("Failed to set version:");
      print_output(&output);
    }

    if self.confirm("Perform git add/commit for the change?", true)? {
      let git = self.git();
      git.stage("pom.xml")?;
      let message = format!("Bump version to {}", self.version);
      let out = git.commit(&message)?;
      if !out.success() {
        // Nothing to commit is a normal outcome here
        print_output(&out.output);
      }
    } else {
      ui::info("Skipping add/commit as requested.");
    }

    Ok(())
  }

  /// Always-offered push of the current branch
  fn push_step(&mut self) -> WizardResult<()> {
    if !self.confirm("Do you want to git push?", true)? {
      ui::info("Skipping push.");
      return Ok(());
    }
    let (pushed, output) = outcome(self.git().push())?;
    if pushed {
      print_output(&output);
    } else {
      ui::warn("git push failed:");
      print_output(&output);
    }
    Ok(())
  }

  /// Create and optionally push the release tag.
  ///
  /// Returns the tag so the upload sub-flow targets exactly the tag
  /// shown here, even when the version was entered at this step.
  fn tag_step(&mut self) -> WizardResult<String> {
    let tag_version = if self.version.is_empty() {
      prompt::prompt_nonempty(&mut self.input, "Enter version for the tag (e.g., 1.0.1): ")?
    } else {
      self.version.clone()
    };
    let tag = release_tag(&tag_version);
    println!("Tag to create: {}", tag);

    if !self.confirm(&format!("Create tag {}?", tag), true)? {
      ui::info("Tag creation cancelled.");
      return Ok(tag);
    }

    let git = self.git();
    if git.tag_exists(&tag)? {
      ui::info("Tag already exists; continuing.");
    } else {
      let message = format!("Release {}", tag);
      let (created, output) = unit_outcome(git.create_annotated_tag(&tag, &message))?;
      if !created {
        ui::warn("Failed to create tag:");
        print_output(&output);
        return Ok(tag);
      }
      ui::ok("Tag created.");
    }

    if self.confirm("Push the tag to origin?", true)? {
      let (pushed, output) = outcome(git.push_tag("origin", &tag))?;
      if pushed {
        ui::ok("Tag pushed.");
      } else {
        ui::warn("Failed to push tag:");
        print_output(&output);
      }
    } else {
      ui::info("Skipping tag push.");
    }

    Ok(tag)
  }
}
