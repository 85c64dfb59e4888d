//! Build-and-upload sub-flow
//!
//! Gated behind its own confirmation and fully recoverable: every
//! failure inside this flow ends with a skip note (rely on CI) or a
//! printed retry command, never with a wizard abort.

use super::{Wizard, outcome, print_output, unit_outcome};
use crate::artifact;
use crate::core::error::{WizardError, WizardResult};
use crate::core::process::CommandRunner;
use crate::hosting::{GhClient, retry_create_command, retry_upload_command};
use crate::ui;
use crate::ui::prompt;
use std::io::BufRead;
use std::path::{Path, PathBuf};

impl<'a, R: CommandRunner, I: BufRead> Wizard<'a, R, I> {
  /// Optionally build the shaded JAR and upload it to the GitHub
  /// Release for `tag`, creating the release when absent.
  pub(super) fn upload_step(&mut self, tag: &str) -> WizardResult<()> {
    if !self.confirm("Build and upload shaded JAR to GitHub Releases now?", false)? {
      println!();
      println!("Wizard finished. You can also rely on CI or gh scripts later to upload the JAR.");
      return Ok(());
    }

    let Some(gh_bin) = self.locate_gh()? else {
      ui::info("Skipping local upload. CI can handle the tag.");
      return Ok(());
    };

    self.build_artifact()?;

    let Some(jar) = self.locate_artifact()? else {
      ui::info("No JAR provided. Skipping upload. You can rely on CI.");
      return Ok(());
    };

    println!("📦 Preparing upload to release {} ...", tag);
    let gh = GhClient::new(self.runner, self.ctx.root(), gh_bin.clone());

    let exists = match gh.release_exists(tag) {
      Ok(exists) => exists,
      Err(WizardError::CommandFailed { .. }) => {
        ui::warn("Could not execute GitHub CLI. Try running: gh auth login");
        ui::info("Skipping local upload. CI can handle the tag.");
        return Ok(());
      }
      Err(other) => return Err(other),
    };

    if exists {
      println!("🚀 Release exists. Uploading/replacing asset ...");
      let (uploaded, output) = outcome(gh.upload_asset(tag, &jar))?;
      if !uploaded {
        ui::warn("Failed to upload via gh:");
        print_output(&output);
        return self.upload_failure(&retry_upload_command(&gh_bin, tag, &jar));
      }
    } else {
      println!("🚀 Creating new Release...");
      let (created, output) = outcome(gh.create_release(tag, &jar))?;
      if !created {
        ui::warn("Failed to create Release via gh:");
        print_output(&output);
        return self.upload_failure(&retry_create_command(&gh_bin, tag, &jar));
      }
    }

    ui::ok(&format!("Uploaded {} to release {}.", display_name(&jar), tag));
    Ok(())
  }

  /// PATH-resolved gh, a user-supplied executable path, or None to
  /// abandon the sub-flow
  fn locate_gh(&mut self) -> WizardResult<Option<String>> {
    if self.ctx.tools.gh {
      return Ok(Some("gh".to_string()));
    }
    let path = prompt::prompt_file_path(
      &mut self.input,
      "GitHub CLI (gh) not found. Paste full path to gh executable, or press Enter to skip: ",
      true,
    )?;
    Ok(path.map(|p| p.display().to_string()))
  }

  /// Try to build the shaded JAR: PATH mvn first, then a manual
  /// executable path, otherwise continue and rely on an existing JAR
  fn build_artifact(&mut self) -> WizardResult<()> {
    if self.ctx.tools.mvn {
      println!("🔨 Building with Maven (skip tests)...");
      let (built, output) = unit_outcome(self.maven().package("mvn"))?;
      if built {
        return Ok(());
      }
      ui::warn("Maven build failed.");
      print_output(&output);
    }

    let answer = prompt::prompt_optional(
      &mut self.input,
      "Paste full path to Maven executable to build (or press Enter to skip build): ",
    )?;
    match answer {
      Some(raw) => {
        if PathBuf::from(&raw).is_file() {
          println!("🔨 Building with Maven (skip tests)...");
          let (built, output) = unit_outcome(self.maven().package(&raw))?;
          if !built {
            ui::warn("Build failed or mvn not executable. Continuing without build.");
            print_output(&output);
          }
        } else {
          ui::warn("Not a valid file. Continuing without build.");
        }
      }
      None => ui::info("Skipping build. Will try to use an existing shaded JAR."),
    }
    Ok(())
  }

  /// Newest shaded JAR from target/, or a user-supplied path
  fn locate_artifact(&mut self) -> WizardResult<Option<PathBuf>> {
    if let Some(jar) = artifact::newest_shaded_jar(&self.ctx.root().join("target")) {
      return Ok(Some(jar));
    }
    prompt::prompt_file_path(
      &mut self.input,
      "No *-shaded.jar found in target. Paste full path to a shaded JAR (or press Enter to cancel): ",
      true,
    )
  }

  /// Terminal branch for hosting-CLI failures: rely on CI or print a
  /// literal retry command; either way the sub-flow ends cleanly
  fn upload_failure(&mut self, retry: &str) -> WizardResult<()> {
    if self.confirm("Skip local upload and rely on CI?", true)? {
      ui::info("Skipping local upload. CI will handle the tag.");
    } else {
      println!("Try manually later:");
      println!("  {}", retry);
    }
    Ok(())
  }
}

/// Resolve the file name of an artifact for display (lossy)
fn display_name(path: &Path) -> String {
  path
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .unwrap_or_else(|| path.display().to_string())
}
