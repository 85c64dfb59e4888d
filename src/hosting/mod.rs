//! GitHub Release operations via the gh CLI
//!
//! The binary is either PATH-resolved `gh` or an explicit executable
//! path supplied by the user during the upload sub-flow. Failures here
//! are surfaced with captured output; the wizard decides how to recover.

use crate::core::error::WizardResult;
use crate::core::process::{CommandOutput, CommandRunner};
use std::path::Path;

/// Fixed notes attached to releases created by the wizard
pub const RELEASE_NOTES: &str = "Automated release";

/// GitHub CLI client bound to a repository root
pub struct GhClient<'a, R: CommandRunner> {
  runner: &'a R,
  root: &'a Path,
  bin: String,
}

impl<'a, R: CommandRunner> GhClient<'a, R> {
  pub fn new(runner: &'a R, root: &'a Path, bin: String) -> Self {
    Self { runner, root, bin }
  }

  /// Check whether a release exists for the tag.
  ///
  /// Non-zero exit means "does not exist"; an unspawnable binary is an
  /// error (the caller treats it as "could not execute the CLI").
  pub fn release_exists(&self, tag: &str) -> WizardResult<bool> {
    let out = self.runner.run(&self.bin, &["release", "view", tag], self.root)?;
    Ok(out.success())
  }

  /// Create a release for the tag with the asset attached, titled
  /// after the tag, with the fixed notes string
  pub fn create_release(&self, tag: &str, asset: &Path) -> WizardResult<CommandOutput> {
    let asset = asset.display().to_string();
    self.runner.run(
      &self.bin,
      &["release", "create", tag, &asset, "--title", tag, "--notes", RELEASE_NOTES],
      self.root,
    )
  }

  /// Upload (or replace, with clobber semantics) an asset on an
  /// existing release
  pub fn upload_asset(&self, tag: &str, asset: &Path) -> WizardResult<CommandOutput> {
    let asset = asset.display().to_string();
    self
      .runner
      .run(&self.bin, &["release", "upload", tag, &asset, "--clobber"], self.root)
  }
}

/// Literal command line the user can run manually to create a release
pub fn retry_create_command(bin: &str, tag: &str, asset: &Path) -> String {
  format!(
    "\"{}\" release create {} \"{}\" --title {} --notes \"{}\"",
    bin,
    tag,
    asset.display(),
    tag,
    RELEASE_NOTES
  )
}

/// Literal command line the user can run manually to upload an asset
pub fn retry_upload_command(bin: &str, tag: &str, asset: &Path) -> String {
  format!("\"{}\" release upload {} \"{}\" --clobber", bin, tag, asset.display())
}
