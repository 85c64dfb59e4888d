//! Maven operations: version resolution, version bump, package build
//!
//! Version resolution is two-tier: ask Maven itself
//! (`help:evaluate -Dexpression=project.version`) and fall back to a
//! tolerant regex scan of pom.xml. The scan deliberately stays a loose
//! pattern match rather than a real XML parse so that malformed or
//! partial files still resolve instead of erroring.

use crate::core::error::WizardResult;
use crate::core::process::CommandRunner;
use regex::Regex;
use std::path::Path;

/// Pattern for a `<version>` reachable from the `<project` opening tag.
/// Matching the root scope first avoids accidentally picking up a
/// dependency's version further down the file.
const PROJECT_VERSION_PATTERN: &str = r"(?is)<project.*?<version>\s*([^<\s]+)\s*</version>";

/// Fallback: any `<version>` tag anywhere in the file
const ANY_VERSION_PATTERN: &str = r"(?i)<version>\s*([^<\s]+)\s*</version>";

/// Maven driver bound to a project root
pub struct Maven<'a, R: CommandRunner> {
  runner: &'a R,
  root: &'a Path,
}

impl<'a, R: CommandRunner> Maven<'a, R> {
  pub fn new(runner: &'a R, root: &'a Path) -> Self {
    Self { runner, root }
  }

  /// Best-effort current project version, or empty if unresolvable.
  ///
  /// Prefers `mvn help:evaluate` (last non-empty output line, since -q
  /// can still leave download noise ahead of the value), then falls
  /// back to scanning pom.xml. Never errors.
  pub fn current_version(&self, mvn_available: bool) -> String {
    if mvn_available {
      if let Ok(out) = self.runner.run_checked(
        "mvn",
        &["-q", "-DforceStdout", "help:evaluate", "-Dexpression=project.version"],
        self.root,
      ) {
        let version = out
          .output
          .lines()
          .map(str::trim)
          .filter(|l| !l.is_empty())
          .next_back()
          .unwrap_or("")
          .to_string();
        if !version.is_empty() {
          return version;
        }
      }
    }

    read_pom_version(&self.root.join("pom.xml"))
  }

  /// Set the project version in pom.xml via `versions:set`, without
  /// generating backup POMs. Non-zero exit propagates to the caller.
  pub fn set_version(&self, new_version: &str) -> WizardResult<()> {
    let new_version_arg = format!("-DnewVersion={}", new_version);
    self.runner.run_checked(
      "mvn",
      &["-q", "versions:set", &new_version_arg, "-DgenerateBackupPoms=false"],
      self.root,
    )?;
    Ok(())
  }

  /// Build the package with tests skipped, using the given executable
  /// (PATH-resolved `mvn` or a user-supplied path).
  pub fn package(&self, mvn_bin: &str) -> WizardResult<()> {
    self
      .runner
      .run_checked(mvn_bin, &["-q", "-DskipTests", "package"], self.root)?;
    Ok(())
  }
}

/// Extract the project version from a pom.xml file, tolerantly.
///
/// Returns an empty string when the file is absent, unreadable, or
/// contains no version tag. Never panics on malformed input.
pub fn read_pom_version(pom_path: &Path) -> String {
  let Ok(text) = std::fs::read_to_string(pom_path) else {
    return String::new();
  };

  let Ok(project_re) = Regex::new(PROJECT_VERSION_PATTERN) else {
    return String::new();
  };
  if let Some(caps) = project_re.captures(&text) {
    return caps[1].trim().to_string();
  }

  let Ok(any_re) = Regex::new(ANY_VERSION_PATTERN) else {
    return String::new();
  };
  match any_re.captures(&text) {
    Some(caps) => caps[1].trim().to_string(),
    None => String::new(),
  }
}
