//! Process-wide wizard context - build once, pass everywhere
//!
//! Tool availability is probed a single time at startup and treated as
//! read-only afterwards. Commands that need a tool which was absent at
//! startup fall back to prompting for an explicit executable path.

use crate::core::error::{WizardError, WizardResult};
use std::path::{Path, PathBuf};

/// Which external tools were resolvable in PATH at startup
#[derive(Debug, Clone, Copy)]
pub struct ToolAvailability {
  /// git - required, the wizard refuses to run without it
  pub git: bool,
  /// mvn - optional, bump/build steps degrade without it
  pub mvn: bool,
  /// gh - optional, the upload sub-flow prompts for a path without it
  pub gh: bool,
}

impl ToolAvailability {
  /// Probe PATH for all tools the wizard may invoke
  pub fn detect() -> Self {
    Self {
      git: in_path("git"),
      mvn: in_path("mvn"),
      gh: in_path("gh"),
    }
  }
}

/// Check whether a program is resolvable in the execution search path
pub fn in_path(program: &str) -> bool {
  which::which(program).is_ok()
}

/// Immutable context shared by every wizard step
#[derive(Debug, Clone)]
pub struct WizardContext {
  /// Project root directory (working directory for every subprocess)
  pub root: PathBuf,

  /// Tool availability, probed once at startup
  pub tools: ToolAvailability,
}

impl WizardContext {
  /// Build the context for a project root
  pub fn build(root: PathBuf) -> WizardResult<Self> {
    if !root.is_dir() {
      return Err(WizardError::message(format!(
        "Project directory not found: {}",
        root.display()
      )));
    }

    Ok(Self {
      root,
      tools: ToolAvailability::detect(),
    })
  }

  /// Project root as a path reference (convenience)
  pub fn root(&self) -> &Path {
    &self.root
  }
}
