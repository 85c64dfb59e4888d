//! Error types for the release wizard
//!
//! The wizard prefers graceful degradation: most command failures are
//! reported inline and the flow continues with a fallback. Errors that
//! reach this module's `print_error` are fatal and terminate the run.

use thiserror::Error;

/// Result alias used throughout the wizard
pub type WizardResult<T> = Result<T, WizardError>;

#[derive(Debug, Error)]
pub enum WizardError {
  /// A required external tool is not resolvable in PATH
  #[error("{tool} not found in PATH")]
  ToolMissing { tool: String },

  /// An external command exited non-zero or could not be spawned
  #[error("command failed: {command}")]
  CommandFailed {
    /// Rendered command line (program + arguments)
    command: String,
    /// Captured output (stdout and stderr combined), or the spawn error
    output: String,
  },

  /// The user interrupted the wizard (input stream closed)
  #[error("cancelled")]
  Cancelled,

  /// An I/O error with a human-readable context
  #[error("{context}: {source}")]
  Io {
    context: String,
    #[source]
    source: std::io::Error,
  },

  /// Free-form error message
  #[error("{0}")]
  Message(String),
}

impl WizardError {
  /// Convenience constructor for free-form messages
  pub fn message(msg: impl Into<String>) -> Self {
    WizardError::Message(msg.into())
  }

  /// Process exit status for this error
  ///
  /// The wizard exposes only two exit codes: 0 on normal completion and
  /// 1 for every fatal condition (missing git, cancellation, unexpected
  /// command failure).
  pub fn exit_code(&self) -> i32 {
    1
  }
}

/// Extension trait for attaching context to std I/O results
pub trait ResultExt<T> {
  fn context(self, msg: &str) -> WizardResult<T>;
}

impl<T> ResultExt<T> for std::io::Result<T> {
  fn context(self, msg: &str) -> WizardResult<T> {
    self.map_err(|source| WizardError::Io {
      context: msg.to_string(),
      source,
    })
  }
}

/// Print a fatal error to stderr in a user-facing format
pub fn print_error(err: &WizardError) {
  match err {
    WizardError::Cancelled => {
      eprintln!();
      eprintln!("⚠️  Cancelled.");
    }
    WizardError::CommandFailed { command, output } => {
      eprintln!("❌ Command failed: {}", command);
      if !output.trim().is_empty() {
        eprintln!("{}", output.trim_end());
      }
    }
    other => {
      eprintln!("❌ Error: {}", other);
    }
  }
}
