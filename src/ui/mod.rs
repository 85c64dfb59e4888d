//! Terminal output helpers
//!
//! All user-facing output is plain line-based printing; prompts live in
//! the `prompt` submodule.

pub mod prompt;

/// Print a warning line
pub fn warn(msg: &str) {
  println!("⚠️  {}", msg);
}

/// Print a success line
pub fn ok(msg: &str) {
  println!("✅ {}", msg);
}

/// Print an informational line
pub fn info(msg: &str) {
  println!("   {}", msg);
}
