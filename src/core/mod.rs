//! Core building blocks for the release wizard
//!
//! - **context**: immutable process-wide context (project root, tool availability)
//! - **error**: error types with exit codes and user-facing printing
//! - **process**: subprocess execution abstraction (CommandRunner)

pub mod context;
pub mod error;
pub mod process;
