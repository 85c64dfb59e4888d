//! Line-based interactive prompts
//!
//! Every prompt is generic over `BufRead` so tests can script the
//! conversation. A closed input stream (EOF) means the user is gone and
//! maps to `WizardError::Cancelled`; invalid answers are re-prompted in
//! place and never become errors.

use crate::core::error::{ResultExt, WizardError, WizardResult};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Read one line, trimmed. Returns `Cancelled` on EOF.
fn read_line<I: BufRead>(input: &mut I) -> WizardResult<String> {
  let mut line = String::new();
  let n = input.read_line(&mut line).context("reading input")?;
  if n == 0 {
    return Err(WizardError::Cancelled);
  }
  Ok(line.trim().to_string())
}

fn show(question: &str) -> WizardResult<()> {
  print!("{}", question);
  std::io::stdout().flush().context("flushing prompt")
}

/// Ask a yes/no question with a stated default.
///
/// Empty input selects the default; `y`/`yes`/`yep` and `n`/`no` are
/// accepted case-insensitively; anything else re-prompts indefinitely.
pub fn confirm<I: BufRead>(input: &mut I, question: &str, default: bool) -> WizardResult<bool> {
  let default_str = if default { "Y/n" } else { "y/N" };
  loop {
    show(&format!("{} [{}]: ", question, default_str))?;
    let answer = read_line(input)?.to_lowercase();
    if answer.is_empty() {
      return Ok(default);
    }
    match answer.as_str() {
      "y" | "yes" | "yep" => return Ok(true),
      "n" | "no" => return Ok(false),
      _ => println!("Please answer with y or n."),
    }
  }
}

/// Prompt for a free-form value, looping until it is non-empty
pub fn prompt_nonempty<I: BufRead>(input: &mut I, question: &str) -> WizardResult<String> {
  loop {
    show(question)?;
    let answer = read_line(input)?;
    if !answer.is_empty() {
      return Ok(answer);
    }
    println!("Please enter a valid value.");
  }
}

/// Prompt for an optional line, trimming surrounding double quotes
/// (pasted Windows paths often carry them). Empty input yields `None`.
pub fn prompt_optional<I: BufRead>(input: &mut I, question: &str) -> WizardResult<Option<String>> {
  show(question)?;
  let answer = read_line(input)?;
  let answer = answer.trim_matches('"').trim().to_string();
  if answer.is_empty() {
    return Ok(None);
  }
  Ok(Some(answer))
}

/// Prompt for a path to an existing file.
///
/// With `allow_empty`, pressing Enter yields `None` (the caller treats
/// that as "skip"). Otherwise the prompt loops until a valid file path
/// is entered. Paths that do not name an existing file re-prompt.
pub fn prompt_file_path<I: BufRead>(
  input: &mut I,
  question: &str,
  allow_empty: bool,
) -> WizardResult<Option<PathBuf>> {
  loop {
    show(question)?;
    let answer = read_line(input)?;
    let answer = answer.trim_matches('"').trim();
    if answer.is_empty() {
      if allow_empty {
        return Ok(None);
      }
      println!("Please enter a path or press Enter to cancel.");
      continue;
    }
    let path = PathBuf::from(answer);
    if path.is_file() {
      return Ok(Some(path));
    }
    println!("Path not found or not a file. Try again.");
  }
}
