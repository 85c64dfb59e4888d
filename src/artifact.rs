//! Shaded JAR discovery in the build output directory

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Suffix identifying a shaded (dependency-bundling) build artifact
const SHADED_SUFFIX: &str = "-shaded.jar";

/// Find the most recently modified `*-shaded.jar` in a directory.
///
/// Non-recursive; directories and unreadable entries are skipped.
/// Returns `None` when the directory is missing, unreadable, or holds
/// no matching file.
pub fn newest_shaded_jar(target_dir: &Path) -> Option<PathBuf> {
  let entries = std::fs::read_dir(target_dir).ok()?;

  let mut newest: Option<(SystemTime, PathBuf)> = None;
  for entry in entries.flatten() {
    let path = entry.path();
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
      continue;
    };
    if !name.ends_with(SHADED_SUFFIX) || !path.is_file() {
      continue;
    }
    let Ok(modified) = entry.metadata().and_then(|m| m.modified()) else {
      continue;
    };
    match &newest {
      Some((best, _)) if *best >= modified => {}
      _ => newest = Some((modified, path)),
    }
  }

  newest.map(|(_, path)| path)
}
