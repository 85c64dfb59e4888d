//! Test helpers: temp projects with stub external tools

use anyhow::{Context, Result};
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// A temp project with a pom.xml, a target/ directory, and a private
/// bin/ directory of stub tools that log every invocation
pub struct TestProject {
  _root: TempDir,
  pub path: PathBuf,
  pub bin: PathBuf,
  log: PathBuf,
}

impl TestProject {
  pub fn new(version: &str) -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().join("project");
    let bin = root.path().join("bin");
    let log = root.path().join("tools.log");
    std::fs::create_dir_all(&path)?;
    std::fs::create_dir_all(path.join("target"))?;
    std::fs::create_dir_all(&bin)?;
    std::fs::write(&log, "")?;

    std::fs::write(
      path.join("pom.xml"),
      format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>com.example</groupId>
  <artifactId>demo</artifactId>
  <version>{}</version>
</project>
"#,
        version
      ),
    )?;

    Ok(Self {
      _root: root,
      path,
      bin,
      log,
    })
  }

  /// Install a stub shell script under bin/ that appends its argv to
  /// the shared log before running `body`
  pub fn stub_tool(&self, name: &str, body: &str) -> Result<()> {
    let script = format!(
      "#!/bin/sh\necho \"{} $@\" >> \"{}\"\n{}\n",
      name,
      self.log.display(),
      body
    );
    let path = self.bin.join(name);
    std::fs::write(&path, script)?;
    let mut perms = std::fs::metadata(&path)?.permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms)?;
    Ok(())
  }

  /// git stub: every command succeeds except rev-parse (tag absent)
  pub fn stub_git(&self) -> Result<()> {
    self.stub_tool(
      "git",
      r#"case "$1" in
  rev-parse) exit 1 ;;
esac
exit 0"#,
    )
  }

  /// mvn stub: help:evaluate prints the version, everything succeeds
  pub fn stub_mvn(&self, version: &str) -> Result<()> {
    self.stub_tool(
      "mvn",
      &format!(
        r#"case "$*" in
  *help:evaluate*) echo "{}" ;;
esac
exit 0"#,
        version
      ),
    )
  }

  /// gh stub: `release view` reports existence, everything else succeeds
  pub fn stub_gh(&self, release_exists: bool) -> Result<()> {
    let view_exit = if release_exists { 0 } else { 1 };
    self.stub_tool(
      "gh",
      &format!(
        r#"case "$*" in
  "release view"*) exit {} ;;
esac
exit 0"#,
        view_exit
      ),
    )
  }

  /// Place a shaded JAR in target/
  pub fn add_shaded_jar(&self, name: &str) -> Result<PathBuf> {
    let path = self.path.join("target").join(name);
    std::fs::write(&path, b"jar")?;
    Ok(path)
  }

  /// Recorded tool invocations, one command line per entry
  pub fn tool_log(&self) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(&self.log)?;
    Ok(content.lines().map(|l| l.trim().to_string()).collect())
  }

  pub fn logged(&self, prefix: &str) -> Result<bool> {
    Ok(self.tool_log()?.iter().any(|l| l.starts_with(prefix)))
  }
}

/// Run the wizard binary in the project with only the stub bin/ on
/// PATH, feeding the scripted answers over stdin
pub fn run_wizard(project: &TestProject, input: &str) -> Result<Output> {
  let wizard_bin = env!("CARGO_BIN_EXE_release-wizard");

  let mut child = Command::new(wizard_bin)
    .current_dir(&project.path)
    .env("PATH", &project.bin)
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .context("Failed to spawn release-wizard")?;

  child
    .stdin
    .as_mut()
    .context("Failed to open wizard stdin")?
    .write_all(input.as_bytes())?;

  child.wait_with_output().context("Failed to wait for release-wizard")
}
