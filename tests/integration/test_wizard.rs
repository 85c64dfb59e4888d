//! End-to-end scenarios for the interactive release flow

use crate::helpers::{TestProject, run_wizard};
use anyhow::Result;

#[test]
fn test_decline_bump_and_upload_pushes_and_tags() -> Result<()> {
  let project = TestProject::new("1.0.0")?;
  project.stub_git()?;
  project.stub_mvn("1.0.0")?;

  // bump? n | push? <yes> | create tag? <yes> | push tag? <yes> | upload? n
  let output = run_wizard(&project, "n\n\n\n\nn\n")?;
  assert!(output.status.success(), "wizard should exit 0");

  assert!(project.logged("git push")?);
  assert!(project.logged("git rev-parse -q --verify refs/tags/v1.0.0")?);
  assert!(project.logged("git tag -a v1.0.0 -m Release v1.0.0")?);
  assert!(project.logged("git push origin v1.0.0")?);

  assert!(!project.logged("mvn -q -DskipTests package")?, "no build should run");
  assert!(!project.logged("gh")?, "no upload should run");
  Ok(())
}

#[test]
fn test_bump_commits_with_generated_message_and_tags_new_version() -> Result<()> {
  let project = TestProject::new("1.0.0")?;
  project.stub_git()?;
  project.stub_mvn("1.0.0")?;

  // bump? y | 2.0.0 | commit? <yes> | push? <yes> | tag? <yes> | push tag? <yes> | upload? n
  let output = run_wizard(&project, "y\n2.0.0\n\n\n\n\nn\n")?;
  assert!(output.status.success());

  assert!(project.logged("mvn -q versions:set -DnewVersion=2.0.0 -DgenerateBackupPoms=false")?);
  assert!(project.logged("git add pom.xml")?);
  assert!(project.logged("git commit -m Bump version to 2.0.0")?);
  assert!(project.logged("git tag -a v2.0.0 -m Release v2.0.0")?);
  assert!(project.logged("git push origin v2.0.0")?);
  Ok(())
}

#[test]
fn test_missing_gh_with_no_path_skips_upload_and_exits_zero() -> Result<()> {
  let project = TestProject::new("1.0.0")?;
  project.stub_git()?;
  project.stub_mvn("1.0.0")?;
  // No gh stub: the tool is unresolvable

  // bump? n | push? <yes> | tag? <yes> | push tag? <yes> | upload? y | gh path: <empty>
  let output = run_wizard(&project, "n\n\n\n\ny\n\n")?;
  assert!(output.status.success(), "abandoned upload sub-flow still exits 0");

  assert!(project.logged("git tag -a v1.0.0")?, "rest of the wizard already completed");
  assert!(!project.logged("gh")?);
  Ok(())
}

#[test]
fn test_upload_creates_release_with_newest_shaded_jar() -> Result<()> {
  let project = TestProject::new("1.0.0")?;
  project.stub_git()?;
  project.stub_mvn("1.0.0")?;
  project.stub_gh(false)?;
  let jar = project.add_shaded_jar("demo-1.0.0-shaded.jar")?;

  // bump? n | push? <yes> | tag? <yes> | push tag? <yes> | upload? y
  let output = run_wizard(&project, "n\n\n\n\ny\n")?;
  assert!(output.status.success());

  assert!(project.logged("mvn -q -DskipTests package")?);
  assert!(project.logged("gh release view v1.0.0")?);
  assert!(project.logged(&format!(
    "gh release create v1.0.0 {} --title v1.0.0 --notes Automated release",
    jar.display()
  ))?);
  Ok(())
}

#[test]
fn test_upload_replaces_asset_on_existing_release() -> Result<()> {
  let project = TestProject::new("1.0.0")?;
  project.stub_git()?;
  project.stub_mvn("1.0.0")?;
  project.stub_gh(true)?;
  let jar = project.add_shaded_jar("demo-1.0.0-shaded.jar")?;

  let output = run_wizard(&project, "n\n\n\n\ny\n")?;
  assert!(output.status.success());

  assert!(project.logged(&format!("gh release upload v1.0.0 {} --clobber", jar.display()))?);
  assert!(!project.logged("gh release create")?);
  Ok(())
}

#[test]
fn test_missing_git_exits_one() -> Result<()> {
  let project = TestProject::new("1.0.0")?;
  // Only mvn on PATH; git is the fatal one
  project.stub_mvn("1.0.0")?;

  let output = run_wizard(&project, "")?;
  assert_eq!(output.status.code(), Some(1));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("git"), "should name the missing tool, got: {stderr}");
  Ok(())
}

#[test]
fn test_closed_stdin_exits_one() -> Result<()> {
  let project = TestProject::new("1.0.0")?;
  project.stub_git()?;
  project.stub_mvn("1.0.0")?;

  // No answers at all: the first prompt hits EOF
  let output = run_wizard(&project, "")?;
  assert_eq!(output.status.code(), Some(1));
  Ok(())
}

#[test]
fn test_version_read_from_pom_when_mvn_missing() -> Result<()> {
  let project = TestProject::new("3.5.0")?;
  project.stub_git()?;
  // No mvn: the wizard must fall back to pom.xml and skip the bump step

  // push? <yes> | create tag? <yes> | push tag? <yes> | upload? n
  let output = run_wizard(&project, "\n\n\nn\n")?;
  assert!(output.status.success());

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("Current project version: 3.5.0"), "got: {stdout}");
  assert!(project.logged("git tag -a v3.5.0")?);
  assert!(!project.logged("mvn")?);
  Ok(())
}
