use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_directory_is_fatal() -> Result<()> {
    let mut cmd = Command::cargo_bin("scour-cli")?;
    cmd.arg("hello").args(["-d", "/no/such/dir"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("/no/such/dir"));
    Ok(())
}

#[test]
fn test_empty_query_is_rejected() -> Result<()> {
    let dir = tempdir()?;
    let mut cmd = Command::cargo_bin("scour-cli")?;
    cmd.arg("").arg("-d").arg(dir.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
    Ok(())
}

#[test]
fn test_reports_matches_and_exits_zero() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.txt"), "Hello World\nfoo\n")?;
    fs::write(dir.path().join("b.txt"), "BAR\nhello again\n")?;

    let mut cmd = Command::cargo_bin("scour-cli")?;
    cmd.arg("hello").arg("-d").arg(dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Files scanned: 2"))
        .stdout(predicate::str::contains("Hello World"))
        .stdout(predicate::str::contains("hello again"))
        .stdout(predicate::str::contains("BAR").not());
    Ok(())
}

#[test]
fn test_zero_matches_is_success() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.txt"), "nothing here\n")?;

    let mut cmd = Command::cargo_bin("scour-cli")?;
    cmd.arg("zebra").arg("-d").arg(dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No matches found for \"zebra\""));
    Ok(())
}

#[test]
fn test_stats_flag_suppresses_listing() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.txt"), "Hello World\n")?;

    let mut cmd = Command::cargo_bin("scour-cli")?;
    cmd.arg("hello").arg("-d").arg(dir.path()).arg("--stats");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 1 matching lines in 1 files"))
        .stdout(predicate::str::contains("Hello World").not());
    Ok(())
}

#[test]
fn test_extension_filter() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("keep.rs"), "// hello from rust\n")?;
    fs::write(dir.path().join("skip.txt"), "hello from text\n")?;

    let mut cmd = Command::cargo_bin("scour-cli")?;
    cmd.arg("hello")
        .arg("-d")
        .arg(dir.path())
        .args(["-e", "rs"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Files scanned: 1"))
        .stdout(predicate::str::contains("keep.rs"))
        .stdout(predicate::str::contains("skip.txt").not());
    Ok(())
}
