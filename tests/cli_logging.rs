use predicates::prelude::*;

#[test]
fn rust_log_debug_emits_debug_line_to_stderr() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("scrapbook-posts");
    cmd.env("RUST_LOG", "debug")
        .current_dir(temp.path())
        .args(["check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parsed cli"));
    Ok(())
}

#[test]
fn missing_subcommand_is_rejected() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("scrapbook-posts");
    cmd.assert().failure();
}
