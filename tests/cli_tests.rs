use assert_cmd::Command;
use std::fs;

fn ordo() -> Command {
    Command::cargo_bin("ordo").unwrap()
}

#[test]
fn analyze_reads_from_stdin() {
    let output = ordo()
        .args(["analyze", "-f", "text"])
        .write_stdin("for (int i = 0; i < n; i++) {\n}\n")
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Time complexity: O(n)"));
}

#[test]
fn analyze_reads_a_file_and_emits_json() {
    let dir = tempfile::tempdir().unwrap();
    let snippet = dir.path().join("snippet.c");
    fs::write(
        &snippet,
        "int* p = new int[n];\nfor (int i = 0; i < n; i++) {\n}\n",
    )
    .unwrap();

    let output = ordo()
        .args(["analyze", snippet.to_str().unwrap(), "-f", "json"])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(value["analysis"]["time_complexity"], "Linear");
    assert_eq!(value["analysis"]["space_complexity"], "Linear");
}

#[test]
fn analyze_writes_markdown_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let snippet = dir.path().join("snippet.c");
    let report = dir.path().join("report.md");
    fs::write(&snippet, "int x = 0;\n").unwrap();

    ordo()
        .args([
            "analyze",
            snippet.to_str().unwrap(),
            "-f",
            "markdown",
            "-o",
            report.to_str().unwrap(),
        ])
        .assert()
        .success();

    let rendered = fs::read_to_string(&report).unwrap();
    assert!(rendered.starts_with("# Ordo Complexity Report"));
}

#[test]
fn analyze_fails_cleanly_on_missing_file() {
    ordo()
        .args(["analyze", "no/such/file.c"])
        .assert()
        .failure();
}

#[test]
fn analyze_honors_config_keyword_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        r#"
[keywords]
loops = ["repeat"]
"#,
    )
    .unwrap();

    let output = ordo()
        .args(["analyze", "-f", "text", "--config", config.to_str().unwrap()])
        .write_stdin("repeat (n) {\n}\n")
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Time complexity: O(n)"));
}

#[test]
fn init_creates_config_once() {
    let dir = tempfile::tempdir().unwrap();

    ordo().arg("init").current_dir(dir.path()).assert().success();
    assert!(dir.path().join(".ordo.toml").exists());

    // A second init without --force refuses to clobber.
    ordo().arg("init").current_dir(dir.path()).assert().failure();
    ordo()
        .args(["init", "--force"])
        .current_dir(dir.path())
        .assert()
        .success();
}

#[test]
fn generated_config_parses_back() {
    let dir = tempfile::tempdir().unwrap();
    ordo().arg("init").current_dir(dir.path()).assert().success();

    let contents = fs::read_to_string(dir.path().join(".ordo.toml")).unwrap();
    let config = ordo::parse_config(&contents).unwrap();
    assert_eq!(config, ordo::OrdoConfig::default());
}
