//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Binary isolated from the user's config and API key
fn shorts_titler_bin(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shorts-titler").expect("binary builds");
    cmd.env_remove("OPENAI_API_KEY")
        .env_remove("OPENAI_BASE_URL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("HOME", config_home.path())
        .env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    shorts_titler_bin(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--model"))
        .stdout(predicate::str::contains("--clipboard"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("models"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    shorts_titler_bin(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shorts-titler"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let home = TempDir::new().unwrap();
    shorts_titler_bin(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shorts-titler"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();
    shorts_titler_bin(&home)
        .args(["config", "set", "model", "gpt-4o"])
        .assert()
        .success();

    shorts_titler_bin(&home)
        .args(["config", "get", "model"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gpt-4o"));
}

#[test]
fn config_get_masks_api_key() {
    let home = TempDir::new().unwrap();
    shorts_titler_bin(&home)
        .args(["config", "set", "api_key", "sk-proj-abcdef123456"])
        .assert()
        .success();

    shorts_titler_bin(&home)
        .args(["config", "get", "api_key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sk-p...3456"))
        .stdout(predicate::str::contains("abcdef").not());
}

#[test]
fn dry_run_prints_prompt_with_text() {
    let home = TempDir::new().unwrap();
    shorts_titler_bin(&home)
        .args(["--dry-run", "Hello world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TRANSCRIPT: \"\"\"\nHello world\n\"\"\""))
        .stdout(predicate::str::contains("# [OUTPUT FORMAT]"));
}

#[test]
fn dry_run_extracts_subtitle_dialogue() {
    let home = TempDir::new().unwrap();
    let expected = "When I was doing TV, we used to get\nfour days for a 12 hour shift.\nNobody tells you this part.\nAnd that changed everything.";

    shorts_titler_bin(&home)
        .args(["--dry-run", "--file", &fixture("sample.srt")])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected))
        .stdout(predicate::str::contains("-->").not())
        .stdout(predicate::str::contains("<i>").not());
}

#[test]
fn dry_run_text_format_keeps_subtitle_markup() {
    let home = TempDir::new().unwrap();
    shorts_titler_bin(&home)
        .args(["--dry-run", "--format", "text", "-f", &fixture("sample.srt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00:01,000 --> 00:00:04,200"));
}

#[test]
fn dry_run_reads_piped_stdin() {
    let home = TempDir::new().unwrap();
    shorts_titler_bin(&home)
        .arg("--dry-run")
        .write_stdin("piped transcript text")
        .assert()
        .success()
        .stdout(predicate::str::contains("piped transcript text"));
}

#[test]
fn empty_transcript_error() {
    let home = TempDir::new().unwrap();
    shorts_titler_bin(&home)
        .args(["--dry-run", "   "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn empty_stdin_is_empty_transcript() {
    let home = TempDir::new().unwrap();
    shorts_titler_bin(&home)
        .arg("--dry-run")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn invalid_utf8_file_error() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.srt");
    std::fs::write(&path, [0x31, 0x0a, 0xff, 0xfe, 0x0a]).unwrap();

    shorts_titler_bin(&home)
        .args(["--dry-run", "--file"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("UTF-8"));
}

#[test]
fn missing_file_is_usage_error() {
    let home = TempDir::new().unwrap();
    shorts_titler_bin(&home)
        .args(["--file", "/nonexistent/transcript.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn blank_model_is_usage_error() {
    let home = TempDir::new().unwrap();
    shorts_titler_bin(&home)
        .args(["--model", " ", "Hello"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid model"));
}

#[test]
fn text_and_file_conflict() {
    let home = TempDir::new().unwrap();
    shorts_titler_bin(&home)
        .args(["Hello", "--file", &fixture("sample.srt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn invalid_format_error() {
    let home = TempDir::new().unwrap();
    shorts_titler_bin(&home)
        .args(["--format", "vtt", "Hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
