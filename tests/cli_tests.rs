//! Integration tests for the scrapey binary
//!
//! Color is disabled through `NO_COLOR` so stdout can be matched literally.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn run_scrapey(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scrapey"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("Failed to execute scrapey")
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_default_config_path() {
    let output = run_scrapey(&[]);

    assert!(
        output.status.success(),
        "scrapey failed with exit code {:?}. stderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Welcome to Scrapey CLI!"));
    assert!(stdout.contains("Loaded config from: configs/default.json"));
    assert!(stdout.contains("Scrapey CLI initialization complete."));
    assert!(stdout.contains("Base URL: https://example.com"));
    assert!(!stdout.contains("Overriding"));
}

#[test]
fn test_missing_config_exits_with_one() {
    let output = run_scrapey(&["--config", "nonexistent.json"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Failed to load config: "));
    assert!(!stdout.contains("initialization complete"));
}

#[test]
fn test_malformed_config_exits_with_one() {
    let file = write_config(r#"{"url": {"base": "http://example.org""#);

    let output = run_scrapey(&["-c", file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_url_override() {
    let output = run_scrapey(&["--config", "configs/default.json", "--url", "https://example.org"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Overriding URL.Base: https://example.org"));
    assert!(stdout.contains("Base URL: https://example.org"));
}

#[test]
fn test_max_depth_flag_beats_file() {
    let file = write_config(r#"{"scrapingOptions": {"maxDepth": 10}}"#);

    let output = run_scrapey(&["-c", file.path().to_str().unwrap(), "--maxDepth", "20"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Overriding ScrapingOptions.MaxDepth: 20"));
}

#[test]
fn test_routes_override() {
    let output = run_scrapey(&["--routes", "/a,/b", "--rateLimit", "0.5"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Overriding URL.Routes: [/a, /b]"));
    assert!(stdout.contains("Overriding ScrapingOptions.RateLimit: 0.5"));
    assert!(stdout.contains("Scraping route: /a"));
    assert!(stdout.contains("Scraping route: /b"));
}

#[test]
fn test_verbose_prints_fields() {
    let output = run_scrapey(&["-v"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ParseRules.Title: title"));
    assert!(stdout.contains("Storage.SavePath: output/"));
}

#[test]
fn test_quiet_by_default() {
    let output = run_scrapey(&["--url", "https://example.org"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("INFO"),
        "Default mode should suppress INFO logs, but stderr contains: {stderr}"
    );
}

#[test]
fn test_negative_numbers_accepted() {
    let output = run_scrapey(&["--maxDepth", "-1", "--rateLimit", "-0.5"]);

    assert!(
        output.status.success(),
        "scrapey failed with exit code {:?}. stderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Overriding ScrapingOptions.MaxDepth: -1"));
    assert!(stdout.contains("Overriding ScrapingOptions.RateLimit: -0.5"));
}

#[test]
fn test_piped_stdout_is_uncolored() {
    let output = Command::new(env!("CARGO_BIN_EXE_scrapey"))
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("Failed to execute scrapey");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Welcome to Scrapey CLI!"));
    assert!(
        !stdout.contains('\x1b'),
        "piped output should carry no escape codes: {stdout:?}"
    );
}
