use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rparse(dir: &Path) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("rparse").into();
    cmd.current_dir(dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a resume into a fresh tempdir. The guard must be kept alive.
fn resume_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(name);
    fs::write(&path, content).unwrap();
    (tmp, path)
}

fn parse_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).unwrap()
}

const RESUME: &str = "Jane Doe\r\n\
Backend Developer | jane.doe@example.com | +1 415-555-0132\r\n\
https://github.com/janedoe\r\n\
Skills: Rust, Go, PostgreSQL, Kafka\r\n\
Education: Master of Science, 2017\r\n\
experience: 8 years\r\n";

// --- Binary startup ---

#[test]
fn binary_runs() {
    let mut cmd: Command = cargo_bin_cmd!("rparse").into();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("rparse"));
}

// --- Parse ---

#[test]
fn parse_prints_record() {
    let (tmp, path) = resume_file("jane.txt", RESUME);
    let out = rparse(tmp.path())
        .arg("parse")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = parse_json(&out);
    assert_eq!(json["name"], "Jane Doe");
    assert_eq!(json["emails"], serde_json::json!(["jane.doe@example.com"]));
    assert_eq!(json["phones"], serde_json::json!(["+1 415-555-0132"]));
    assert_eq!(json["links"], serde_json::json!(["https://github.com/janedoe"]));
    assert_eq!(
        json["skills"],
        serde_json::json!(["Go", "Kafka", "PostgreSQL", "Rust"])
    );
    assert_eq!(json["experience_years"], 8);
    assert_eq!(json["title_hints"], serde_json::json!(["Developer"]));
    assert_eq!(json["education_snippets"].as_array().unwrap().len(), 1);
    assert!(!json["summary_text_preview"]
        .as_str()
        .unwrap()
        .contains('\r'));
}

#[test]
fn parse_compact_is_single_line() {
    let (tmp, path) = resume_file("jane.txt", RESUME);
    rparse(tmp.path())
        .args(["parse", "--compact"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\{.*\}\n$").unwrap());
}

#[test]
fn parse_with_meta() {
    let (tmp, path) = resume_file("jane.txt", RESUME);
    let out = rparse(tmp.path())
        .args(["parse", "--with-meta"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = parse_json(&out);
    assert_eq!(json["file"]["filename"], "jane.txt");
    assert_eq!(json["file"]["size"], RESUME.len());
    assert_eq!(json["format"], "plain_text");
    assert_eq!(json["text_found"], true);
    assert_eq!(json["record"]["name"], "Jane Doe");
}

#[test]
fn parse_multiple_files_prints_array() {
    let (tmp, first) = resume_file("a.txt", RESUME);
    let second = tmp.path().join("b.md");
    fs::write(&second, "# Bob Stone\n3+ years of experience").unwrap();

    let out = rparse(tmp.path())
        .arg("parse")
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = parse_json(&out);
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["experience_years"], 3);
}

#[test]
fn parse_writes_output_file() {
    let (tmp, path) = resume_file("jane.txt", RESUME);
    let dest = tmp.path().join("parsed_resume.json");

    rparse(tmp.path())
        .arg("parse")
        .arg(&path)
        .arg("--output")
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Wrote:"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&dest).unwrap()).unwrap();
    assert_eq!(json["name"], "Jane Doe");
}

#[test]
fn parse_show_text_echoes_to_stderr() {
    let (tmp, path) = resume_file("jane.txt", RESUME);
    rparse(tmp.path())
        .args(["parse", "--show-text"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Backend Developer"))
        .stderr(predicate::str::contains("File: jane.txt"));
}

#[test]
fn parse_unsupported_format_gives_empty_record() {
    let (tmp, path) = resume_file("jane.pdf", "%PDF-1.7 binary");
    let out = rparse(tmp.path())
        .arg("parse")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = parse_json(&out);
    assert!(json["name"].is_null());
    assert!(json["experience_years"].is_null());
    assert_eq!(json["skills"], serde_json::json!([]));
    assert_eq!(json["summary_text_preview"], "");
}

#[test]
fn parse_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    rparse(tmp.path())
        .args(["parse", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn parse_requires_paths() {
    let tmp = TempDir::new().unwrap();
    rparse(tmp.path()).arg("parse").assert().failure();
}

// --- Lexicon ---

#[test]
fn custom_lexicon_replaces_skills() {
    let (tmp, path) = resume_file("jane.txt", RESUME);
    let lexicon = tmp.path().join("lexicon.json");
    fs::write(&lexicon, r#"{"skills": ["Kafka", "Zig"]}"#).unwrap();

    let out = rparse(tmp.path())
        .arg("--lexicon")
        .arg(&lexicon)
        .arg("parse")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(parse_json(&out)["skills"], serde_json::json!(["Kafka"]));
}

#[test]
fn invalid_lexicon_fails() {
    let (tmp, path) = resume_file("jane.txt", RESUME);
    let lexicon = tmp.path().join("lexicon.json");
    fs::write(&lexicon, "not json").unwrap();

    rparse(tmp.path())
        .arg("--lexicon")
        .arg(&lexicon)
        .arg("parse")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load lexicon"));
}

// --- Snippet cap via environment ---

#[test]
fn snippet_cap_from_env() {
    let content: String = (0..15).map(|i| format!("Diploma course {i}\n")).collect();
    let (tmp, path) = resume_file("many.txt", &content);

    let out = rparse(tmp.path())
        .arg("parse")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(parse_json(&out)["education_snippets"].as_array().unwrap().len(), 10);

    let out = rparse(tmp.path())
        .env("RESUMEPARSE_SNIPPET_CAP", "4")
        .arg("parse")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(parse_json(&out)["education_snippets"].as_array().unwrap().len(), 4);
}

// --- Sample ---

#[test]
fn sample_parses_bundled_resume() {
    let tmp = TempDir::new().unwrap();
    let out = rparse(tmp.path())
        .arg("sample")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = parse_json(&out);
    assert_eq!(json["name"], "Priya Sharma");
    assert_eq!(json["experience_years"], 6);
    assert_eq!(json["emails"], serde_json::json!(["priya.sharma@example.com"]));
    assert_eq!(json["phones"], serde_json::json!(["+91 98765 43210"]));
    assert_eq!(json["title_hints"], serde_json::json!(["Engineer", "Scientist"]));
    assert_eq!(json["education_snippets"].as_array().unwrap().len(), 2);
}

// --- Check ---

#[test]
fn check_reports_found() {
    let (tmp, path) = resume_file("jane.txt", RESUME);
    rparse(tmp.path())
        .args(["check"])
        .arg(&path)
        .arg("postgresql")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found: postgresql"));
}

#[test]
fn check_reports_not_found() {
    let (tmp, path) = resume_file("jane.txt", RESUME);
    rparse(tmp.path())
        .args(["check"])
        .arg(&path)
        .arg("Post")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not found"));
}

// --- Vocab ---

#[test]
fn vocab_lists_titles() {
    let tmp = TempDir::new().unwrap();
    rparse(tmp.path())
        .args(["vocab", "titles"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Engineer\nDeveloper\n"));
}

#[test]
fn vocab_rejects_unknown_kind() {
    let tmp = TempDir::new().unwrap();
    rparse(tmp.path()).args(["vocab", "hobbies"]).assert().failure();
}
