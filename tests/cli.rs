//! End-to-end tests for the langfile binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn langfile() -> Command {
    Command::cargo_bin("langfile").expect("binary to be built")
}

fn lang_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".lang")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write source");
    file
}

#[test]
fn scan_reports_single_token() {
    langfile()
        .args(["scan", "%2$d apples"])
        .assert()
        .success()
        .stdout("format_specifier 0..4 \"%2$d\"\n");
}

#[test]
fn scan_respects_kinds() {
    langfile()
        .args(["scan", "%q", "--kinds", "format_specifier,linebreak"])
        .assert()
        .success()
        .stdout("no match\n");
}

#[test]
fn scan_rejects_unknown_kind() {
    langfile()
        .args(["scan", "x", "--kinds", "emoji"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown token kind 'emoji'"));
}

#[test]
fn tokens_lists_each_token() {
    langfile()
        .args(["tokens", "§lHi :_input_name:"])
        .assert()
        .success()
        .stdout("format_code 0..3 \"§l\"\ntext 3..6 \"Hi \"\ninput_key 6..19 \":_input_name:\"\n");
}

#[test]
fn tokens_raw_keeps_cut_points() {
    langfile()
        .args(["tokens", "--raw", "5% off"])
        .assert()
        .success()
        .stdout("text 0..1 \"5\"\ntext 1..2 \"%\"\ntext 2..6 \" off\"\n");
}

#[test]
fn parse_renders_tags_by_default() {
    let file = lang_file("## Title\ngreeting=Hello %s\n");
    langfile()
        .arg("parse")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("<comment>## Title</comment>"))
        .stdout(predicate::str::contains("<format_specifier>%s</format_specifier>"));
}

#[test]
fn parse_renders_json() {
    let file = lang_file("greeting=Hello\n");
    langfile()
        .args(["parse", "--format", "json"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"key\": \"greeting\""));
}

#[test]
fn parse_uses_config_file() {
    let file = lang_file("k=§a%s\n");
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(config, "[tokenize]\nkinds = [\"text\"]\n\n[output]\nformat = \"yaml\"")
        .expect("write config");

    langfile()
        .arg("parse")
        .arg(file.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("kind: text"))
        .stdout(predicate::str::contains("format_code").not());
}

#[test]
fn parse_reads_single_byte_files() {
    let mut file = tempfile::Builder::new()
        .suffix(".lang")
        .tempfile()
        .expect("temp file");
    file.write_all(b"title=\xa7lCaf\xe9 %s\n").expect("write source");

    langfile()
        .arg("parse")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("<format_code>§l</format_code>"))
        .stdout(predicate::str::contains("<text>Café </text>"))
        .stdout(predicate::str::contains("<format_specifier>%s</format_specifier>"));
}

#[test]
fn parse_reports_line_errors() {
    let file = lang_file("a=1\nbroken\n");
    langfile()
        .arg("parse")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn parse_reports_missing_file() {
    langfile()
        .args(["parse", "/nonexistent/file.lang"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read /nonexistent/file.lang"));
}
