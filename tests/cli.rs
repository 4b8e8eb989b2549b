use std::io::Write;
use assert_cmd::Command;

use predicates::prelude::*;

fn bot() -> Command {
    let mut cmd = Command::cargo_bin("tricard-bot").expect("binary exists");
    cmd.arg("--seed").arg("7");
    cmd
}

#[test]
fn answers_one_request_from_stdin() {
    bot()
        .write_stdin(r#"{"your_hole": ["AH", "AD"], "table_card": "AC"}"#)
        .assert()
        .success()
        .stdout(r#"{"action":"RAISE"}"#);
}

#[test]
fn missing_table_card_folds() {
    bot()
        .write_stdin(r#"{"your_hole": ["AH", "AD"], "your_points": 10}"#)
        .assert()
        .success()
        .stdout(r#"{"action":"FOLD"}"#);
}

#[test]
fn garbage_input_still_gets_a_response() {
    bot()
        .write_stdin("not json at all")
        .assert()
        .success()
        .stdout(r#"{"action":"FOLD"}"#);
}

#[test]
fn empty_input_folds() {
    bot()
        .write_stdin("")
        .assert()
        .success()
        .stdout(r#"{"action":"FOLD"}"#);
}

#[test]
fn explain_writes_breakdown_to_stderr_only() {
    bot()
        .arg("--explain")
        .arg("--no-color")
        .write_stdin(r#"{"your_hole": ["AH", "AD"], "table_card": "AC"}"#)
        .assert()
        .success()
        .stdout(r#"{"action":"RAISE"}"#)
        .stderr(
            predicate::str::contains("Cards AH AD AC")
                .and(predicate::str::contains("three of a kind"))
                .and(predicate::str::contains("1174W/0T/2L")),
        );
}

#[test]
fn coloured_explain_shows_suit_glyphs() {
    bot()
        .arg("--explain")
        .write_stdin(r#"{"your_hole": ["AH", "AD"], "table_card": "AC"}"#)
        .assert()
        .success()
        .stdout(r#"{"action":"RAISE"}"#)
        .stderr(predicate::str::contains("A♥ A♦ A♣"));
}

#[test]
fn reads_request_and_config_from_files() {
    let mut request = tempfile::NamedTempFile::new().expect("temp request");
    write!(request, r#"{{"your_hole": ["2C", "7D"], "table_card": "9S"}}"#).unwrap();

    // A call threshold above 1 makes every non-raise a fold.
    let mut config = tempfile::NamedTempFile::new().expect("temp config");
    write!(config, r#"{{"policy": {{"raise_threshold": 2.0, "call_threshold": 2.0}}}}"#).unwrap();

    bot()
        .arg("--input")
        .arg(request.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(r#"{"action":"FOLD"}"#);
}

#[test]
fn unreadable_config_is_an_operator_error() {
    bot()
        .arg("--config")
        .arg("/definitely/not/here.json")
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading config"));
}
