use std::path::Path;
use std::process::{Command, Output};

fn tally(db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tally"))
        .arg("--no-bell")
        .arg("--db")
        .arg(db)
        .args(args)
        .env_remove("TALLY_LOG_DIR")
        .env_remove("TALLY_LOG_LEVEL")
        .output()
        .expect("run tally binary")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "tally failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn fresh_store_shows_zero() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("tally.sqlite3");

    let text = stdout(&tally(&db, &["show"]));

    assert_eq!(text.trim(), "[ - ]  0  [ + ]  [ Reset ]  [ Sound: on ]");
}

#[test]
fn count_persists_between_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("tally.sqlite3");

    stdout(&tally(&db, &["inc"]));
    stdout(&tally(&db, &["inc"]));
    stdout(&tally(&db, &["inc"]));
    stdout(&tally(&db, &["toggle-sound"]));

    let json: serde_json::Value =
        serde_json::from_str(&stdout(&tally(&db, &["show", "--json"]))).unwrap();
    assert_eq!(json["display"], "3");
    assert_eq!(json["sound_enabled"], false);
}

#[test]
fn decrement_never_goes_below_zero() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("tally.sqlite3");

    let text = stdout(&tally(&db, &["dec"]));

    assert!(text.contains("  0  "), "unexpected output: {text}");
}

#[test]
fn interactive_mode_reads_actions_from_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("tally.sqlite3");

    let mut child = Command::new(env!("CARGO_BIN_EXE_tally"))
        .args(["--no-bell", "--db"])
        .arg(&db)
        .arg("interactive")
        .env_remove("TALLY_LOG_DIR")
        .env_remove("TALLY_LOG_LEVEL")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn tally");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"+\n+\nr\n+\nq\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success());

    let text = stdout(&tally(&db, &["show"]));
    assert!(text.contains("  1  "), "unexpected output: {text}");
}
