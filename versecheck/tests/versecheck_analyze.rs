use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::predicate;

// Nothing listens on the discard port, so any attempt to reach this endpoint
// fails immediately. Tests that must not touch the network still point at it
// to prove the exchange never started.
const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:9/analyze";

fn versecheck(work_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("versecheck").unwrap();
    cmd.env_remove("VERSECHECK_ENDPOINT");
    cmd.env_remove("VERSECHECK_RUN_ID");
    cmd.args([
        "--progress",
        "plain",
        "--endpoint",
        UNREACHABLE_ENDPOINT,
        "-C",
        &work_dir.path().display().to_string(),
    ]);
    cmd
}

#[test]
fn whitespace_only_lyrics_fail_validation_without_a_network_call() {
    let work_dir = TempDir::new().unwrap();

    versecheck(&work_dir)
        .arg("analyze")
        .write_stdin("   \n\t  ")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("empty after trimming"));
}

#[test]
fn an_unreachable_endpoint_is_a_transport_failure() {
    let work_dir = TempDir::new().unwrap();

    versecheck(&work_dir)
        .args(["analyze", "--sample"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("unable to reach the analysis endpoint"));
}

#[test]
fn transport_failure_leaves_no_report_behind() {
    let work_dir = TempDir::new().unwrap();

    versecheck(&work_dir)
        .args(["analyze", "--sample", "--run-id", "fail-run"])
        .assert()
        .code(3);

    let leftover = work_dir.path().join("versecheck-report-fail-run.html");
    assert!(!leftover.exists());
}

#[test]
fn lyrics_from_a_missing_file_are_a_critical_error() {
    let work_dir = TempDir::new().unwrap();

    versecheck(&work_dir)
        .args(["analyze", "no-such-lyrics.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no-such-lyrics.txt"));
}
