use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("passmint").unwrap()
}

fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn default_run_emits_one_12_char_password() {
    let assert = cmd().assert().success();
    let stdout = stdout_of(assert);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].chars().count(), 12);
}

#[test]
fn banner_goes_to_stderr() {
    cmd().assert().success().stderr(contains("RESPONSIBLE USE"));
}

#[test]
fn length_and_count_flags() {
    let assert = cmd().args(["-n", "20", "-c", "3"]).assert().success();
    let stdout = stdout_of(assert);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert_eq!(line.chars().count(), 20);
    }
}

#[test]
fn symbols_only_pool() {
    let assert = cmd()
        .args(["--no-lower", "--no-upper", "--no-digits", "--symbols", "-n", "30"])
        .assert()
        .success();
    let stdout = stdout_of(assert);

    let symbols = "!@#$%&*()-_=+[]{};:,.<>?/";
    let password = stdout.lines().next().unwrap();
    assert!(password.chars().all(|c| symbols.contains(c)));
}

#[test]
fn all_classes_disabled_fails() {
    cmd()
        .args(["--no-lower", "--no-upper", "--no-digits"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("no character classes enabled"));
}

#[test]
fn zero_length_rejected() {
    cmd().args(["-n", "0"]).assert().failure();
}

#[test]
fn entropy_flag_adds_text_line() {
    cmd()
        .args(["--entropy"])
        .assert()
        .success()
        .stdout(contains("entropy:"))
        .stdout(contains("bits"));
}

#[test]
fn json_mode_emits_parseable_ndjson() {
    let assert = cmd().args(["--json", "-c", "2"]).assert().success();
    let stdout = stdout_of(assert);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let record: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(record["value"].as_str().unwrap().chars().count(), 12);
        assert!(record["entropy_bits"].is_number());
        assert!(record["strength_label"].is_string());
        assert!(record["breach_count"].is_null());
    }
}

#[test]
fn json_mode_suppresses_text_output() {
    let assert = cmd().args(["--json"]).assert().success();
    let stdout = stdout_of(assert);

    // Every stdout line must be JSON; the bare password line is not.
    for line in stdout.lines() {
        assert!(serde_json::from_str::<serde_json::Value>(line).is_ok());
    }
}

#[test]
fn csv_file_has_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    cmd()
        .args(["-c", "2", "--csv", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("csv written to"));

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "value,entropy_bits,strength_label,breach_count");
}

#[test]
fn csv_dash_writes_to_stdout() {
    let assert = cmd().args(["--csv", "-"]).assert().success();
    let stdout = stdout_of(assert);

    assert!(stdout.contains("value,entropy_bits,strength_label,breach_count"));
    assert!(!stdout.contains("csv written to"));
}

#[test]
fn passphrase_uses_wordlist_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    std::fs::write(&path, "alpha\nbeta\ngamma\n").unwrap();

    let assert = cmd()
        .args(["--passphrase", "--words", "3", "--wordlist", path.to_str().unwrap()])
        .assert()
        .success();
    let stdout = stdout_of(assert);

    let tokens: Vec<&str> = stdout.lines().next().unwrap().split(' ').collect();
    assert_eq!(tokens.len(), 3);
    for token in tokens {
        assert!(["alpha", "beta", "gamma"].contains(&token));
    }
}

#[test]
fn passphrase_default_wordlist() {
    let assert = cmd()
        .args(["--passphrase", "--words", "4"])
        .assert()
        .success();
    let stdout = stdout_of(assert);

    assert_eq!(stdout.lines().next().unwrap().split(' ').count(), 4);
}

#[test]
fn missing_wordlist_file_fails() {
    cmd()
        .args(["--passphrase", "--wordlist", "/nonexistent/words.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("wordlist"));
}
