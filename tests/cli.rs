use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cmd() -> Command {
    cargo_bin_cmd!("contrast-rules")
}

#[test]
fn check_passing_pair_succeeds() {
    cmd()
        .args(["check", "#000000", "#ffffff", "--level", "aaa"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "#ffffff on #000000: ratio 21:1 passes WCAG AAA (requires 7:1)",
        ));
}

#[test]
fn check_failing_pair_exits_nonzero() {
    cmd()
        .args(["check", "#777777", "#ffffff", "--level", "aaa"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "#ffffff on #777777: ratio 4.48:1 fails WCAG AAA (requires 7:1)",
        ));
}

#[test]
fn check_defaults_to_aa() {
    cmd()
        .args(["check", "#767676", "#ffffff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passes WCAG AA (requires 4.5:1)"));
}

#[test]
fn check_invalid_color_reports_error() {
    cmd()
        .args(["check", "#zzzzzz", "#ffffff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid color format"))
        .stderr(predicate::str::contains("#zzzzzz"));
}

#[test]
fn check_json_output() {
    cmd()
        .args(["check", "#000000", "#ffffff", "--level", "aaa", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"requiredRatio\": 7.0"))
        .stdout(predicate::str::contains("\"passes\": true"));
}

#[test]
fn check_rejects_unknown_level_flag() {
    cmd()
        .args(["check", "#000000", "#ffffff", "--level", "xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn batch_from_stdin_passes() {
    cmd()
        .args(["batch", "-"])
        .write_stdin(r##"[{"background":"#ffffff","text":"#000000"}]"##)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Checked 1 pair(s): 0 violation(s), 1 passed, 0 invalid",
        ));
}

#[test]
fn batch_with_violation_exits_nonzero() {
    cmd()
        .args(["batch", "-", "--level", "aaa"])
        .write_stdin(r##"[{"background":"#777777","text":"#ffffff"}]"##)
        .assert()
        .failure()
        .stdout(predicate::str::contains("1 violation(s)"))
        .stdout(predicate::str::contains("#ffffff on #777777"));
}

#[test]
fn batch_entry_level_overrides_flag() {
    // 4.54:1 clears the AA flag default but the entry demands AAA.
    cmd()
        .args(["batch", "-"])
        .write_stdin(r##"[{"background":"#767676","text":"#ffffff","level":"AAA"}]"##)
        .assert()
        .failure()
        .stdout(predicate::str::contains("fails WCAG AAA"));
}

#[test]
fn batch_unknown_level_label_falls_back_to_aa() {
    // The same pair fails AAA, so a rejected label would flip the outcome.
    cmd()
        .args(["batch", "-"])
        .write_stdin(r##"[{"background":"#767676","text":"#ffffff","level":"XYZ"}]"##)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 passed"));
}

#[test]
fn batch_invalid_entry_is_reported_and_fails() {
    cmd()
        .args(["batch", "-"])
        .write_stdin(r##"[{"background":"#12","text":"#ffffff"},{"background":"#000000","text":"#ffffff"}]"##)
        .assert()
        .failure()
        .stdout(predicate::str::contains("1 invalid"))
        .stdout(predicate::str::contains("--- Invalid entries ---"));
}

#[test]
fn batch_json_output() {
    cmd()
        .args(["batch", "-", "--format", "json"])
        .write_stdin(r##"[{"background":"#ffffff","text":"#cccccc"}]"##)
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"violations\""))
        .stdout(predicate::str::contains("\"text\": \"#cccccc\""));
}
