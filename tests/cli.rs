use assert_cmd::Command;
use predicates::prelude::*;

fn fincalc() -> Command {
    let mut cmd = Command::cargo_bin("fincalc").unwrap();
    cmd.arg("--no-color");
    cmd
}

#[test]
fn exit_from_main_menu_succeeds() {
    fincalc()
        .write_stdin("n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Financial Calculator!"))
        .stdout(predicate::str::contains(
            "Thank you for using the Financial Calculator!",
        ));
}

#[test]
fn future_value_session() {
    fincalc()
        .write_stdin("n\n1\n1\n1000\n0.05\n10\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Future Value: 1628.89"));
}

#[test]
fn invalid_rate_is_asked_again() {
    fincalc()
        .write_stdin("n\n3\nabc\n0.05\n10\n1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input for rate. Please enter a valid number.",
        ))
        .stdout(predicate::str::contains("Present Value: 200.00"));
}

#[test]
fn learning_flag_skips_question() {
    fincalc()
        .arg("--learn")
        .write_stdin("4\n1\n0.12\n12\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enable learning mode?").not())
        .stdout(predicate::str::contains("Formula: EAR = (1 + APR/m)^m - 1"))
        .stdout(predicate::str::contains("EAR: 0.1268 (12.68%)"));
}

#[test]
fn closed_stdin_exits_cleanly() {
    fincalc().write_stdin("").assert().success();
}

#[test]
fn compute_annuity_pv_text() {
    fincalc()
        .args([
            "compute", "annuity-pv", "--rate", "0.06", "--periods", "5", "--payment", "1000",
        ])
        .assert()
        .success()
        .stdout("Present Value: 4212.36\n");
}

#[test]
fn compute_json_output() {
    fincalc()
        .args(["compute", "perpetuity-pv", "--rate", "0.05", "--payment", "10"])
        .args(["--timing", "advance", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"operation\":\"perpetuity_pv\""))
        .stdout(predicate::str::contains("\"kind\":\"amount\""));
}

#[test]
fn compute_accepts_negative_rates() {
    fincalc()
        .args(["compute", "future-value", "--pv", "100", "--rate", "-0.5", "-n", "1"])
        .assert()
        .success()
        .stdout("Future Value: 50.00\n");
}

#[test]
fn compute_rejects_unknown_timing() {
    fincalc()
        .args(["compute", "annuity-fv", "-r", "0.05", "-n", "3", "-p", "100"])
        .args(["--timing", "advance"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown annuity timing"));
}

#[test]
fn compute_domain_error_fails() {
    fincalc()
        .args(["compute", "perpetuity-pv", "--rate", "0", "--payment", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rate must not be zero"));
}

#[test]
fn formulas_reference_sheet() {
    fincalc()
        .arg("formulas")
        .assert()
        .success()
        .stdout(predicate::str::contains("Formula Reference"))
        .stdout(predicate::str::contains("PV = FV / (1 + r)^n"));
}
