use assert_cmd::Command;
use predicates::prelude::*;

fn monty_hall() -> Command {
    Command::cargo_bin("monty-hall").unwrap()
}

#[test]
fn no_args_prints_stay_then_switch() {
    monty_hall()
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Won [0-9.]+ % of the time without switch strategy\.\nWon [0-9.]+ % of the time with switch strategy\.\n$",
        )
        .unwrap());
}

#[test]
fn seeded_runs_are_identical() {
    let run = || {
        monty_hall()
            .args(["--seed", "42", "--trials", "2000"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn zero_trials_fails() {
    monty_hall()
        .args(["--trials", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("trials must be greater than zero"));
}

#[test]
fn json_report_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    monty_hall()
        .args(["--seed", "1", "--strategy", "switch", "--format", "json", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(report["seed"], 1);
    assert_eq!(report["outcomes"][0]["strategy"], "switch");
    assert_eq!(report["outcomes"][0]["trials"], 10_000);
}

#[test]
fn config_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sim.json");
    std::fs::write(&path, r#"{"trials": 300, "seed": 9, "strategies": "stay"}"#).unwrap();

    monty_hall()
        .arg("--config")
        .arg(&path)
        .args(["--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| stay | 300 |"));
}

#[test]
fn missing_config_file_fails() {
    monty_hall()
        .args(["--config", "/nonexistent/sim.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
