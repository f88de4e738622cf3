#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_stub(path: &Path, body: String) {
    fs::write(path, body).unwrap();
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

/// Stub yarn: logs its argv and exits with the code scripted for the
/// requested package script.
fn yarn_stub(dir: &Path, log: &Path, lint: i32, ios: i32, android: i32) -> PathBuf {
    let path = dir.join("yarn");
    write_stub(
        &path,
        format!(
            "#!/bin/sh\n\
             echo \"yarn $*\" >> \"{log}\"\n\
             case \"$2\" in\n\
               lint) exit {lint} ;;\n\
               flow-check-ios) exit {ios} ;;\n\
               flow-check-android) exit {android} ;;\n\
             esac\n\
             exit 0\n",
            log = log.display(),
        ),
    );
    path
}

fn jest_stub(dir: &Path, log: &Path, code: i32) -> PathBuf {
    let path = dir.join("jest");
    write_stub(
        &path,
        format!(
            "#!/bin/sh\necho \"jest $*\" >> \"{log}\"\nexit {code}\n",
            log = log.display(),
        ),
    );
    path
}

fn invocations(log: &Path) -> Vec<String> {
    fs::read_to_string(log)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

fn jsgate(dir: &TempDir, yarn: &Path, jest: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jsgate").unwrap();
    cmd.current_dir(dir.path())
        .arg("--yarnBinary")
        .arg(yarn)
        .arg("--jestBinary")
        .arg(jest);
    cmd
}

#[test]
fn passing_gate_exits_zero_and_runs_steps_in_order() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("invocations.log");
    let yarn = yarn_stub(dir.path(), &log, 0, 0, 0);
    let jest = jest_stub(dir.path(), &log, 0);

    jsgate(&dir, &yarn, &jest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Executing JavaScript tests"));

    let lines = invocations(&log);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "yarn run lint");
    assert_eq!(lines[1], "yarn run flow-check-ios");
    assert_eq!(lines[2], "yarn run flow-check-android");
    assert_eq!(
        lines[3],
        "jest --maxWorkers=1 --ci --reporters=default --reporters=jest-junit"
    );
}

#[test]
fn lint_failure_exits_one_and_skips_later_steps() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("invocations.log");
    let yarn = yarn_stub(dir.path(), &log, 2, 0, 0);
    let jest = jest_stub(dir.path(), &log, 0);

    jsgate(&dir, &yarn, &jest)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(">>>>> Test: eslint"))
        .stdout(predicate::str::contains("Failed to run eslint."));

    assert_eq!(invocations(&log), vec!["yarn run lint"]);
}

#[test]
fn flow_android_failure_skips_jest() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("invocations.log");
    let yarn = yarn_stub(dir.path(), &log, 0, 0, 1);
    let jest = jest_stub(dir.path(), &log, 0);

    jsgate(&dir, &yarn, &jest)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Failed to run flow."));

    let lines = invocations(&log);
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| !l.starts_with("jest")));
}

#[test]
fn jest_failure_reports_broken_code() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("invocations.log");
    let yarn = yarn_stub(dir.path(), &log, 0, 0, 0);
    let jest = jest_stub(dir.path(), &log, 1);

    jsgate(&dir, &yarn, &jest)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Failed to run JavaScript tests."))
        .stdout(predicate::str::contains("Most likely the code is broken."));

    assert_eq!(invocations(&log).len(), 4);
}

#[test]
fn max_workers_flag_is_forwarded_to_jest() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("invocations.log");
    let yarn = yarn_stub(dir.path(), &log, 0, 0, 0);
    let jest = jest_stub(dir.path(), &log, 0);

    jsgate(&dir, &yarn, &jest)
        .arg("--maxWorkers=4")
        .assert()
        .success();

    let lines = invocations(&log);
    assert!(lines[3].contains("--maxWorkers=4"));
}

#[test]
fn jest_binary_override_is_invoked() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("invocations.log");
    let yarn = yarn_stub(dir.path(), &log, 0, 0, 0);

    let custom_dir = dir.path().join("custom");
    fs::create_dir(&custom_dir).unwrap();
    let custom_jest = jest_stub(&custom_dir, &log, 0);

    jsgate(&dir, &yarn, &custom_jest).assert().success();

    let lines = invocations(&log);
    assert_eq!(lines.len(), 4);
    assert!(lines[3].starts_with("jest --maxWorkers=1"));
}

#[test]
fn config_file_supplies_defaults_and_cli_overrides_win() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("invocations.log");
    let yarn = yarn_stub(dir.path(), &log, 0, 0, 0);
    let jest = jest_stub(dir.path(), &log, 0);

    let config = dir.path().join("jsgate.yaml");
    fs::write(
        &config,
        format!(
            "max_workers: 3\nyarn_binary: {}\njest_binary: {}\n",
            yarn.display(),
            jest.display()
        ),
    )
    .unwrap();

    Command::cargo_bin("jsgate")
        .unwrap()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert!(invocations(&log)[3].contains("--maxWorkers=3"));

    fs::remove_file(&log).unwrap();

    Command::cargo_bin("jsgate")
        .unwrap()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("--maxWorkers=5")
        .assert()
        .success();

    assert!(invocations(&log)[3].contains("--maxWorkers=5"));
}

#[test]
fn dry_run_executes_nothing() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("invocations.log");
    let yarn = yarn_stub(dir.path(), &log, 0, 0, 0);
    let jest = jest_stub(dir.path(), &log, 0);

    jsgate(&dir, &yarn, &jest)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gate Plan"))
        .stdout(predicate::str::contains("yarn run lint"));

    assert!(!log.exists());
}

#[test]
fn zero_workers_are_rejected() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("invocations.log");
    let yarn = yarn_stub(dir.path(), &log, 0, 0, 0);
    let jest = jest_stub(dir.path(), &log, 0);

    jsgate(&dir, &yarn, &jest)
        .arg("--maxWorkers=0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("maxWorkers must be at least 1"));

    assert!(!log.exists());
}
