use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn splitbill() -> Command {
    let mut cmd = Command::cargo_bin("splitbill").unwrap();
    cmd.env_remove("SPLITBILL_CONFIG");
    cmd
}

#[test]
fn friends_lists_default_roster() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("absent.toml");

    splitbill()
        .arg("--config")
        .arg(&config)
        .arg("friends")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clark"))
        .stdout(predicate::str::contains("You and Sarah are even"))
        .stdout(predicate::str::contains("Anthony"));
}

#[test]
fn friends_reads_configured_balances() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        r#"
[[friends]]
id = "1"
name = "Nina"
balance = 60.0

[[friends]]
id = "2"
name = "Omar"
balance = -7.5
"#,
    )
    .unwrap();

    splitbill()
        .arg("--config")
        .arg(&config)
        .arg("friends")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nina owes you $60"))
        .stdout(predicate::str::contains("You owe Omar $7.5"));
}

#[test]
fn friends_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("absent.toml");

    let output = splitbill()
        .arg("--config")
        .arg(&config)
        .args(["friends", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let friends: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let friends = friends.as_array().unwrap();
    assert_eq!(friends.len(), 3);
    assert_eq!(friends[0]["id"], "118836");
    assert_eq!(friends[0]["name"], "Clark");
    assert_eq!(friends[0]["balance"], 0.0);
}

#[test]
fn config_path_echoes_override() {
    splitbill()
        .args(["config", "path", "--config", "/tmp/splitbill-test.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("splitbill-test.toml"));
}

#[test]
fn config_show_prints_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("absent.toml");

    splitbill()
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("avatar_base_url = \"https://i.pravatar.cc/48\""))
        .stdout(predicate::str::contains("tick_rate_ms = 250"));
}

#[test]
fn invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "avatar_base_url = \"nope\"\n").unwrap();

    splitbill()
        .arg("--config")
        .arg(&config)
        .arg("friends")
        .assert()
        .failure()
        .stderr(predicate::str::contains("avatar_base_url"));
}
