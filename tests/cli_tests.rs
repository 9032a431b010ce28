use assert_cmd::Command;
use predicates::prelude::*;

fn tierpost() -> Command {
    Command::cargo_bin("tierpost").expect("tierpost binary")
}

#[test]
fn help_lists_the_commands() {
    tierpost()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("read"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn run_with_missing_config_file_fails() {
    tierpost()
        .args(["run", "--once", "--config", "/nonexistent/tierpost.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn check_config_rejects_inverted_thresholds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[market]
condition_id = "0xabc"

[chain]
rpc_url = "https://rpc.example"
contract_address = "0x000000000000000000000000000000000000dEaD"
chain_id = 1

[thresholds]
green_max = 0.30
amber_max = 0.25
"#,
    )
    .expect("write config");

    tierpost()
        .args(["check", "config", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("green_max"));
}

#[test]
fn check_config_accepts_a_valid_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[market]
condition_id = "0xabc"

[chain]
rpc_url = "https://rpc.example"
contract_address = "0x000000000000000000000000000000000000dEaD"
chain_id = 1
"#,
    )
    .expect("write config");

    tierpost()
        .args(["check", "config", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is valid"))
        .stdout(predicate::str::contains("Green < 0.1"));
}
