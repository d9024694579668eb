//! Integration tests for pnw-manifest-validate

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn validate_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("pnw-manifest-validate");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    validate_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("MANIFEST"));
}

#[test]
fn test_valid_manifest_passes() {
    let path = fixture("testnet.manifest.json");
    validate_cmd()
        .arg(&path)
        .assert()
        .code(0)
        .stdout(format!(
            "manifest validation: PASS (schema_version=1.0, network=testnet, path={})\n",
            path.display()
        ))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_path_fails() {
    validate_cmd()
        .arg(fixture("does-not-exist.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with(
            "manifest validation: FAIL - manifest path does not exist: ",
        ));
}

#[test]
fn test_mainnet_is_rejected() {
    validate_cmd()
        .arg(fixture("mainnet.manifest.json"))
        .assert()
        .code(1)
        .stderr("manifest validation: FAIL - network must be 'testnet' (got 'mainnet')\n");
}

#[test]
fn test_uppercase_identifier_is_rejected() {
    validate_cmd()
        .arg(fixture("uppercase_router.manifest.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("program_ids.layer1.pnw_router"));
}

#[test]
fn test_missing_group_is_rejected() {
    validate_cmd()
        .arg(fixture("missing_layer2.manifest.json"))
        .assert()
        .code(1)
        .stderr("manifest validation: FAIL - 'program_ids.layer2' must be an object\n");
}

#[test]
fn test_trailing_comma_is_invalid_json() {
    validate_cmd()
        .arg(fixture("trailing_comma.manifest.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("manifest validation: FAIL - invalid JSON ("));
}

#[test]
fn test_default_path_is_used_without_argument() {
    let Ok(workdir) = TempDir::new() else {
        return;
    };
    let config_dir = workdir.path().join("config");
    assert!(fs::create_dir_all(&config_dir).is_ok());
    assert!(fs::copy(
        fixture("testnet.manifest.json"),
        config_dir.join("testnet.manifest.json")
    )
    .is_ok());

    validate_cmd()
        .current_dir(workdir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "path=config/testnet.manifest.json)",
        ));
}

#[test]
fn test_default_path_missing() {
    let Ok(workdir) = TempDir::new() else {
        return;
    };
    validate_cmd()
        .current_dir(workdir.path())
        .assert()
        .code(1)
        .stderr(
            "manifest validation: FAIL - manifest path does not exist: config/testnet.manifest.json\n",
        );
}

#[test]
fn test_non_object_root_is_rejected() {
    let Ok(workdir) = TempDir::new() else {
        return;
    };
    let path = workdir.path().join("array.json");
    assert!(fs::write(&path, "[1, 2, 3]").is_ok());

    validate_cmd()
        .arg(&path)
        .assert()
        .code(1)
        .stderr("manifest validation: FAIL - manifest root must be an object\n");
}

#[test]
fn test_extra_keys_are_tolerated() {
    let Ok(workdir) = TempDir::new() else {
        return;
    };
    let Ok(source) = fs::read_to_string(fixture("testnet.manifest.json")) else {
        panic!("fixture should be readable");
    };
    let Ok(mut manifest) = serde_json::from_str::<serde_json::Value>(&source) else {
        panic!("fixture should be valid JSON");
    };
    if let Some(serde_json::Value::Object(layer2)) = manifest.pointer_mut("/program_ids/layer2") {
        layer2.insert(
            "future_nft".to_string(),
            serde_json::Value::String("Future-NFT".to_string()),
        );
    }
    let path = workdir.path().join("extra.json");
    assert!(fs::write(&path, manifest.to_string()).is_ok());

    validate_cmd().arg(&path).assert().code(0);
}

#[test]
fn test_validation_is_idempotent() {
    let path = fixture("uppercase_router.manifest.json");
    let first = validate_cmd().arg(&path).output();
    let second = validate_cmd().arg(&path).output();
    let (Ok(first), Ok(second)) = (first, second) else {
        panic!("binary should run");
    };
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stderr, second.stderr);
}

#[test]
fn test_directory_path_is_invalid_json() {
    let Ok(workdir) = TempDir::new() else {
        return;
    };
    validate_cmd()
        .arg(workdir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("manifest validation: FAIL - invalid JSON ("));
}
