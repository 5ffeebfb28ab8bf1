use std::process::Command;

use serde_json::{Value, json};

fn cdiscount() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_cdiscount"));
    command.env_remove("RUST_LOG");
    command
}

#[test]
fn test_help_lists_commands() {
    let output = cdiscount().arg("--help").output().unwrap();
    assert!(output.status.success());

    let help = String::from_utf8_lossy(&output.stdout);
    for command in ["seller", "orders", "offers", "products", "discussions", "webmail", "relays"] {
        assert!(help.contains(command), "missing {} in help", command);
    }
}

#[test]
fn test_offers_package_prints_archive_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("offers.json");
    std::fs::write(
        &input,
        json!({
            "OfferCollection": [{"Offer": {"ProductEan": "2009863600561", "SellerProductId": "SKU-A", "Price": 10, "Stock": 2}}],
            "OfferPublicationList": [1, 16],
        })
        .to_string(),
    )
    .unwrap();

    let output = cdiscount()
        .current_dir(dir.path())
        .args(["offers", "package", "--name", "offers", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(dir.path().join("offers"))
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["Name"], "offers");
    assert!(result["Path"].as_str().unwrap().ends_with("offers.zip"));
    assert!(dir.path().join("offers.zip").exists());

    // a second run without --overwrite fails
    let again = cdiscount()
        .current_dir(dir.path())
        .args(["offers", "package", "--name", "offers", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(dir.path().join("offers"))
        .output()
        .unwrap();
    assert!(!again.status.success());
    assert!(String::from_utf8_lossy(&again.stderr).contains("already exists"));
}

#[test]
fn test_remote_command_without_credentials_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = cdiscount()
        .current_dir(dir.path())
        .env_remove("CDISCOUNT_LOGIN")
        .env_remove("CDISCOUNT_PASSWORD")
        .env_remove("CDISCOUNT_CONFIG")
        .args(["seller", "info"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
