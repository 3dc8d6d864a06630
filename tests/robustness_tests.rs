use assert_cmd::Command;
use assert_cmd::cargo_bin;
use predicates::prelude::*;

mod common;

#[test]
fn test_malformed_amount_fails_single_callback() {
    let mut cmd = Command::new(cargo_bin!("passthrough-gateway"));
    cmd.write_stdin("TRANSACTION_AMT=abc&ORDER_ID=ORD-1");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Malformed transaction amount 'abc'"));
}

#[test]
fn test_malformed_callback_skipped_in_lines_mode() {
    let file = common::write_callbacks(&[
        common::callback_body(&[("TRANSACTION_AMT", "1.00"), ("ORDER_ID", "ORD-1")]),
        common::callback_body(&[("TRANSACTION_AMT", "not_a_number"), ("ORDER_ID", "ORD-2")]),
        String::new(),
        common::callback_body(&[("TRANSACTION_AMT", "2.00"), ("ORDER_ID", "ORD-3")]),
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("passthrough-gateway"));
    cmd.arg(file.path()).arg("--lines");

    let output = cmd.assert().success().stderr(predicate::str::contains(
        "Error translating callback: Malformed transaction amount 'not_a_number'",
    ));
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"order_id\":\"ORD-1\""));
    assert!(lines[1].contains("\"order_id\":\"ORD-3\""));
}

#[test]
fn test_empty_callback_defaults() {
    let mut cmd = Command::new(cargo_bin!("passthrough-gateway"));
    cmd.arg("--authorize-only").write_stdin("");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"successful\": false"))
        .stdout(predicate::str::contains("\"transaction_type\": \"AUTHORIZE\""))
        .stdout(predicate::str::contains("\"order_id\": null"))
        .stdout(predicate::str::contains("\"customer_id\": null"));
}
