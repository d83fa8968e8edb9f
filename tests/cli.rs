//! CLI integration tests for shortening
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn shortening() -> Command {
    let mut cmd = Command::cargo_bin("shortening").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    shortening()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("short, reversible identifiers"));
}

#[test]
fn test_version() {
    shortening()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shortening"));
}

#[test]
fn test_list_schemes() {
    shortening()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("base64"))
        .stdout(predicate::str::contains("big32"))
        .stdout(predicate::str::contains("max 11"))
        .stdout(predicate::str::contains("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567"));
}

#[test]
fn test_threshold_table() {
    shortening()
        .args(["--scheme", "base64", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1171221845949812800"));
}

#[test]
fn test_table_rejects_unbounded_scheme() {
    shortening()
        .args(["--scheme", "big64", "table"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no length limit"));
}

// ============================================================================
// Encode/Decode
// ============================================================================

#[test]
fn test_encode_values() {
    shortening()
        .args(["--scheme", "base64", "encode", "0", "64", "65", "18446744073709551615"])
        .assert()
        .success()
        .stdout("A\nAA\nBA\n_---------O\n");
}

#[test]
fn test_decode_values() {
    shortening()
        .args(["-s", "base64", "decode", "A", "AA", "BA", "_---------O"])
        .assert()
        .success()
        .stdout("0\n64\n65\n18446744073709551615\n");
}

#[test]
fn test_encode_from_stdin() {
    shortening()
        .args(["-s", "base32", "encode"])
        .write_stdin("0\n\n32\n  33  \n")
        .assert()
        .success()
        .stdout("A\nAA\nBA\n");
}

#[test]
fn test_decode_from_stdin() {
    shortening()
        .args(["-s", "base32", "decode"])
        .write_stdin("766666666666O\n")
        .assert()
        .success()
        .stdout("18446744073709551615\n");
}

#[test]
fn test_big_scheme_roundtrip() {
    let value = "340282366920938463463374607431768211456";
    let output = shortening()
        .args(["-s", "big64", "encode", value])
        .output()
        .unwrap();
    assert!(output.status.success());
    let id = String::from_utf8(output.stdout).unwrap();

    shortening()
        .args(["-s", "big64", "decode", id.trim()])
        .assert()
        .success()
        .stdout(format!("{}\n", value));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_decode_overflow() {
    shortening()
        .args(["--no-color", "-s", "base64", "decode", "AAAAAAAAAAP"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: decoded value overflows 64 bits"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn test_decode_invalid_character() {
    shortening()
        .args(["--no-color", "-s", "base64", "decode", "AB*"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character '*' at position 2"));
}

#[test]
fn test_decode_too_long() {
    shortening()
        .args(["--no-color", "-s", "base64", "decode", "AAAAAAAAAAAA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid decode length"));
}

#[test]
fn test_encode_negative() {
    shortening()
        .args(["--no-color", "-s", "big64", "encode", "--", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn test_encode_out_of_range_for_bounded() {
    shortening()
        .args(["--no-color", "-s", "base64", "encode", "18446744073709551616"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limited to 64 bits"));
}

#[test]
fn test_unknown_scheme_suggests() {
    shortening()
        .args(["--no-color", "-s", "bas64", "encode", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean 'base64'?"));
}
