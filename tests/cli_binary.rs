mod helpers;

use std::process::{Command, Output};

use fpdiff::source::byte_order::ByteOrder;

fn fpdiff() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fpdiff"));
    cmd.env_remove("FPDIFF_LOG");
    cmd
}

fn stderr_of(out: &Output) -> String {
    String::from_utf8(out.stderr.clone()).expect("utf-8")
}

#[test]
fn report_goes_to_stdout_with_exit_zero() {
    let a = helpers::float_file(&[1.0, 2.0]);
    let b = helpers::float_file(&[1.0, 2.5]);
    let out = fpdiff().arg(a.path()).arg(b.path()).output().expect("spawn");

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stderr_of(&out), "");
    let stdout = String::from_utf8(out.stdout).expect("utf-8");
    assert!(stdout.starts_with("************** Data Diff Results **************\n"));
    assert!(stdout.ends_with("***********************************************\n"));
}

#[test]
fn length_mismatch_is_single_stderr_line() {
    let a = helpers::float_file(&[1.0, 2.0, 3.0, 4.0]);
    let b = helpers::float_file(&[1.0, 2.0, 3.0]);
    let out = fpdiff().arg(a.path()).arg(b.path()).output().expect("spawn");

    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert_eq!(stderr_of(&out), "Error: file length not equal.\n");
}

#[test]
fn unopenable_first_file_is_single_stderr_line() {
    let b = helpers::float_file(&[1.0]);
    let missing = b.path().with_extension("missing");
    let out = fpdiff().arg(&missing).arg(b.path()).output().expect("spawn");

    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert_eq!(
        stderr_of(&out),
        format!("Error: file1 {} cannot be open.\n", missing.display())
    );
}

#[test]
fn truncated_record_is_single_stderr_line() {
    let mut bytes = helpers::encode(&[1.0], ByteOrder::Native);
    bytes.extend_from_slice(&[0x00, 0x00, 0x80]);
    let a = helpers::bytes_file(&bytes);
    let b = helpers::float_file(&[1.0, 2.0]);
    let out = fpdiff().arg(a.path()).arg(b.path()).output().expect("spawn");

    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert_eq!(stderr_of(&out), "Error: file read error(3, 4)\n");
}

#[test]
fn explicit_log_filter_adds_refusal_event() {
    let a = helpers::float_file(&[1.0, 2.0]);
    let b = helpers::float_file(&[1.0]);
    let out = fpdiff()
        .env("FPDIFF_LOG", "fpdiff=debug")
        .arg(a.path())
        .arg(b.path())
        .output()
        .expect("spawn");

    assert_eq!(out.status.code(), Some(2));
    let stderr = stderr_of(&out);
    assert!(stderr.contains("comparison refused"));
    assert!(stderr.ends_with("Error: file length not equal.\n"));
}

#[test]
fn missing_argument_is_usage_error() {
    let a = helpers::float_file(&[1.0]);
    let out = fpdiff().arg(a.path()).output().expect("spawn");

    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert!(stderr_of(&out).contains("Usage:"));
}
