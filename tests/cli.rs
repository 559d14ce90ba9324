extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn renders_a_png_to_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("mandel.png");
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&[
            "--size",
            "16",
            "--iterations",
            "30",
            "--threads",
            "1",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();
    let bytes = fs::read(&out).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn writes_to_stdout_when_no_output_is_given() {
    let assert = Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--size", "8", "--threads", "1"])
        .assert()
        .success();
    let stdout = &assert.get_output().stdout;
    assert_eq!(&stdout[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn refuses_a_bad_center() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--center", "sideways"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("center"));
}

#[test]
fn refuses_a_zero_size() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--size", "0"])
        .assert()
        .failure();
}

#[test]
fn refuses_an_unknown_palette() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--palette", "plasma"])
        .assert()
        .failure();
}
