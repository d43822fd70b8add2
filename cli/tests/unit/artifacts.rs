//! Local artifact helpers.

#![allow(clippy::expect_used)]

use hostprobe::infra::fs::{artifact_present, sha256_file};
use tempfile::TempDir;

#[test]
fn test_sha256_of_present_artifact() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("logstash-8.15.0-amd64.deb");
    std::fs::write(&path, b"abc").expect("write");

    assert!(artifact_present(&path));
    assert_eq!(
        sha256_file(&path).expect("hash"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_missing_or_empty_artifact_has_no_digest() {
    let dir = TempDir::new().expect("temp dir");
    let empty = dir.path().join("empty.rpm");
    std::fs::write(&empty, b"").expect("write");

    assert!(!artifact_present(&empty));
    assert!(!artifact_present(&dir.path().join("absent.rpm")));
    assert!(!artifact_present(dir.path()));
    assert_eq!(sha256_file(&empty).expect("hash"), "");
    assert_eq!(sha256_file(&dir.path().join("absent.rpm")).expect("hash"), "");
}
