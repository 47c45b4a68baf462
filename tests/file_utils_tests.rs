mod common;

use approval_tests::{FileStatus, FileUtils};
use tempfile::TempDir;

#[test]
fn absent_path_does_not_exist_and_has_no_size() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("absent.approved.txt");
    assert!(!FileUtils::file_exists(&path));
    assert_eq!(FileUtils::file_size(&path), -1);
}

#[test]
fn written_file_reports_exact_byte_length() {
    let tmp = TempDir::new().unwrap();
    for len in [0usize, 1, 4096] {
        let path = tmp.path().join(format!("f{len}.txt"));
        common::write(&path, &"x".repeat(len));
        assert!(FileUtils::file_exists(&path));
        assert_eq!(FileUtils::file_size(&path), len as i64);
        assert_eq!(FileUtils::probe(&path), FileStatus::Found(len as u64));
    }
}

#[test]
fn ensure_creates_an_empty_file_when_absent() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("new.approved.txt");
    FileUtils::ensure_file_exists(&path).unwrap();
    assert!(FileUtils::file_exists(&path));
    assert_eq!(FileUtils::file_size(&path), 0);
}

#[test]
fn ensure_leaves_existing_content_alone() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("kept.approved.txt");
    common::write(&path, "approved body\n");
    FileUtils::ensure_file_exists(&path).unwrap();
    assert_eq!(FileUtils::file_size(&path), 14);
    assert_eq!(common::read(&path), "approved body\n");
}

#[test]
fn ensure_twice_is_the_same_as_once() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("twice.approved.txt");
    FileUtils::ensure_file_exists(&path).unwrap();
    FileUtils::ensure_file_exists(&path).unwrap();
    assert!(FileUtils::file_exists(&path));
    assert_eq!(FileUtils::file_size(&path), 0);
}

#[test]
fn ensure_propagates_writer_failure() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("not_a_dir");
    common::write(&file, "x");
    let err = FileUtils::ensure_file_exists(file.join("child.txt")).unwrap_err();
    assert!(matches!(err, approval_tests::ApprovalError::Write { .. }));
}
