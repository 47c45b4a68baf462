//! Shared setup for integration tests.
#![allow(dead_code)]

use approval_tests::{ApprovalTestNamer, TestName};
use std::path::Path;
use std::rc::Rc;
use tempfile::TempDir;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A namer whose files land in `dir`, as if the test source lived there.
pub fn namer_in(dir: &TempDir, test: &str) -> ApprovalTestNamer {
    ApprovalTestNamer::new(Rc::new(TestName::new(dir.path().join("flow_tests.rs"), test)))
}

pub fn write(path: &Path, contents: &str) {
    std::fs::write(path, contents)
        .unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}
