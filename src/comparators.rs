//! Comparison of received output against the approved file.

use crate::error::{ApprovalError, ApprovalResult};
use std::fs;
use std::path::Path;

/// Decides whether a received file matches its approved counterpart.
pub trait ApprovalComparator {
    fn contents_are_equivalent(&self, received: &Path, approved: &Path) -> ApprovalResult<bool>;
}

/// Exact text comparison, ignoring carriage returns.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextComparator;

impl TextComparator {
    pub(crate) fn read_normalized(path: &Path) -> ApprovalResult<String> {
        let text = fs::read_to_string(path).map_err(|source| ApprovalError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(text.replace('\r', ""))
    }
}

impl ApprovalComparator for TextComparator {
    fn contents_are_equivalent(&self, received: &Path, approved: &Path) -> ApprovalResult<bool> {
        Ok(Self::read_normalized(received)? == Self::read_normalized(approved)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn pair(tmp: &TempDir, received: &str, approved: &str) -> (std::path::PathBuf, std::path::PathBuf) {
        let r = tmp.path().join("r.txt");
        let a = tmp.path().join("a.txt");
        fs::write(&r, received).unwrap();
        fs::write(&a, approved).unwrap();
        (r, a)
    }

    #[test]
    fn line_endings_do_not_matter() {
        let tmp = TempDir::new().unwrap();
        let (r, a) = pair(&tmp, "one\ntwo\n", "one\r\ntwo\r\n");
        assert!(TextComparator.contents_are_equivalent(&r, &a).unwrap());
    }

    #[test]
    fn trailing_newline_matters() {
        let tmp = TempDir::new().unwrap();
        let (r, a) = pair(&tmp, "one\n", "one");
        assert!(!TextComparator.contents_are_equivalent(&r, &a).unwrap());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let tmp = TempDir::new().unwrap();
        let r = tmp.path().join("r.txt");
        fs::write(&r, "x").unwrap();
        let err = TextComparator
            .contents_are_equivalent(&r, &tmp.path().join("missing.txt"))
            .unwrap_err();
        assert!(matches!(err, ApprovalError::Read { .. }));
    }
}
