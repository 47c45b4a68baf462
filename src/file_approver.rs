//! The received/approved verification workflow.

use crate::comparators::{ApprovalComparator, TextComparator};
use crate::error::{ApprovalError, ApprovalResult};
use crate::file_utils::FileUtils;
use crate::namers::ApprovalNamer;
use crate::reporters::Reporter;
use crate::writers::ApprovalWriter;
use log::{debug, info};
use std::path::Path;

pub struct FileApprover<C = TextComparator> {
    comparator: C,
}

impl FileApprover<TextComparator> {
    pub fn new() -> Self {
        Self {
            comparator: TextComparator,
        }
    }
}

impl Default for FileApprover<TextComparator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ApprovalComparator> FileApprover<C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self { comparator }
    }

    /// Writes the received file, then checks it against the approved file.
    ///
    /// A missing approved file is created empty first, so the first run of a
    /// new test fails with a diff against nothing. On success the received file
    /// is removed; on mismatch it is left for inspection.
    pub fn verify(
        &self,
        namer: &dyn ApprovalNamer,
        writer: &dyn ApprovalWriter,
        reporter: &dyn Reporter,
    ) -> ApprovalResult<()> {
        let extension = writer.file_extension();
        let received = namer.received_file(extension);
        let approved = namer.approved_file(extension);

        writer.write(&received)?;
        match self.verify_files(&received, &approved) {
            Ok(()) => writer.clean_up_received(&received),
            Err(err) => {
                if err.is_mismatch() {
                    reporter.report(&received, &approved);
                }
                Err(err)
            }
        }
    }

    /// Compares two files already on disk.
    pub fn verify_files(&self, received: &Path, approved: &Path) -> ApprovalResult<()> {
        FileUtils::ensure_file_exists(approved)?;
        if self.comparator.contents_are_equivalent(received, approved)? {
            debug!("{} matches", approved.display());
            return Ok(());
        }
        info!(
            "approval mismatch: {} differs from {}",
            received.display(),
            approved.display()
        );
        Err(ApprovalError::Mismatch {
            received: received.to_path_buf(),
            approved: approved.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namers::{ApprovalTestNamer, TestName};
    use crate::reporters::QuietReporter;
    use crate::writers::StringWriter;
    use std::cell::Cell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::TempDir;

    struct CountingReporter(Cell<usize>);

    impl Reporter for CountingReporter {
        fn report(&self, _received: &Path, _approved: &Path) -> bool {
            self.0.set(self.0.get() + 1);
            true
        }
    }

    fn namer(tmp: &TempDir) -> ApprovalTestNamer {
        let source = tmp.path().join("approver_tests.rs");
        ApprovalTestNamer::new(Rc::new(TestName::new(source, "case")))
    }

    #[test]
    fn matching_output_passes_and_cleans_up() {
        let tmp = TempDir::new().unwrap();
        let namer = namer(&tmp);
        fs::write(namer.approved_file("txt"), "hello\n").unwrap();

        FileApprover::new()
            .verify(&namer, &StringWriter::new("hello\n"), &QuietReporter)
            .unwrap();
        assert!(!namer.received_file("txt").exists());
    }

    #[test]
    fn first_run_creates_empty_approved_and_fails() {
        let tmp = TempDir::new().unwrap();
        let namer = namer(&tmp);
        let reporter = CountingReporter(Cell::new(0));

        let err = FileApprover::new()
            .verify(&namer, &StringWriter::new("brand new"), &reporter)
            .unwrap_err();
        assert!(err.is_mismatch());
        assert_eq!(reporter.0.get(), 1);
        assert_eq!(FileUtils::file_size(namer.approved_file("txt")), 0);
        assert_eq!(
            fs::read_to_string(namer.received_file("txt")).unwrap(),
            "brand new"
        );
    }

    #[test]
    fn empty_output_matches_freshly_created_approved_file() {
        let tmp = TempDir::new().unwrap();
        let namer = namer(&tmp);
        FileApprover::new()
            .verify(&namer, &StringWriter::new(""), &QuietReporter)
            .unwrap();
        assert!(namer.approved_file("txt").exists());
    }

    #[test]
    fn custom_comparator_is_used() {
        struct AlwaysEqual;
        impl ApprovalComparator for AlwaysEqual {
            fn contents_are_equivalent(&self, _: &Path, _: &Path) -> ApprovalResult<bool> {
                Ok(true)
            }
        }

        let tmp = TempDir::new().unwrap();
        let namer = namer(&tmp);
        FileApprover::with_comparator(AlwaysEqual)
            .verify(&namer, &StringWriter::new("anything"), &QuietReporter)
            .unwrap();
    }
}
