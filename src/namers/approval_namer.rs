//! Resolution of approved and received file paths for a test.

use super::test_name::TestName;
use crate::error::{ApprovalError, ApprovalResult};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Resolves where the approved and received files of a verification live.
pub trait ApprovalNamer {
    /// `extension` is given without the leading dot.
    fn approved_file(&self, extension: &str) -> PathBuf;
    fn received_file(&self, extension: &str) -> PathBuf;
}

/// Names files after the test's source file, test name and open sections.
///
/// Sections are read at resolution time, so a namer built before
/// [`NamerFactory::append_to_output_filename`](super::NamerFactory::append_to_output_filename)
/// still picks the section up.
#[derive(Debug, Clone)]
pub struct ApprovalTestNamer {
    test: Rc<TestName>,
    subdirectory: Option<PathBuf>,
}

impl ApprovalTestNamer {
    pub fn new(test: Rc<TestName>) -> Self {
        Self {
            test,
            subdirectory: None,
        }
    }

    pub fn for_current_test() -> ApprovalResult<Self> {
        Ok(Self::new(Self::current_test()?))
    }

    /// The test bound to the calling thread.
    pub fn current_test() -> ApprovalResult<Rc<TestName>> {
        TestName::current().ok_or(ApprovalError::NoCurrentTest)
    }

    /// Place approval files in `dir` below the source file's directory.
    pub fn with_subdirectory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.subdirectory = Some(dir.into());
        self
    }

    pub fn test(&self) -> &Rc<TestName> {
        &self.test
    }

    /// Test name followed by every open section, joined with `.`.
    pub fn test_name(&self) -> String {
        let mut name = self.test.name().to_string();
        for section in self.test.sections() {
            name.push('.');
            name.push_str(&section);
        }
        name
    }

    /// Source file name without its extension.
    pub fn file_name(&self) -> String {
        self.test
            .source_file()
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn directory(&self) -> PathBuf {
        let base = self
            .test
            .source_file()
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .to_path_buf();
        match &self.subdirectory {
            Some(sub) => base.join(sub),
            None => base,
        }
    }

    fn output_file(&self, kind: &str, extension: &str) -> PathBuf {
        let extension = extension.trim_start_matches('.');
        self.directory().join(format!(
            "{}.{}.{}.{}",
            self.file_name(),
            self.test_name(),
            kind,
            extension
        ))
    }
}

impl ApprovalNamer for ApprovalTestNamer {
    fn approved_file(&self, extension: &str) -> PathBuf {
        self.output_file("approved", extension)
    }

    fn received_file(&self, extension: &str) -> PathBuf {
        self.output_file("received", extension)
    }
}
