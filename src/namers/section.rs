//! Scoped sections: `<test>.<section>` file names for sub-cases.

use super::approval_namer::ApprovalTestNamer;
use super::test_name::TestName;
use crate::error::ApprovalResult;
use log::debug;
use std::rc::Rc;

/// Entry point for scoped naming overrides.
pub struct NamerFactory;

impl NamerFactory {
    /// Appends `section` to the current test's output file name until the
    /// returned guard is dropped.
    ///
    /// Nested calls stack: `t.outer.inner`.
    ///
    /// ```no_run
    /// use approval_tests::namers::NamerFactory;
    ///
    /// let _test = approval_tests::current_test!("formats_amounts");
    /// for locale in ["en", "de"] {
    ///     let _section = NamerFactory::append_to_output_filename(locale).unwrap();
    ///     approval_tests::verify(&format!("{locale}: 1,000.00")).unwrap();
    /// }
    /// ```
    pub fn append_to_output_filename(
        section: impl Into<String>,
    ) -> ApprovalResult<SectionNameDisposer> {
        let test = ApprovalTestNamer::current_test()?;
        Ok(SectionNameDisposer::new(test, section))
    }
}

/// Keeps a section appended to a test's name while alive.
///
/// Dropping it closes this section and every section opened after it. If an
/// enclosing guard already closed it, dropping does nothing, so sections
/// opened in the meantime stay open.
#[must_use = "the section is removed as soon as the guard is dropped"]
#[derive(Debug)]
pub struct SectionNameDisposer {
    test: Rc<TestName>,
    id: u64,
}

impl SectionNameDisposer {
    pub fn new(test: Rc<TestName>, section: impl Into<String>) -> Self {
        let section = section.into();
        debug!("section '{}' opened for test {}", section, test.name());
        let id = test.push_section(section);
        Self { test, id }
    }
}

impl Drop for SectionNameDisposer {
    fn drop(&mut self) {
        self.test.close_section(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApprovalError;

    #[test]
    fn section_lives_as_long_as_the_guard() {
        let _test = TestName::new("a.rs", "T").begin();
        let namer = ApprovalTestNamer::for_current_test().unwrap();
        {
            let _section = NamerFactory::append_to_output_filename("Case1").unwrap();
            assert_eq!(namer.test_name(), "T.Case1");
        }
        assert_eq!(namer.test_name(), "T");
    }

    #[test]
    fn no_current_test_is_an_error() {
        let err = NamerFactory::append_to_output_filename("x").unwrap_err();
        assert!(matches!(err, ApprovalError::NoCurrentTest));
    }

    #[test]
    fn dropping_outer_first_clears_inner_too() {
        let test = Rc::new(TestName::new("a.rs", "T"));
        let outer = SectionNameDisposer::new(Rc::clone(&test), "outer");
        let inner = SectionNameDisposer::new(Rc::clone(&test), "inner");
        drop(outer);
        assert!(test.sections().is_empty());
        drop(inner);
        assert!(test.sections().is_empty());
    }

    #[test]
    fn stale_inner_guard_keeps_sections_opened_after_it() {
        let test = Rc::new(TestName::new("a.rs", "T"));
        let outer = SectionNameDisposer::new(Rc::clone(&test), "outer");
        let inner = SectionNameDisposer::new(Rc::clone(&test), "inner");
        drop(outer);
        let _first = SectionNameDisposer::new(Rc::clone(&test), "first");
        let _second = SectionNameDisposer::new(Rc::clone(&test), "second");
        drop(inner);
        assert_eq!(test.sections(), vec!["first", "second"]);
    }
}
