//! Naming of approval files.
//!
//! A test binds its identity with [`current_test!`](crate::current_test) (or
//! [`TestName::begin`]). [`ApprovalTestNamer`] turns that identity into
//! `<dir>/<file>.<test>[.<section>...].approved.<ext>`, and
//! [`NamerFactory::append_to_output_filename`] adds a section for as long as
//! the returned guard lives.

pub mod approval_namer;
pub mod section;
pub mod test_name;

pub use approval_namer::{ApprovalNamer, ApprovalTestNamer};
pub use section::{NamerFactory, SectionNameDisposer};
pub use test_name::{resolve_source_file, CurrentTestGuard, TestName};

/// Binds the calling test as current for this thread.
///
/// The source file comes from `file!()`, resolved against the calling crate's
/// `CARGO_MANIFEST_DIR`, so approval files land next to the test source in
/// workspace members too. Keep the returned guard alive for the whole test body.
///
/// ```no_run
/// let _test = approval_tests::current_test!("renders_report");
/// approval_tests::verify("report body\n").unwrap();
/// ```
#[macro_export]
macro_rules! current_test {
    ($name:expr) => {
        $crate::namers::TestName::new(
            $crate::namers::resolve_source_file(
                ::std::path::Path::new(env!("CARGO_MANIFEST_DIR")),
                ::std::path::Path::new(file!()),
            ),
            $name,
        )
        .begin()
    };
}
