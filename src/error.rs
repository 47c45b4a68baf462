//! Error type shared by every approval-test operation.
//!
//! All fallible operations in this crate return [`ApprovalError`]. Each variant
//! carries a stable miette code so test output can be searched for the failure
//! class, plus a help line where there is something actionable to say.

use miette::Diagnostic;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the crate.
pub type ApprovalResult<T> = Result<T, ApprovalError>;

#[derive(Debug, Error, Diagnostic)]
pub enum ApprovalError {
    #[error("no test is registered as current on this thread")]
    #[diagnostic(
        code(approval_tests::namer::no_current_test),
        help("bind the running test first, e.g. `let _test = current_test!(\"my_test\");`")
    )]
    NoCurrentTest,

    #[error("failed to write '{}'", .path.display())]
    #[diagnostic(code(approval_tests::writer::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read '{}'", .path.display())]
    #[diagnostic(code(approval_tests::io::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove '{}'", .path.display())]
    #[diagnostic(code(approval_tests::io::remove))]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to move '{}' to '{}'", .from.display(), .to.display())]
    #[diagnostic(code(approval_tests::io::rename))]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is not a received file", .path.display())]
    #[diagnostic(
        code(approval_tests::pending::not_received),
        help("only files named `<file>.<test>.received.<ext>` can be approved")
    )]
    NotAReceivedFile { path: PathBuf },

    #[error(
        "received output does not match approved file\n  received: {}\n  approved: {}",
        .received.display(),
        .approved.display()
    )]
    #[diagnostic(
        code(approval_tests::mismatch),
        help("inspect the received file and rename it over the approved file once it is correct")
    )]
    Mismatch { received: PathBuf, approved: PathBuf },

    #[error("failed to serialize value for verification")]
    #[diagnostic(code(approval_tests::serialize))]
    Serialize(#[from] serde_json::Error),

    #[error("failed to walk '{}'", .root.display())]
    #[diagnostic(code(approval_tests::pending::walk))]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl ApprovalError {
    /// True for the verification failure itself, as opposed to an I/O or setup problem.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ApprovalError::Mismatch { .. })
    }
}
