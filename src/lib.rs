//! Approval tests: verify output against approved files kept next to the test source.
//!
//! ```no_run
//! use approval_tests::{current_test, verify_all};
//!
//! let _test = current_test!("lists_squares");
//! verify_all("Squares", 1..=3, |n| format!("{n} -> {}", n * n)).unwrap();
//! ```
//!
//! The first run writes `<file>.lists_squares.received.txt`, creates an empty
//! `<file>.lists_squares.approved.txt` and fails. Rename the received file over
//! the approved one once its content is right (or run with
//! `APPROVAL_TESTS_AUTO_APPROVE=1`) and later runs pass.

pub use crate::approvals::{verify, verify_all, verify_debug, verify_json, verify_with, Options};
pub use crate::config::ApprovalConfig;
pub use crate::error::{ApprovalError, ApprovalResult};
pub use crate::file_utils::{FileStatus, FileUtils};
pub use crate::namers::{ApprovalNamer, ApprovalTestNamer, NamerFactory, SectionNameDisposer, TestName};

pub mod approvals;
pub mod comparators;
pub mod config;
pub mod error;
pub mod file_approver;
pub mod file_utils;
pub mod namers;
pub mod pending;
pub mod reporters;
pub mod writers;
