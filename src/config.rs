//! Runtime settings for verification, read from the environment.
//!
//! | Variable | Effect |
//! | --- | --- |
//! | `APPROVAL_TESTS_AUTO_APPROVE` | `1`/`true`: copy received over approved on mismatch |
//! | `APPROVAL_TESTS_SUBDIRECTORY` | place approval files in this directory below the test source |
//! | `NO_COLOR` | disable colored diffs |

use crate::reporters::{AutoApproveReporter, DiffReporter, Reporter};
use std::env;
use std::path::PathBuf;

pub const AUTO_APPROVE_ENV: &str = "APPROVAL_TESTS_AUTO_APPROVE";
pub const SUBDIRECTORY_ENV: &str = "APPROVAL_TESTS_SUBDIRECTORY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalConfig {
    pub use_colors: bool,
    /// Use [`AutoApproveReporter`] instead of printing a diff.
    pub auto_approve: bool,
    pub subdirectory: Option<PathBuf>,
}

impl ApprovalConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let use_colors = lookup("NO_COLOR").is_none() && atty::is(atty::Stream::Stderr);
        let auto_approve = lookup(AUTO_APPROVE_ENV)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let subdirectory = lookup(SUBDIRECTORY_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self {
            use_colors,
            auto_approve,
            subdirectory,
        }
    }

    pub fn reporter(&self) -> Box<dyn Reporter> {
        if self.auto_approve {
            Box::new(AutoApproveReporter)
        } else {
            Box::new(DiffReporter::new(self.use_colors))
        }
    }
}

impl Default for ApprovalConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
