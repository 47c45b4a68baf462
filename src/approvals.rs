//! Public verification entry points.
//!
//! Every function here resolves names through the current test (see
//! [`current_test!`](crate::current_test)) unless an explicit namer is passed
//! through [`Options`].

use crate::config::ApprovalConfig;
use crate::error::ApprovalResult;
use crate::file_approver::FileApprover;
use crate::namers::{ApprovalNamer, ApprovalTestNamer};
use crate::reporters::Reporter;
use crate::writers::StringWriter;
use serde::Serialize;
use std::fmt::Debug;

/// Overrides for a single verification. Unset fields fall back to the
/// current test and [`ApprovalConfig::from_env`].
#[derive(Default)]
pub struct Options<'a> {
    pub namer: Option<&'a dyn ApprovalNamer>,
    pub reporter: Option<&'a dyn Reporter>,
    pub extension: Option<&'a str>,
}

impl<'a> Options<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namer(mut self, namer: &'a dyn ApprovalNamer) -> Self {
        self.namer = Some(namer);
        self
    }

    pub fn with_reporter(mut self, reporter: &'a dyn Reporter) -> Self {
        self.reporter = Some(reporter);
        self
    }

    pub fn with_extension(mut self, extension: &'a str) -> Self {
        self.extension = Some(extension);
        self
    }
}

/// Verifies `text` against the current test's approved file.
pub fn verify(text: &str) -> ApprovalResult<()> {
    verify_with(text, &Options::default())
}

pub fn verify_with(text: &str, options: &Options<'_>) -> ApprovalResult<()> {
    verify_with_config(text, options, &ApprovalConfig::from_env())
}

pub(crate) fn verify_with_config(
    text: &str,
    options: &Options<'_>,
    config: &ApprovalConfig,
) -> ApprovalResult<()> {
    let writer = match options.extension {
        Some(ext) => StringWriter::with_extension(text, ext),
        None => StringWriter::new(text),
    };

    let default_reporter;
    let reporter: &dyn Reporter = match options.reporter {
        Some(reporter) => reporter,
        None => {
            default_reporter = config.reporter();
            default_reporter.as_ref()
        }
    };

    match options.namer {
        Some(namer) => FileApprover::new().verify(namer, &writer, reporter),
        None => {
            let mut namer = ApprovalTestNamer::for_current_test()?;
            if let Some(sub) = &config.subdirectory {
                namer = namer.with_subdirectory(sub);
            }
            FileApprover::new().verify(&namer, &writer, reporter)
        }
    }
}

/// Verifies a header followed by one formatted line per item.
///
/// The header is separated from the items by a blank line; an empty header
/// is left out entirely.
pub fn verify_all<I, T, F>(header: &str, items: I, formatter: F) -> ApprovalResult<()>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> String,
{
    verify(&format_all(header, items, formatter))
}

pub(crate) fn format_all<I, T, F>(header: &str, items: I, mut formatter: F) -> String
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> String,
{
    let mut out = String::new();
    if !header.is_empty() {
        out.push_str(header);
        out.push_str("\n\n");
    }
    for item in items {
        out.push_str(&formatter(&item));
        out.push('\n');
    }
    out
}

/// Verifies the pretty `Debug` rendering of `value`.
pub fn verify_debug<T: Debug + ?Sized>(value: &T) -> ApprovalResult<()> {
    verify(&format!("{:#?}\n", value))
}

/// Verifies `value` as pretty-printed JSON in a `.json` file.
pub fn verify_json<T: Serialize + ?Sized>(value: &T) -> ApprovalResult<()> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    verify_with(&text, &Options::new().with_extension("json"))
}
