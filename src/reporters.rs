//! Reporters: what happens when a received file does not match.
//!
//! Reporters never decide the outcome; the approver fails the verification
//! regardless. They only surface the difference (or act on it).

use crate::comparators::TextComparator;
use difference::{Changeset, Difference};
use log::{info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

pub trait Reporter {
    /// Returns true if the reporter handled the mismatch.
    fn report(&self, received: &Path, approved: &Path) -> bool;
}

/// Says nothing. Useful when the failing `Err` is all a test needs.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuietReporter;

impl Reporter for QuietReporter {
    fn report(&self, _received: &Path, _approved: &Path) -> bool {
        true
    }
}

/// Prints a line diff from approved to received on stderr.
#[derive(Debug, Clone, Copy)]
pub struct DiffReporter {
    pub use_colors: bool,
}

impl DiffReporter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for DiffReporter {
    fn default() -> Self {
        Self::new(atty::is(atty::Stream::Stderr))
    }
}

impl Reporter for DiffReporter {
    fn report(&self, received: &Path, approved: &Path) -> bool {
        let texts = TextComparator::read_normalized(approved)
            .and_then(|a| TextComparator::read_normalized(received).map(|r| (a, r)));
        let (approved_text, received_text) = match texts {
            Ok(texts) => texts,
            Err(e) => {
                warn!("cannot diff approval files: {}", e);
                return false;
            }
        };

        let choice = if self.use_colors {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stderr = StandardStream::stderr(choice);
        let header = format!(
            "--- {}\n+++ {}\n",
            approved.display(),
            received.display()
        );
        let written = stderr
            .write_all(header.as_bytes())
            .and_then(|_| write_diff(&mut stderr, &approved_text, &received_text));
        if let Err(e) = written {
            warn!("failed to print diff: {}", e);
            return false;
        }
        true
    }
}

/// Renders the diff as plain text, one prefixed line per input line.
pub fn render_diff(approved: &str, received: &str) -> String {
    let mut out = NoColor::new(Vec::new());
    // writing into a Vec cannot fail
    let _ = write_diff(&mut out, approved, received);
    String::from_utf8_lossy(&out.into_inner()).into_owned()
}

fn write_diff<W: WriteColor>(out: &mut W, approved: &str, received: &str) -> io::Result<()> {
    let changeset = Changeset::new(approved, received, "\n");
    for diff in &changeset.diffs {
        let (prefix, text, color) = match diff {
            Difference::Same(x) => (' ', x, None),
            Difference::Add(x) => ('+', x, Some(Color::Green)),
            Difference::Rem(x) => ('-', x, Some(Color::Red)),
        };
        match color {
            Some(c) => out.set_color(ColorSpec::new().set_fg(Some(c)))?,
            None => out.reset()?,
        }
        for line in text.split('\n') {
            writeln!(out, "{}{}", prefix, line)?;
        }
    }
    out.reset()
}

/// Copies the received file over the approved one.
///
/// The current run still fails; the next run compares against the new file.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoApproveReporter;

impl Reporter for AutoApproveReporter {
    fn report(&self, received: &Path, approved: &Path) -> bool {
        match fs::copy(received, approved) {
            Ok(_) => {
                info!(
                    "auto-approved {} -> {}",
                    received.display(),
                    approved.display()
                );
                true
            }
            Err(e) => {
                warn!("auto-approve of {} failed: {}", received.display(), e);
                false
            }
        }
    }
}
