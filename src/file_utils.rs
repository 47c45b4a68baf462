//! Filesystem probes used when locating approval files.
//!
//! `file_exists` and `file_size` keep the collapsed failure model: any metadata
//! error reads as "absent". [`FileUtils::probe`] is the variant that tells
//! "not there" apart from "could not look".

use crate::error::ApprovalResult;
use crate::writers::{ApprovalWriter, StringWriter};
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Outcome of a metadata query.
#[derive(Debug)]
pub enum FileStatus {
    /// Metadata was read; the value is the length in bytes.
    Found(u64),
    NotFound,
    /// Any other failure, e.g. permission denied on a parent directory.
    QueryError(io::Error),
}

impl FileStatus {
    pub fn exists(&self) -> bool {
        matches!(self, FileStatus::Found(_))
    }

    pub fn size(&self) -> Option<u64> {
        match self {
            FileStatus::Found(len) => Some(*len),
            _ => None,
        }
    }
}

impl PartialEq for FileStatus {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FileStatus::Found(a), FileStatus::Found(b)) => a == b,
            (FileStatus::NotFound, FileStatus::NotFound) => true,
            (FileStatus::QueryError(a), FileStatus::QueryError(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}

pub struct FileUtils;

impl FileUtils {
    pub fn probe(path: impl AsRef<Path>) -> FileStatus {
        match fs::metadata(path.as_ref()) {
            Ok(meta) => FileStatus::Found(meta.len()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => FileStatus::NotFound,
            Err(e) => FileStatus::QueryError(e),
        }
    }

    /// True when metadata can be read. Directories count as existing.
    pub fn file_exists(path: impl AsRef<Path>) -> bool {
        Self::file_size(path) != -1
    }

    /// Size in bytes, or `-1` if the metadata query fails for any reason.
    pub fn file_size(path: impl AsRef<Path>) -> i64 {
        match Self::probe(path) {
            FileStatus::Found(len) => i64::try_from(len).unwrap_or(i64::MAX),
            FileStatus::NotFound | FileStatus::QueryError(_) => -1,
        }
    }

    /// Creates an empty file at `path` unless something is already there.
    ///
    /// Existing content is never touched. Write failures come back exactly as the
    /// writer reported them.
    pub fn ensure_file_exists(path: impl AsRef<Path>) -> ApprovalResult<()> {
        let path = path.as_ref();
        if Self::file_exists(path) {
            return Ok(());
        }
        debug!("creating empty file {}", path.display());
        StringWriter::new("").write(path)
    }
}
