//! Writers turn captured output into a received file on disk.

use crate::error::{ApprovalError, ApprovalResult};
use log::debug;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Something that knows how to put verified output into a file.
pub trait ApprovalWriter {
    /// Extension for the received and approved files, without the leading dot.
    fn file_extension(&self) -> &str;

    /// Write the output to `path`, replacing whatever is there.
    fn write(&self, path: &Path) -> ApprovalResult<()>;

    /// Remove a received file after a successful verification.
    fn clean_up_received(&self, path: &Path) -> ApprovalResult<()> {
        debug!("removing received file {}", path.display());
        fs::remove_file(path).map_err(|source| ApprovalError::Remove {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Writes a string verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringWriter {
    contents: String,
    extension: String,
}

impl StringWriter {
    pub fn new(contents: impl Into<String>) -> Self {
        Self::with_extension(contents, "txt")
    }

    /// A leading dot on `extension` is accepted and stripped.
    pub fn with_extension(contents: impl Into<String>, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        let extension = extension.trim_start_matches('.').to_string();
        Self {
            contents: contents.into(),
            extension,
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl ApprovalWriter for StringWriter {
    fn file_extension(&self) -> &str {
        &self.extension
    }

    fn write(&self, path: &Path) -> ApprovalResult<()> {
        let write_err = |source| ApprovalError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        debug!("writing {} bytes to {}", self.contents.len(), path.display());
        let mut file = File::create(path).map_err(write_err)?;
        file.write_all(self.contents.as_bytes()).map_err(write_err)?;
        file.flush().map_err(write_err)
    }
}
