//! Finding and approving received files left behind by failed verifications.

use crate::error::{ApprovalError, ApprovalResult};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const RECEIVED_MARKER: &str = ".received.";
const APPROVED_MARKER: &str = ".approved.";

fn is_received_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.contains(RECEIVED_MARKER))
}

/// Recursively collects received files under `root`, sorted.
pub fn find_received_files(root: impl AsRef<Path>) -> ApprovalResult<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| ApprovalError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !is_received_file(entry.path()) {
            continue;
        }
        files.push(entry.path().to_path_buf());
    }
    files.sort();
    Ok(files)
}

/// `a.t.received.txt` -> `a.t.approved.txt`. Only the last marker is replaced.
pub fn approved_path_for(received: &Path) -> Option<PathBuf> {
    let name = received.file_name()?.to_str()?;
    let at = name.rfind(RECEIVED_MARKER)?;
    let approved = format!(
        "{}{}{}",
        &name[..at],
        APPROVED_MARKER,
        &name[at + RECEIVED_MARKER.len()..]
    );
    Some(received.with_file_name(approved))
}

/// Moves a received file over its approved counterpart.
pub fn approve(received: &Path) -> ApprovalResult<PathBuf> {
    let approved =
        approved_path_for(received).ok_or_else(|| ApprovalError::NotAReceivedFile {
            path: received.to_path_buf(),
        })?;
    fs::rename(received, &approved).map_err(|source| ApprovalError::Rename {
        from: received.to_path_buf(),
        to: approved.clone(),
        source,
    })?;
    info!("approved {}", approved.display());
    Ok(approved)
}

/// Approves every received file under `root`; returns the approved paths.
pub fn approve_all(root: impl AsRef<Path>) -> ApprovalResult<Vec<PathBuf>> {
    find_received_files(root)?
        .iter()
        .map(|received| approve(received))
        .collect()
}
