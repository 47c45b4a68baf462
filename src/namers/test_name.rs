//! Identity of the running test and the per-thread "current test" stack.

use log::debug;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

thread_local! {
    static CURRENT_TESTS: RefCell<Vec<(u64, Rc<TestName>)>> = const { RefCell::new(Vec::new()) };
    static NEXT_BINDING: Cell<u64> = const { Cell::new(0) };
}

/// Resolves a `file!()` path against the crate's manifest directory.
///
/// `file!()` is relative to the workspace root, while tests run from the
/// member's directory. Tries the path under `manifest_dir`, then under each
/// ancestor of it, and falls back to stripping the member's relative path
/// from the front of `file`.
pub fn resolve_source_file(manifest_dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        return file.to_path_buf();
    }
    if let Some(found) = manifest_dir
        .ancestors()
        .map(|dir| dir.join(file))
        .find(|candidate| candidate.is_file())
    {
        return found;
    }
    for ancestor in manifest_dir.ancestors().skip(1) {
        let Ok(member) = manifest_dir.strip_prefix(ancestor) else {
            continue;
        };
        if let Ok(rest) = file.strip_prefix(member) {
            return manifest_dir.join(rest);
        }
    }
    manifest_dir.join(file)
}

/// Source file and name of a test, plus the sections currently open inside it.
#[derive(Debug)]
pub struct TestName {
    source_file: PathBuf,
    name: String,
    sections: RefCell<Vec<(u64, String)>>,
    next_section: Cell<u64>,
}

impl TestName {
    pub fn new(source_file: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            name: name.into(),
            sections: RefCell::new(Vec::new()),
            next_section: Cell::new(0),
        }
    }

    pub fn source_file(&self) -> &Path {
        &self.source_file
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Open sections, outermost first.
    pub fn sections(&self) -> Vec<String> {
        self.sections
            .borrow()
            .iter()
            .map(|(_, section)| section.clone())
            .collect()
    }

    /// Pushes a section and returns the id that closes it.
    pub(crate) fn push_section(&self, section: String) -> u64 {
        let id = self.next_section.get();
        self.next_section.set(id + 1);
        self.sections.borrow_mut().push((id, section));
        id
    }

    /// Closes section `id` and everything opened after it. Unknown ids are
    /// ignored: they were already cut by an enclosing section.
    pub(crate) fn close_section(&self, id: u64) {
        let mut sections = self.sections.borrow_mut();
        if let Some(at) = sections.iter().position(|(owner, _)| *owner == id) {
            sections.truncate(at);
        }
    }

    /// Makes this the current test of the calling thread until the guard drops.
    pub fn begin(self) -> CurrentTestGuard {
        Rc::new(self).begin_shared()
    }

    /// Like [`begin`](Self::begin), for a test the caller keeps a handle to.
    pub fn begin_shared(self: Rc<Self>) -> CurrentTestGuard {
        debug!(
            "current test: {} ({})",
            self.name,
            self.source_file.display()
        );
        let id = NEXT_BINDING.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        CURRENT_TESTS.with(|stack| stack.borrow_mut().push((id, Rc::clone(&self))));
        CurrentTestGuard { test: self, id }
    }

    pub(crate) fn current() -> Option<Rc<TestName>> {
        CURRENT_TESTS.with(|stack| stack.borrow().last().map(|(_, test)| Rc::clone(test)))
    }
}

/// Keeps a test bound as current while alive.
///
/// Dropping it unbinds this test and every test bound after it on the same
/// thread; dropping a guard whose binding is already gone does nothing.
#[must_use = "the test is only current while the guard is alive"]
#[derive(Debug)]
pub struct CurrentTestGuard {
    test: Rc<TestName>,
    id: u64,
}

impl CurrentTestGuard {
    pub fn test(&self) -> &Rc<TestName> {
        &self.test
    }
}

impl Drop for CurrentTestGuard {
    fn drop(&mut self) {
        let id = self.id;
        CURRENT_TESTS.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(at) = stack.iter().position(|(owner, _)| *owner == id) {
                stack.truncate(at);
            }
        });
    }
}
