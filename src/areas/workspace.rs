use crate::artifacts::reference::error::ResolveError;
use crate::artifacts::reference::resolver::resolve;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// The directory tree repositories are cloned into
#[derive(Debug)]
pub struct Workspace {
    root: Box<Path>,
}

impl Workspace {
    pub fn new(root: Box<Path>) -> Self {
        Workspace { root }
    }

    pub fn target_for(&self, reference: &str) -> Result<PathBuf, ResolveError> {
        resolve(&self.root, reference)
    }

    /// A target is occupied when it exists and is anything but an empty directory
    pub fn is_occupied(&self, target: &Path) -> anyhow::Result<bool> {
        if !target.exists() {
            return Ok(false);
        }

        if !target.is_dir() {
            return Ok(true);
        }

        let mut entries = fs::read_dir(target)
            .with_context(|| format!("failed to read directory {}", target.display()))?;

        Ok(entries.next().is_some())
    }

    pub fn create_parent_dirs(&self, target: &Path) -> anyhow::Result<()> {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        Ok(())
    }
}
