//! Repository reference to filesystem path resolution
//!
//! The resolved path is `root`, then the host, then each directory segment of the
//! reference path, then its basename:
//!
//! | reference                  | resolved (root = `/usr/src`) |
//! |----------------------------|------------------------------|
//! | `https://scm.com/x/y.git`  | `/usr/src/scm.com/x/y`       |
//! | `ssh://user@scm.com/x/y`   | `/usr/src/scm.com/x/y`       |
//! | `scm.com:~x/y`             | `/usr/src/scm.com/x/y`       |
//!
//! Leading `~` is stripped from every segment, `.git` only from the basename.

use crate::artifacts::reference::error::ResolveError;
use crate::artifacts::reference::repository_reference::RepositoryReference;
use crate::artifacts::reference::{GIT_SUFFIX, HOME_PREFIX};
use std::path::{Path, PathBuf};

/// Resolve `reference` to its clone location under `root`.
///
/// Pure: no filesystem, environment or network access.
pub fn resolve(root: &Path, reference: &str) -> Result<PathBuf, ResolveError> {
    let parsed = RepositoryReference::try_parse(reference)?;
    let host = parsed.host(reference)?;

    let (dir_part, base_part) = split_dirname(parsed.path());
    let base_part = strip_git_suffix(base_part).trim_start_matches(HOME_PREFIX);
    let dir_part = strip_home_prefixes(dir_part);
    let dir_part = dir_part.trim_start_matches('/');

    let mut path = root.to_path_buf();
    for component in [host, dir_part, base_part] {
        if !component.is_empty() {
            path.push(component);
        }
    }

    debug_log!("{reference} -> {}", path.display());
    Ok(path)
}

/// POSIX dirname/basename split on `/`.
///
/// Trailing slashes are trimmed from the dirname unless it is made of slashes only.
pub fn split_dirname(path: &str) -> (&str, &str) {
    let index = path.rfind('/').map_or(0, |i| i + 1);
    let (head, base) = path.split_at(index);

    if head.bytes().all(|b| b == b'/') {
        (head, base)
    } else {
        (head.trim_end_matches('/'), base)
    }
}

pub fn strip_git_suffix(base: &str) -> &str {
    base.strip_suffix(GIT_SUFFIX).unwrap_or(base)
}

/// Strip leading `~` from every `/`-separated segment, keeping empty segments.
pub fn strip_home_prefixes(dir: &str) -> String {
    dir.split('/')
        .map(|segment| segment.trim_start_matches(HOME_PREFIX))
        .collect::<Vec<_>>()
        .join("/")
}
