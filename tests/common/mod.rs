#![allow(dead_code)]

pub mod command;
pub mod file;

/// Canonical form of a temp path, so `/tmp` symlinks do not leak into expectations
pub fn canonical(path: &std::path::Path) -> std::path::PathBuf {
    path.canonicalize().expect("Failed to canonicalize path")
}

/// Where `git-dolly` clones a `file://` reference pointing at `origin`
pub fn file_target(root: &std::path::Path, origin: &std::path::Path) -> std::path::PathBuf {
    let origin = origin.strip_prefix("/").unwrap_or(origin);
    root.join("file").join(origin)
}
