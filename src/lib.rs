//! Clone git repositories into a directory tree mirroring their host and namespace
//!
//! `git-dolly https://scm.com/team/project.git` clones into `~/src/scm.com/team/project`,
//! so repositories from different hosts and namespaces never collide on disk.
//!
//! - `artifacts`: Repository reference parsing and path resolution (pure, no I/O)
//! - `areas`: Settings, target directory handling and the `Dolly` facade
//! - `commands`: The clone command delegating to `git clone`

/// Macro for debug logging that is enabled with the debug_resolve feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("Resolved {} into {}", reference, path.display());
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_resolve")]
        {
            eprintln!($($arg)*);
        }
        #[cfg(not(feature = "debug_resolve"))]
        {
            let _ = format_args!($($arg)*);
        }
    };
}

pub mod areas;
pub mod artifacts;
pub mod commands;
