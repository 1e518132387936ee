//! Everything that touches the environment or the filesystem
//!
//! - `dolly`: Facade tying settings, workspace and output together
//! - `settings`: Clone root from `GIT_DOLLY_PATH` or the home directory
//! - `workspace`: Target resolution, occupancy checks and parent directory creation

pub mod dolly;
pub mod settings;
pub mod workspace;
