//! Command implementations
//!
//! - `clone`: Resolve the target directory and delegate to `git clone`

pub mod clone;
