//! Repository reference data structures and algorithms
//!
//! - `reference`: Reference parsing (URL form, SCP-like form) and path resolution

pub mod reference;
