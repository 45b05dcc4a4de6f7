//! Shared utilities.
//!
//! Fingerprinting of serialized configuration and lexical path resolution.

pub mod hash;
pub mod path;
