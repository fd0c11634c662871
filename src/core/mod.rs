//! Core domain models for clash-groups.
//!
//! Pure data types with no I/O dependencies.

pub mod group;

pub use group::{DEFAULT_CHUNK_SIZE, DEFAULT_GROUP_PREFIX, GroupOptions, ProxyGroup};
