//! File I/O for clash-groups.

pub mod file;

pub use file::{read_file, write_file};
