//! # clash-groups
//!
//! Regroups the proxies of a Clash configuration into fixed-size
//! `select` proxy groups.
//!
//! The transform has two stages:
//!
//! - **Extraction**: cut the text between `proxies:` and `proxy-groups:`
//!   and pull one `name:` value out of each line, tolerating comments and
//!   stray lines
//! - **Grouping**: split the names into chunks and render each chunk as a
//!   flow-style `proxy-groups` entry
//!
//! No YAML parser is involved in either stage.
//!
//! ```
//! use clash_groups::{GroupOptions, generate};
//!
//! let config = "proxies:
//!   - { name: 'HK-01', server: x }
//!   - { name: \"US-02\", server: y }
//!   - { name: JP-03, server: z }
//! proxy-groups:
//! ";
//! let out = generate(config, &GroupOptions::new(2, "Group")).unwrap();
//! assert_eq!(
//!     out.text,
//!     "proxy-groups:\n    - { name: 'Group 1', type: select, proxies: ['HK-01', 'US-02'] }\n    - { name: 'Group 2', type: select, proxies: ['JP-03'] }"
//! );
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod extract;
pub mod grouping;
pub mod io;
pub mod logging;
pub mod pipeline;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

pub use self::core::{DEFAULT_CHUNK_SIZE, DEFAULT_GROUP_PREFIX, GroupOptions, ProxyGroup};
pub use extract::{END_MARKER, NameExtractor, START_MARKER, extract_names, locate_section};
pub use grouping::{GroupFormatter, partition, render_groups, wrap_yaml_name};
pub use pipeline::{Generated, generate};

pub use cli::{Cli, OutputFormat};
