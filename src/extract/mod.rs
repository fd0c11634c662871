//! Proxy name extraction.
//!
//! Extraction runs in two steps: [`locate_section`] cuts the proxies
//! block out of the raw configuration text, then [`NameExtractor`] scans
//! it line by line. Neither step uses a YAML parser.

pub mod matcher;
pub mod section;

pub use matcher::{LineMatch, NameExtractor, NameForm, extract_names};
pub use section::{END_MARKER, START_MARKER, locate_section, proxies_block};
