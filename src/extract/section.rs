//! Locating the proxies block inside a configuration file.
//!
//! The search is purely textual: one `find` for each marker, no
//! tokenizing and no indentation awareness.

use crate::error::{ExtractError, Result};

/// Marker that opens the proxies block.
pub const START_MARKER: &str = "proxies:";

/// Marker that closes the proxies block.
pub const END_MARKER: &str = "proxy-groups:";

/// Returns the text strictly between `start_marker` and the first
/// `end_marker` that follows it.
///
/// When `end_marker` never appears after the start marker, everything up
/// to the end of `text` is returned.
///
/// # Errors
///
/// Returns [`ExtractError::MissingSection`] if `start_marker` does not
/// occur in `text`.
///
/// # Examples
///
/// ```
/// use clash_groups::extract::locate_section;
///
/// let text = "proxies:\n  - a\nproxy-groups:\n  - b\n";
/// let block = locate_section(text, "proxies:", "proxy-groups:").unwrap();
/// assert_eq!(block, "\n  - a\n");
/// ```
pub fn locate_section<'a>(text: &'a str, start_marker: &str, end_marker: &str) -> Result<&'a str> {
    let Some(start) = text.find(start_marker) else {
        return Err(ExtractError::MissingSection {
            marker: start_marker.to_string(),
        }
        .into());
    };

    let body = &text[start + start_marker.len()..];
    let block = body.find(end_marker).map_or(body, |end| &body[..end]);

    tracing::debug!(
        offset = start,
        len = block.len(),
        terminated = block.len() != body.len(),
        "located {start_marker} section"
    );

    Ok(block)
}

/// Returns the proxies block using the fixed Clash markers.
///
/// # Errors
///
/// Returns [`ExtractError::MissingSection`] if the input has no
/// `proxies:` marker.
pub fn proxies_block(text: &str) -> Result<&str> {
    locate_section(text, START_MARKER, END_MARKER)
}
