//! End-to-end transform from configuration text to a groups fragment.

use crate::core::GroupOptions;
use crate::error::{ExtractError, Result};
use crate::extract::{NameExtractor, proxies_block};
use crate::grouping::GroupFormatter;
use serde::Serialize;

/// Result of a successful [`generate`] run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generated {
    /// Rendered `proxy-groups:` fragment.
    pub text: String,
    /// Number of proxy names extracted.
    pub name_count: usize,
    /// Number of groups rendered.
    pub group_count: usize,
}

/// Extracts proxy names from `config` and renders them as groups.
///
/// # Errors
///
/// - [`ExtractError::MissingSection`] if `config` has no `proxies:` marker.
/// - [`ExtractError::NoNamesParsed`] if the block yields no names.
/// - [`crate::error::GroupError::InvalidChunkSize`] if the chunk size is zero.
///
/// # Examples
///
/// ```
/// use clash_groups::{GroupOptions, generate};
///
/// let config = "proxies:\n  - { name: 'HK-01', server: x }\nproxy-groups:\n";
/// let out = generate(config, &GroupOptions::new(8, "Group")).unwrap();
/// assert_eq!(out.group_count, 1);
/// assert!(out.text.ends_with("proxies: ['HK-01'] }"));
/// ```
pub fn generate(config: &str, options: &GroupOptions) -> Result<Generated> {
    let block = proxies_block(config)?;
    let names = NameExtractor::new().extract(block);
    if names.is_empty() {
        return Err(ExtractError::NoNamesParsed.into());
    }

    let formatter = GroupFormatter::new(options);
    let groups = formatter.group(&names)?;
    let text = formatter.render(&groups);

    tracing::info!(
        names = names.len(),
        groups = groups.len(),
        "generated proxy groups"
    );

    Ok(Generated {
        text,
        name_count: names.len(),
        group_count: groups.len(),
    })
}
