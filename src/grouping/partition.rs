//! Fixed-size partitioning of proxy names.

use crate::core::{GroupOptions, ProxyGroup};
use crate::error::{GroupError, Result};

/// Splits `names` into consecutive groups of at most `options.chunk_size`.
///
/// Order is preserved across and within groups; only the last group may
/// be shorter. Group indices start at 1.
///
/// # Errors
///
/// Returns [`GroupError::InvalidChunkSize`] if `options.chunk_size` is zero.
///
/// # Examples
///
/// ```
/// use clash_groups::core::GroupOptions;
/// use clash_groups::grouping::partition;
///
/// let names: Vec<String> = ["a", "b", "c"].iter().map(ToString::to_string).collect();
/// let groups = partition(&names, &GroupOptions::new(2, "G")).unwrap();
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[1].name, "G 2");
/// assert_eq!(groups[1].proxies, vec!["c"]);
/// ```
pub fn partition(names: &[String], options: &GroupOptions) -> Result<Vec<ProxyGroup>> {
    if options.chunk_size == 0 {
        return Err(GroupError::InvalidChunkSize {
            size: options.chunk_size,
        }
        .into());
    }

    let groups: Vec<ProxyGroup> = names
        .chunks(options.chunk_size)
        .enumerate()
        .map(|(i, chunk)| ProxyGroup::new(&options.prefix, i + 1, chunk.to_vec()))
        .collect();

    tracing::debug!(
        names = names.len(),
        chunk_size = options.chunk_size,
        groups = groups.len(),
        "partitioned proxy names"
    );

    Ok(groups)
}
