//! Proxy group representation.
//!
//! A proxy group is a named `select` selector holding a consecutive
//! window of proxy names taken from the source configuration.

use serde::Serialize;

/// Default number of proxy names per group.
pub const DEFAULT_CHUNK_SIZE: usize = 8;

/// Default group name prefix.
pub const DEFAULT_GROUP_PREFIX: &str = "节点分组";

/// A generated proxy group.
///
/// # Examples
///
/// ```
/// use clash_groups::core::ProxyGroup;
///
/// let group = ProxyGroup::new("Group", 1, vec!["HK-01".to_string()]);
/// assert_eq!(group.name, "Group 1");
/// assert_eq!(group.proxies.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyGroup {
    /// Position of the group in the output (1-based).
    pub index: usize,

    /// Display name, `prefix + " " + index`.
    pub name: String,

    /// Proxy names in source order.
    pub proxies: Vec<String>,
}

impl ProxyGroup {
    /// Creates a group, deriving its display name from `prefix` and `index`.
    #[must_use]
    pub fn new(prefix: &str, index: usize, proxies: Vec<String>) -> Self {
        Self {
            index,
            name: format!("{prefix} {index}"),
            proxies,
        }
    }
}

/// Settings that shape the generated groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOptions {
    /// Maximum number of proxy names per group.
    pub chunk_size: usize,

    /// Prefix used for group display names.
    pub prefix: String,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            prefix: DEFAULT_GROUP_PREFIX.to_string(),
        }
    }
}

impl GroupOptions {
    /// Creates options with a custom chunk size and prefix.
    #[must_use]
    pub fn new(chunk_size: usize, prefix: impl Into<String>) -> Self {
        Self {
            chunk_size,
            prefix: prefix.into(),
        }
    }
}
