//! Proxy group construction and rendering.
//!
//! [`GroupFormatter`] windows the extracted names into [`ProxyGroup`]s
//! with [`partition`] and renders them as the `proxy-groups:` fragment.
//!
//! [`ProxyGroup`]: crate::core::ProxyGroup

pub mod partition;
pub mod render;

pub use partition::partition;
pub use render::{GROUPS_HEADER, render_group, render_groups, wrap_yaml_name};

use crate::core::{GroupOptions, ProxyGroup};
use crate::error::Result;

/// Partitions names into groups and renders them.
#[derive(Debug, Clone, Copy)]
pub struct GroupFormatter<'a> {
    options: &'a GroupOptions,
}

impl<'a> GroupFormatter<'a> {
    /// Creates a formatter with the given options.
    #[must_use]
    pub const fn new(options: &'a GroupOptions) -> Self {
        Self { options }
    }

    /// Splits `names` into groups.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GroupError::InvalidChunkSize`] if the chunk
    /// size is zero.
    pub fn group(&self, names: &[String]) -> Result<Vec<ProxyGroup>> {
        partition(names, self.options)
    }

    /// Renders groups as a `proxy-groups:` fragment.
    #[must_use]
    pub fn render(&self, groups: &[ProxyGroup]) -> String {
        render_groups(groups)
    }
}
