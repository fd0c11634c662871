//! Rendering proxy groups as a YAML fragment.
//!
//! Output is built with plain string formatting. It is a fragment meant
//! to be pasted into a Clash config, not a document validated against a
//! YAML grammar.

use crate::core::ProxyGroup;
use std::fmt::Write;

/// Header line of the rendered fragment.
pub const GROUPS_HEADER: &str = "proxy-groups:";

/// Indentation before each group entry.
const ENTRY_INDENT: &str = "    ";

/// Wraps a name in single quotes, doubling any embedded `'`.
///
/// No other escaping is applied.
///
/// # Examples
///
/// ```
/// use clash_groups::grouping::wrap_yaml_name;
///
/// assert_eq!(wrap_yaml_name("O'Hare-HK"), "'O''Hare-HK'");
/// assert_eq!(wrap_yaml_name("a, {b}"), "'a, {b}'");
/// ```
#[must_use]
pub fn wrap_yaml_name(name: &str) -> String {
    format!("'{}'", name.replace('\'', "''"))
}

/// Renders one group as a flow-style `select` entry.
#[must_use]
pub fn render_group(group: &ProxyGroup) -> String {
    let proxies = group
        .proxies
        .iter()
        .map(|name| wrap_yaml_name(name))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{ENTRY_INDENT}- {{ name: {}, type: select, proxies: [{proxies}] }}",
        wrap_yaml_name(&group.name)
    )
}

/// Renders the header line followed by one line per group.
///
/// Lines are joined with `\n` and there is no trailing newline. An empty
/// slice renders the header alone.
///
/// # Examples
///
/// ```
/// use clash_groups::core::ProxyGroup;
/// use clash_groups::grouping::render_groups;
///
/// let groups = vec![ProxyGroup::new("G", 1, vec!["HK".to_string()])];
/// assert_eq!(
///     render_groups(&groups),
///     "proxy-groups:\n    - { name: 'G 1', type: select, proxies: ['HK'] }"
/// );
/// ```
#[must_use]
pub fn render_groups(groups: &[ProxyGroup]) -> String {
    let mut output = String::from(GROUPS_HEADER);
    for group in groups {
        let _ = write!(output, "\n{}", render_group(group));
    }
    output
}
