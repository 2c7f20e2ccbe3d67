use std::collections::BTreeSet;

/// Directory inside a JEX archive that holds attachment files.
pub const RESOURCE_PREFIX: &str = "resources/";

/// Length of a Joplin resource id.
pub const RESOURCE_ID_LEN: usize = 32;

/// Resource ids an export references.
pub type ReferencedIds = BTreeSet<String>;

/// Recover resource ids from archive entry names.
///
/// Keeps names under [`RESOURCE_PREFIX`], strips the prefix and keeps the
/// first [`RESOURCE_ID_LEN`] characters. The bare directory entry is ignored.
pub fn referenced_ids<I, S>(names: I) -> ReferencedIds
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|name| {
            let rest = name.as_ref().strip_prefix(RESOURCE_PREFIX)?;
            let id: String = rest.chars().take(RESOURCE_ID_LEN).collect();
            (!id.is_empty()).then_some(id)
        })
        .collect()
}
