//! Attribute filtering

use indexmap::IndexMap;

/// Copy of `props` without the entries named in `known`, order preserved
pub fn omit<V: Clone>(props: &IndexMap<String, V>, known: &[&str]) -> IndexMap<String, V> {
    props
        .iter()
        .filter(|(key, _)| !known.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
