use indexmap::IndexMap;

use crate::collection::{Collection, Result};

/// Substitution keys and their replacement strings for one collection.
///
/// Entries iterate in first-declaration order. Re-inserting a key replaces its
/// value and keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableStore {
    entries: IndexMap<String, String>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the store from the collection's declared `variable` list
    pub fn build(collection: &Collection) -> Result<Self> {
        let mut store = VariableStore::new();
        for variable in collection.variables()? {
            store.insert(variable.key, variable.value);
        }
        Ok(store)
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = VariableStore::new();
        for (key, value) in iter {
            store.insert(key, value);
        }
        store
    }
}
