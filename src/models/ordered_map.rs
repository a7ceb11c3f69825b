//! String-keyed associative array that remembers insertion order.
//!
//! Boards list their symbols in the order they were declared, so plain
//! `HashMap` iteration is not enough. Entries live in a `Vec` and a side
//! index maps each key to its slot.

use std::collections::HashMap;
use thiserror::Error;

/// Errors raised by [`OrderedMap`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// Insertion was attempted with an empty key.
    #[error("key cannot be empty")]
    EmptyKey,
    /// Lookup for a key that is not stored.
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

/// Insertion-ordered map from string keys to values.
///
/// # Invariants
///
/// - Keys are unique and never empty
/// - `keys()` yields keys in first-insertion order; overwriting a key keeps its slot
/// - Entries are never removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> OrderedMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Stores `value` under `key`, returning the value it replaced.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::EmptyKey`] if `key` is empty; the map is left untouched.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Result<Option<V>, MapError> {
        let key = key.into();
        if key.is_empty() {
            return Err(MapError::EmptyKey);
        }

        if let Some(&slot) = self.index.get(&key) {
            let previous = std::mem::replace(&mut self.entries[slot].1, value);
            return Ok(Some(previous));
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        Ok(None)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<&V, MapError> {
        self.index
            .get(key)
            .map(|&slot| &self.entries[slot].1)
            .ok_or_else(|| MapError::KeyNotFound(key.to_string()))
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut V, MapError> {
        match self.index.get(key) {
            Some(&slot) => Ok(&mut self.entries[slot].1),
            None => Err(MapError::KeyNotFound(key.to_string())),
        }
    }

    /// Slot of `key` in insertion order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Entry at `slot`. Slots come from [`OrderedMap::position`] and stay valid
    /// because entries are never removed.
    pub(crate) fn entry(&self, slot: usize) -> (&str, &V) {
        let (key, value) = &self.entries[slot];
        (key.as_str(), value)
    }

    /// Mutable entry at `slot`.
    pub(crate) fn entry_mut(&mut self, slot: usize) -> (&str, &mut V) {
        let (key, value) = &mut self.entries[slot];
        (key.as_str(), value)
    }

    /// Returns true if `key` is stored.
    pub fn has_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
