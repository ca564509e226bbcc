//! Ordered property bags
//!
//! A `PropList` is an insertion-ordered mapping from string keys to tagged
//! [`Value`]s. Keys are unique; setting an existing key overwrites the value
//! in place, keeping the key's original position. Bags are owned by whoever
//! constructs them and handed to a request by move.
//!
//! Lookups are linear scans. Bags stay small (a handful of entries per
//! control message), so a `Vec` beats a hash map here and keeps iteration
//! order trivially stable.

use crate::value::Value;

/// Insertion-ordered string-keyed property bag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropList {
    entries: Vec<(String, Value)>,
}

impl PropList {
    /// Create an empty property bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, overwriting any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Set `key` to a string value.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, Value::Str(value.into()));
    }

    /// Set `key` to an unsigned integer value.
    pub fn set_uint(&mut self, key: impl Into<String>, value: u32) {
        self.set(key, Value::Uint(value));
    }

    /// Set `key` to a signed integer value.
    pub fn set_int(&mut self, key: impl Into<String>, value: i32) {
        self.set(key, Value::Int(value));
    }

    /// Set `key` to a boolean value.
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, Value::Bool(value));
    }

    /// Get the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Get the string stored for `key`, if the entry exists and is a string.
    pub fn string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Get the unsigned integer stored for `key`, if the entry exists and is
    /// an unsigned integer.
    pub fn uint(&self, key: &str) -> Option<u32> {
        self.get(key).and_then(Value::as_uint)
    }

    /// Get the signed integer stored for `key`, if the entry exists and is a
    /// signed integer.
    pub fn int(&self, key: &str) -> Option<i32> {
        self.get(key).and_then(Value::as_int)
    }

    /// Get the boolean stored for `key`, if the entry exists and is a bool.
    pub fn bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Whether the bag contains `key`, regardless of the value type.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Number of entries in the bag.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copy every entry of `other` into this bag, overwriting on key clash.
    pub fn merge(&mut self, other: &PropList) {
        for (key, value) in other.iter() {
            self.set(key, value.clone());
        }
    }
}
