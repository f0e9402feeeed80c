//! Ordered map type for CTON objects.
//!
//! This module provides [`CtonMap`], a wrapper around [`IndexMap`] that
//! preserves insertion order for object fields, matching §3/§9's invariant
//! that key order is preserved on both encode and decode.
//!
//! ## Why `IndexMap`?
//!
//! - **Order preservation**: round-tripping an object through `encode`/
//!   `decode` must reproduce the original key order.
//! - **Deterministic output**: the same input tree always encodes to the
//!   same bytes.
//!
//! ## Examples
//!
//! ```rust
//! use cton::{CtonMap, CtonValue};
//!
//! let mut map = CtonMap::new();
//! map.insert("name".to_string(), CtonValue::from("Alice"));
//! map.insert("age".to_string(), CtonValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to [`crate::CtonValue`]s.
///
/// # Examples
///
/// ```rust
/// use cton::{CtonMap, CtonValue};
///
/// let mut map = CtonMap::new();
/// map.insert("first".to_string(), CtonValue::from(1));
/// map.insert("second".to_string(), CtonValue::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CtonMap(IndexMap<String, crate::CtonValue>);

impl CtonMap {
    #[must_use]
    pub fn new() -> Self {
        CtonMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        CtonMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value if the key
    /// already existed. Per §3, the codec does not deduplicate on its own —
    /// this method's "later write wins" behavior is what callers rely on to
    /// get that semantics.
    pub fn insert(&mut self, key: String, value: crate::CtonValue) -> Option<crate::CtonValue> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::CtonValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::CtonValue> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::CtonValue> {
        self.0.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::CtonValue> {
        self.0.iter()
    }
}

impl Default for CtonMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, crate::CtonValue>> for CtonMap {
    fn from(map: HashMap<String, crate::CtonValue>) -> Self {
        CtonMap(map.into_iter().collect())
    }
}

impl From<CtonMap> for HashMap<String, crate::CtonValue> {
    fn from(map: CtonMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for CtonMap {
    type Item = (String, crate::CtonValue);
    type IntoIter = indexmap::map::IntoIter<String, crate::CtonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CtonMap {
    type Item = (&'a String, &'a crate::CtonValue);
    type IntoIter = indexmap::map::Iter<'a, String, crate::CtonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::CtonValue)> for CtonMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::CtonValue)>>(iter: T) -> Self {
        CtonMap(IndexMap::from_iter(iter))
    }
}
