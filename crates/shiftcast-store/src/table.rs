// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic key-value table backing one entity collection.

use std::fmt;
use std::hash::Hash;

use dashmap::DashMap;

/// A concurrent key-value table.
///
/// Reads clone values out so no map shard lock is ever held across an await
/// point. Consistency of read-modify-write cycles on `ShiftFanout` records is
/// the job of the per-shift critical section in the engine, not of this table.
/// Enumeration order of [`all`](Self::all) is arbitrary.
pub struct KvTable<K, V> {
    inner: DashMap<K, V>,
}

// Manual impl: DashMap's Debug needs `K: Eq + Hash` on top of the usual
// `Debug` bounds, which a derive would not add.
impl<K, V> fmt::Debug for KvTable<K, V>
where
    K: Eq + Hash + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KvTable").field("inner", &self.inner).finish()
    }
}

impl<K, V> KvTable<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }

    /// Inserts or replaces the value under `key`.
    pub fn put(&self, key: K, value: V) {
        self.inner.insert(key, value);
    }

    /// Returns a clone of the value under `key`, if any.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.get(key).map(|entry| entry.value().clone())
    }

    /// Removes the value under `key`, returning it if present.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.remove(key).map(|(_, value)| value)
    }

    /// Returns clones of all stored values, in arbitrary order.
    pub fn all(&self) -> Vec<V> {
        self.inner
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&self) {
        self.inner.clear();
    }
}

impl<K, V> Default for KvTable<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_replace() {
        let table: KvTable<String, u32> = KvTable::new();
        assert!(table.is_empty());

        table.put("a".into(), 1);
        table.put("b".into(), 2);
        assert_eq!(table.get(&"a".into()), Some(1));
        assert_eq!(table.len(), 2);

        table.put("a".into(), 10);
        assert_eq!(table.get(&"a".into()), Some(10));
        assert_eq!(table.len(), 2, "replace must not grow the table");
    }

    #[test]
    fn remove_and_clear() {
        let table: KvTable<String, u32> = KvTable::new();
        table.put("a".into(), 1);
        assert_eq!(table.remove(&"a".into()), Some(1));
        assert_eq!(table.remove(&"a".into()), None);

        table.put("b".into(), 2);
        table.clear();
        assert!(table.is_empty());
    }

    #[test]
    fn debug_renders_contents() {
        let table: KvTable<String, u32> = KvTable::new();
        table.put("a".into(), 1);
        let rendered = format!("{table:?}");
        assert!(rendered.starts_with("KvTable"));
        assert!(rendered.contains("\"a\""));
    }

    #[test]
    fn all_returns_every_value() {
        let table: KvTable<u32, u32> = KvTable::new();
        for i in 0..5 {
            table.put(i, i * 10);
        }
        let mut values = table.all();
        values.sort_unstable();
        assert_eq!(values, vec![0, 10, 20, 30, 40]);
    }
}
