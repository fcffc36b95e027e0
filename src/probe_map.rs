//! Open-addressing hash map with conflict-marked linear probing.

use std::borrow::Borrow;

use crate::hashing::ProbeHash;
use crate::probe_table::{Iter as TableIter, ProbeTable};

/// Default slot count for a freshly created map.
const DEFAULT_CAPACITY: usize = 16;

/// A key-value map over the conflict-marked linear-probing engine.
///
/// Keys need [`ProbeHash`] and equality; the digest contract is fixed (see
/// [`crate::hashing`]), so float keys are admissible through their bit
/// patterns. Iteration order follows physical slots and is not guaranteed
/// stable across insertions, removals, or growth.
///
/// A missing key is never an error: `get` and `remove` report `None`.
///
/// # Examples
///
/// ```
/// use coffer::ProbeMap;
///
/// let mut map = ProbeMap::new();
/// map.insert("apple".to_string(), 1);
/// map.insert("banana".to_string(), 2);
/// assert_eq!(map.get("apple"), Some(&1));
///
/// map.insert("apple".to_string(), 10);
/// assert_eq!(map.get("apple"), Some(&10));
///
/// assert_eq!(map.remove("apple"), Some(10));
/// assert_eq!(map.get("apple"), None);
/// ```
#[derive(Debug, Clone)]
pub struct ProbeMap<K, V> {
    /// The shared probing engine
    table: ProbeTable<K, V>,
}

impl<K, V> Default for ProbeMap<K, V>
where
    K: ProbeHash + PartialEq + Default,
    V: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ProbeMap<K, V>
where
    K: ProbeHash + PartialEq + Default,
    V: Default,
{
    /// Creates an empty map with the default initial capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty map with the given initial slot count.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { table: ProbeTable::with_capacity(capacity) }
    }

    /// Inserts a key-value pair, returning the previous value when the key
    /// was already present. Grows first when the insertion would push the
    /// load factor over its threshold.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.table.insert(key, value)
    }

    /// Looks up a value by key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ProbeHash + PartialEq + ?Sized,
    {
        self.table.get(key)
    }

    /// Looks up a value by key, mutably.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ProbeHash + PartialEq + ?Sized,
    {
        self.table.get_mut(key)
    }

    /// Returns true when the key is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ProbeHash + PartialEq + ?Sized,
    {
        self.table.contains(key)
    }

    /// Removes a key, returning its value when it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ProbeHash + PartialEq + ?Sized,
    {
        self.table.remove(key).map(|(_, value)| value)
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true when the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// Current slot count.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Live entries as a fraction of capacity.
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Drops every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Iterates entries in physical-slot order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { inner: self.table.iter() }
    }

    /// Iterates keys in physical-slot order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Iterates values in physical-slot order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }
}

/// Iterator over a map's entries; order is capacity-dependent.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    /// Engine iterator over occupied slots
    inner: TableIter<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, K, V> IntoIterator for &'a ProbeMap<K, V>
where
    K: ProbeHash + PartialEq + Default,
    V: Default,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Extend<(K, V)> for ProbeMap<K, V>
where
    K: ProbeHash + PartialEq + Default,
    V: Default,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ProbeMap<K, V>
where
    K: ProbeHash + PartialEq + Default,
    V: Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Key whose digest is forced, for steering collisions in tests.
    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    struct Forced {
        /// The forced digest
        hash: u64,
        /// Identity for equality
        name: &'static str,
    }

    impl ProbeHash for Forced {
        fn probe_hash(&self) -> u64 {
            self.hash
        }
    }

    fn forced(hash: u64, name: &'static str) -> Forced {
        Forced { hash, name }
    }

    #[test]
    fn test_insert_get_remove() {
        let mut map: ProbeMap<String, i32> = ProbeMap::new();
        assert_eq!(map.insert("one".to_string(), 1), None);
        assert_eq!(map.insert("two".to_string(), 2), None);
        assert_eq!(map.get("one"), Some(&1));
        assert_eq!(map.get("two"), Some(&2));
        assert_eq!(map.get("three"), None);

        assert_eq!(map.remove("one"), Some(1));
        assert_eq!(map.remove("one"), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_removal_does_not_break_collided_chain() {
        // "a" and "c" collide in a capacity-4 table; "b" does not.
        let mut map: ProbeMap<Forced, i32> = ProbeMap::with_capacity(4);
        map.insert(forced(0, "a"), 1);
        map.insert(forced(1, "b"), 2);
        map.insert(forced(0, "c"), 3); // displaced past "a" and "b"
        assert_eq!(map.capacity(), 4);

        assert_eq!(map.remove(&forced(0, "a")), Some(1));
        // "c" lies beyond the removed slot in the same probe chain; a bare
        // occupied-flag scheme would lose it here.
        assert_eq!(map.get(&forced(0, "c")), Some(&3));
        assert_eq!(map.get(&forced(1, "b")), Some(&2));
        assert_eq!(map.get(&forced(0, "a")), None);
    }

    #[test]
    fn test_remove_subset_keeps_rest_retrievable() {
        let mut map: ProbeMap<u64, u64> = ProbeMap::new();
        for key in 0..100 {
            map.insert(key, key + 1000);
        }
        for key in (0..100).step_by(3) {
            assert_eq!(map.remove(&key), Some(key + 1000));
        }
        for key in 0..100 {
            if key % 3 == 0 {
                assert_eq!(map.get(&key), None);
            } else {
                assert_eq!(map.get(&key), Some(&(key + 1000)));
            }
        }
    }

    #[test]
    fn test_borrowed_key_lookup() {
        let mut map: ProbeMap<String, i32> = ProbeMap::new();
        map.insert("hello".to_string(), 1);
        assert!(map.contains_key("hello"));
        assert!(!map.contains_key("world"));
        assert_eq!(map.remove("hello"), Some(1));
    }

    #[test]
    fn test_float_keys_hash_by_bit_pattern() {
        let mut map: ProbeMap<f64, &str> = ProbeMap::new();
        map.insert(1.5, "one and a half");
        map.insert(-2.25, "minus nine quarters");
        assert_eq!(map.get(&1.5), Some(&"one and a half"));
        assert_eq!(map.get(&-2.25), Some(&"minus nine quarters"));
        assert_eq!(map.get(&3.0), None);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut map: ProbeMap<u32, i32> = ProbeMap::new();
        map.insert(5, 1);
        if let Some(value) = map.get_mut(&5) {
            *value += 10;
        }
        assert_eq!(map.get(&5), Some(&11));
    }

    #[test]
    fn test_iteration_yields_each_live_entry_once() {
        let mut map: ProbeMap<u64, u64> = ProbeMap::new();
        for key in 0..20 {
            map.insert(key, key);
        }
        map.remove(&7);
        let mut seen: Vec<u64> = map.keys().copied().collect();
        seen.sort_unstable();
        let expected: Vec<u64> = (0..20).filter(|k| *k != 7).collect();
        assert_eq!(seen, expected);
        assert_eq!(map.values().count(), 19);
    }

    #[test]
    fn test_clear() {
        let mut map: ProbeMap<u32, u32> = (0..10).map(|k| (k, k)).collect();
        let cap = map.capacity();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.capacity(), cap);
        assert_eq!(map.get(&3), None);
        map.insert(3, 4);
        assert_eq!(map.get(&3), Some(&4));
    }

    mod properties {
        use std::collections::HashMap;

        use proptest::prelude::*;

        use super::ProbeMap;

        #[derive(Clone, Debug)]
        enum Op {
            Insert(u8, i32),
            Remove(u8),
            Get(u8),
            Contains(u8),
        }

        fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
            proptest::collection::vec(
                prop_oneof![
                    (any::<u8>(), any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
                    any::<u8>().prop_map(Op::Remove),
                    any::<u8>().prop_map(Op::Get),
                    any::<u8>().prop_map(Op::Contains),
                ],
                1..200,
            )
        }

        // State machine against the std HashMap model: membership reflects
        // exactly the most recent insert/remove per key, regardless of
        // probe-chain perturbation from unrelated operations.
        proptest! {
            #[test]
            fn prop_matches_hashmap_model(ops in arb_ops()) {
                let mut sut: ProbeMap<u64, i32> = ProbeMap::with_capacity(4);
                let mut model: HashMap<u64, i32> = HashMap::new();

                for op in ops {
                    match op {
                        Op::Insert(k, v) => {
                            // Narrow key space forces heavy collisions.
                            let k = u64::from(k % 32);
                            prop_assert_eq!(sut.insert(k, v), model.insert(k, v));
                        }
                        Op::Remove(k) => {
                            let k = u64::from(k % 32);
                            prop_assert_eq!(sut.remove(&k), model.remove(&k));
                        }
                        Op::Get(k) => {
                            let k = u64::from(k % 32);
                            prop_assert_eq!(sut.get(&k), model.get(&k));
                        }
                        Op::Contains(k) => {
                            let k = u64::from(k % 32);
                            prop_assert_eq!(sut.contains_key(&k), model.contains_key(&k));
                        }
                    }
                    prop_assert_eq!(sut.len(), model.len());
                }

                let mut seen: Vec<(u64, i32)> = sut.iter().map(|(k, v)| (*k, *v)).collect();
                let mut expected: Vec<(u64, i32)> = model.into_iter().collect();
                seen.sort_unstable();
                expected.sort_unstable();
                prop_assert_eq!(seen, expected);
            }
        }

        // String keys exercise the polynomial digest path end to end.
        proptest! {
            #[test]
            fn prop_string_keys_roundtrip(keys in proptest::collection::hash_set("[a-c]{0,4}", 1..30)) {
                let mut sut: ProbeMap<String, usize> = ProbeMap::with_capacity(2);
                for (i, key) in keys.iter().enumerate() {
                    sut.insert(key.clone(), i);
                }
                for (i, key) in keys.iter().enumerate() {
                    prop_assert_eq!(sut.get(key.as_str()), Some(&i));
                }
                prop_assert_eq!(sut.len(), keys.len());
            }
        }
    }
}
