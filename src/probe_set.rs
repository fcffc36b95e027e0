//! Open-addressing hash set over the same probing engine as
//! [`crate::ProbeMap`].

use std::borrow::Borrow;

use crate::hashing::ProbeHash;
use crate::probe_table::{Iter as TableIter, ProbeTable};

/// Default slot count for a freshly created set.
const DEFAULT_CAPACITY: usize = 16;

/// A set of hashable values, stored as the map engine with unit payloads.
///
/// Shares every probing property with [`crate::ProbeMap`]: conflict-marked
/// linear probing, tombstone-free removal, growth at the load factor
/// threshold, unordered iteration.
#[derive(Debug, Clone)]
pub struct ProbeSet<T> {
    /// The shared probing engine with unit payloads
    table: ProbeTable<T, ()>,
}

impl<T> Default for ProbeSet<T>
where
    T: ProbeHash + PartialEq + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ProbeSet<T>
where
    T: ProbeHash + PartialEq + Default,
{
    /// Creates an empty set with the default initial capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty set with the given initial slot count.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { table: ProbeTable::with_capacity(capacity) }
    }

    /// Adds a value; returns true when it was not already present.
    pub fn put(&mut self, value: T) -> bool {
        self.table.insert(value, ()).is_none()
    }

    /// Returns true when the value is present.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ProbeHash + PartialEq + ?Sized,
    {
        self.table.contains(value)
    }

    /// Removes a value; returns true when it was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ProbeHash + PartialEq + ?Sized,
    {
        self.table.remove(value).is_some()
    }

    /// Number of live values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true when the set has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// Current slot count.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Live values as a fraction of capacity.
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Drops every value, keeping the current capacity.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Iterates values in physical-slot order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.table.iter() }
    }
}

/// Iterator over a set's values; order is capacity-dependent.
#[derive(Debug)]
pub struct Iter<'a, T> {
    /// Engine iterator over occupied slots
    inner: TableIter<'a, T, ()>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(value, _)| value)
    }
}

impl<'a, T> IntoIterator for &'a ProbeSet<T>
where
    T: ProbeHash + PartialEq + Default,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for ProbeSet<T>
where
    T: ProbeHash + PartialEq + Default,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.put(value);
        }
    }
}

impl<T> FromIterator<T> for ProbeSet<T>
where
    T: ProbeHash + PartialEq + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
