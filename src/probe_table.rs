//! Shared open-addressing engine behind [`crate::ProbeMap`] and
//! [`crate::ProbeSet`].
//!
//! Collisions are resolved by linear probing with a per-slot `conflict`
//! marker instead of tombstones. Whenever an insertion walks past an
//! occupied slot, that slot is marked `conflict`; a lookup may stop probing
//! at the first slot whose marker is clear, because no record was ever
//! displaced past it. Removal clears only `occupied`, never `conflict`, so
//! every other record's probe chain stays traversable while the slot itself
//! becomes reusable. Conflict markers are monotonic within a table
//! generation and are rebuilt from scratch on rehash, the only point where
//! probe chains ever shorten.

use std::borrow::Borrow;
use std::mem;

use crate::buffer::Buffer;
use crate::hashing::ProbeHash;

/// Rehash trigger: grow before an insertion once live records exceed this
/// percentage of capacity.
const LOAD_FACTOR_PERCENT: usize = 60;

/// One record: a key and its payload (`()` for sets).
#[derive(Debug, Clone, Default)]
pub(crate) struct Slot<K, V> {
    /// The record's key
    pub(crate) key: K,
    /// The record's payload
    pub(crate) value: V,
}

/// Per-slot bookkeeping, parallel to the record array.
#[derive(Debug, Clone, Copy, Default)]
struct SlotStatus {
    /// True iff the slot holds a live record
    occupied: bool,
    /// True iff some insertion probed past this slot; cleared only by
    /// rehash, never by removal
    conflict: bool,
}

/// The open-addressing table engine.
#[derive(Debug, Clone)]
pub(crate) struct ProbeTable<K, V> {
    /// Record storage, replaced wholesale on rehash
    slots: Buffer<Slot<K, V>>,
    /// Occupancy and conflict bits, same length as `slots`
    status: Buffer<SlotStatus>,
    /// Number of live records
    len: usize,
}

impl<K, V> ProbeTable<K, V> {
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Live records as a fraction of capacity.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn load_factor(&self) -> f64 {
        if self.capacity() == 0 {
            return 0.0;
        }
        self.len as f64 / self.capacity() as f64
    }

    fn over_threshold(&self) -> bool {
        self.len.saturating_mul(100) > self.capacity().saturating_mul(LOAD_FACTOR_PERCENT)
    }

    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter { table: self, index: 0 }
    }
}

impl<K, V> ProbeTable<K, V>
where
    K: ProbeHash + PartialEq + Default,
    V: Default,
{
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { slots: Buffer::allocate(capacity), status: Buffer::allocate(capacity), len: 0 }
    }

    /// Locates the slot holding `key`, probing linearly from its hash.
    ///
    /// Probing stops early at any slot with a clear conflict marker: no
    /// live record's chain can continue past it. Unoccupied slots with the
    /// marker set are stepped over, because the record they once displaced
    /// may still live further along. The probe count is bounded by the
    /// capacity for the degenerate case where every marker is set.
    fn find_slot<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ProbeHash + PartialEq + ?Sized,
    {
        let cap = self.capacity();
        if cap == 0 {
            return None;
        }
        let mut index = (key.probe_hash() % cap as u64) as usize;
        for _ in 0..cap {
            let status = self.status[index];
            if status.occupied && self.slots[index].key.borrow() == key {
                return Some(index);
            }
            if !status.conflict {
                return None;
            }
            index = (index + 1) % cap;
        }
        None
    }

    /// Inserts or overwrites, returning the previous payload when the key
    /// was already present. Grows first when the load factor threshold
    /// would otherwise be breached.
    ///
    /// A freed slot encountered mid-chain is remembered but not taken
    /// immediately: the key may still live further along, past slots its
    /// removal left conflict-marked, and placing early would duplicate it.
    /// Only once a clear marker proves the key absent is the remembered
    /// slot (or a fresh one past the chain's end) filled.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.capacity() == 0 || self.over_threshold() {
            self.rehash();
        }
        let cap = self.capacity();
        let mut index = (key.probe_hash() % cap as u64) as usize;
        let mut free = None;
        // Every advance steps over a conflict-marked slot, so the scan is
        // bounded by the capacity for the degenerate all-marked case.
        for _ in 0..cap {
            let status = self.status[index];
            if status.occupied {
                if self.slots[index].key == key {
                    return Some(mem::replace(&mut self.slots[index].value, value));
                }
            } else if free.is_none() {
                free = Some(index);
            }
            if !status.conflict {
                break;
            }
            index = (index + 1) % cap;
        }
        let target = if let Some(slot) = free {
            slot
        } else {
            // The chain ended at an occupied slot; extend it by marking
            // conflicts up to the next free slot, which the load factor
            // threshold guarantees exists.
            loop {
                if !self.status[index].occupied {
                    break index;
                }
                self.status[index].conflict = true;
                index = (index + 1) % cap;
            }
        };
        self.slots[target] = Slot { key, value };
        self.status[target].occupied = true;
        self.len += 1;
        None
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ProbeHash + PartialEq + ?Sized,
    {
        self.find_slot(key).map(|i| &self.slots[i].value)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ProbeHash + PartialEq + ?Sized,
    {
        self.find_slot(key).map(|i| &mut self.slots[i].value)
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ProbeHash + PartialEq + ?Sized,
    {
        self.find_slot(key).is_some()
    }

    /// Removes a record, clearing only its occupancy bit. The conflict
    /// marker stays, which is what keeps every other chain intact.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ProbeHash + PartialEq + ?Sized,
    {
        let index = self.find_slot(key)?;
        self.status[index].occupied = false;
        self.len -= 1;
        let slot = mem::take(&mut self.slots[index]);
        Some((slot.key, slot.value))
    }

    /// Drops every record, keeping the current capacity.
    pub(crate) fn clear(&mut self) {
        for status in self.status.as_mut_slice() {
            *status = SlotStatus::default();
        }
        for slot in self.slots.as_mut_slice() {
            let _ = mem::take(slot);
        }
        self.len = 0;
    }

    /// Replaces the record and status arrays with larger ones, re-placing
    /// every live record with the same probe-and-mark pass as `insert`.
    /// All conflict markers start clear and are rebuilt from the
    /// reinsertions.
    fn rehash(&mut self) {
        let new_cap = self.capacity().saturating_mul(2).saturating_add(1);
        let mut slots: Buffer<Slot<K, V>> = Buffer::allocate(new_cap);
        let mut status: Buffer<SlotStatus> = Buffer::allocate(new_cap);

        for i in 0..self.capacity() {
            if !self.status[i].occupied {
                continue;
            }
            let record = mem::take(&mut self.slots[i]);
            let mut index = (record.key.probe_hash() % new_cap as u64) as usize;
            loop {
                if !status[index].occupied {
                    slots[index] = record;
                    status[index].occupied = true;
                    break;
                }
                status[index].conflict = true;
                index = (index + 1) % new_cap;
            }
        }

        self.slots = slots;
        self.status = status;
    }
}

/// Iterator over occupied slots in ascending physical order. The order is
/// capacity-dependent and not stable across mutations.
#[derive(Debug)]
pub(crate) struct Iter<'a, K, V> {
    /// The table being walked
    table: &'a ProbeTable<K, V>,
    /// Next physical slot to examine
    index: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.table.capacity() {
            let i = self.index;
            self.index += 1;
            if self.table.status[i].occupied {
                let slot = &self.table.slots[i];
                return Some((&slot.key, &slot.value));
            }
        }
        None
    }
}
