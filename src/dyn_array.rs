//! Growable contiguous array with amortized O(1) append.

use std::mem;

use crate::buffer::Buffer;
use crate::error::Error;
use crate::view::{View, ViewMut};

/// Default physical capacity for a freshly created array.
const DEFAULT_CAPACITY: usize = 16;

/// A growable array over a single owned [`Buffer`].
///
/// The logical length never exceeds the physical capacity; a push at full
/// capacity reallocates through [`Buffer::grow`] before the write, doubling
/// capacity for amortized O(1) appends.
///
/// Popping from an empty array is reported as [`Error::Empty`] rather than
/// silently producing a default value, so caller bugs surface immediately.
#[derive(Debug, Clone)]
pub struct DynArray<T> {
    /// The owned storage block
    data: Buffer<T>,
    /// Number of live elements, always `<= data.capacity()`
    len: usize,
}

impl<T: Default> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> DynArray<T> {
    /// Creates an empty array with the default initial capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with the given initial capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Buffer::allocate(capacity), len: 0 }
    }

    /// Appends an element, growing the storage first when full.
    pub fn push_back(&mut self, value: T) {
        if self.len == self.data.capacity() {
            self.data.grow(1);
        }
        self.data[self.len] = value;
        self.len += 1;
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] when the array has no elements.
    pub fn pop_back(&mut self) -> Result<T, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        self.len -= 1;
        Ok(mem::take(&mut self.data[self.len]))
    }

    /// Ensures room for `additional` more elements plus one spare trailing
    /// slot, growing at most once.
    ///
    /// The spare slot is the contract the crate's string consumers rely on
    /// for terminator bookkeeping: after `reserve(n)`, `capacity - len > n`.
    pub fn reserve(&mut self, additional: usize) {
        if self.data.capacity() - self.len <= additional {
            self.data.grow(additional + 1);
        }
    }

    /// Drops all elements, keeping the allocated capacity.
    pub fn clear(&mut self) {
        for slot in &mut self.data.as_mut_slice()[..self.len] {
            let _ = mem::take(slot);
        }
        self.len = 0;
    }
}

impl<T> DynArray<T> {
    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true when the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current physical capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Checked element access.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        if index >= self.len {
            return Err(Error::OutOfRange { index, len: self.len });
        }
        Ok(&self.data[index])
    }

    /// Checked mutable element access.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        if index >= self.len {
            return Err(Error::OutOfRange { index, len: self.len });
        }
        Ok(&mut self.data[index])
    }

    /// Element access returning `None` out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len { Some(&self.data[index]) } else { None }
    }

    /// Mutable element access returning `None` out of range.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len { Some(&mut self.data[index]) } else { None }
    }

    /// First element, if any.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Last element, if any.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// The live elements `[0, len)` as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data.as_slice()[..self.len]
    }

    /// The live elements as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data.as_mut_slice()[..self.len]
    }

    /// A read-only view over the live elements.
    #[must_use]
    pub fn as_view(&self) -> View<'_, T> {
        View::new(self.as_slice())
    }

    /// A mutable view over the live elements.
    #[must_use]
    pub fn as_view_mut(&mut self) -> ViewMut<'_, T> {
        ViewMut::new(self.as_mut_slice())
    }

    /// Iterates the live elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

/// Unchecked-style indexing; panics out of range instead of performing a
/// logical-length check against garbage slots.
impl<T> std::ops::Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        assert!(index < self.len, "index {index} out of range for length {}", self.len);
        &self.data[index]
    }
}

impl<T> std::ops::IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(index < self.len, "index {index} out of range for length {}", self.len);
        &mut self.data[index]
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Default> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Default> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T: Default> From<View<'_, T>> for DynArray<T>
where
    T: Clone,
{
    fn from(view: View<'_, T>) -> Self {
        view.iter().cloned().collect()
    }
}
