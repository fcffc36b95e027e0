//! Owned fixed-capacity contiguous storage, the allocation unit for every
//! container in this crate.

use std::mem;

use crate::error::Error;
use crate::view::{View, ViewMut};

/// An exclusively owned contiguous block of default-initialized slots.
///
/// A `Buffer` has a fixed physical capacity; it never grows in place.
/// [`Buffer::grow`] allocates a replacement block and moves every slot
/// across, which is how the owning containers implement amortized growth.
///
/// Ownership transfer is explicit: [`Buffer::take`] hands the block to the
/// caller and leaves the source empty (capacity 0), mirroring move
/// semantics. `Clone` is the explicit deep duplication.
#[derive(Debug, Clone)]
pub struct Buffer<T> {
    /// The backing block; its length is the physical capacity
    data: Box<[T]>,
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self { data: Box::new([]) }
    }
}

impl<T: Default> Buffer<T> {
    /// Allocates a block of `capacity` default-initialized slots.
    #[must_use]
    pub fn allocate(capacity: usize) -> Self {
        Self { data: (0..capacity).map(|_| T::default()).collect() }
    }

    /// Replaces the block with one of capacity `max(2 * cap, cap + extra)`,
    /// moving every slot across in order. The old block is dropped.
    ///
    /// Any outstanding borrow of the old block prevents this call; growth
    /// while a [`View`] is held is a compile error, not a runtime hazard.
    pub fn grow(&mut self, extra: usize) {
        let cap = self.capacity();
        let new_cap = (cap.saturating_mul(2)).max(cap.saturating_add(extra));
        let mut grown = Self::allocate(new_cap);
        for (slot, new_slot) in self.data.iter_mut().zip(grown.data.iter_mut()) {
            *new_slot = mem::take(slot);
        }
        *self = grown;
    }
}

impl<T> Buffer<T> {
    /// Returns the physical capacity of the block.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Transfers the block out, leaving this buffer empty (capacity 0).
    ///
    /// The source stays valid as a fresh zero-capacity buffer.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Checked slot access.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index >= capacity`.
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.data.get(index).ok_or(Error::OutOfRange { index, len: self.capacity() })
    }

    /// Checked mutable slot access.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index >= capacity`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.capacity();
        self.data.get_mut(index).ok_or(Error::OutOfRange { index, len })
    }

    /// The whole block as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The whole block as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// A view over the whole block.
    #[must_use]
    pub fn view(&self) -> View<'_, T> {
        View::new(&self.data)
    }

    /// A mutable view over the whole block.
    #[must_use]
    pub fn view_mut(&mut self) -> ViewMut<'_, T> {
        ViewMut::new(&mut self.data)
    }
}

impl<T> std::ops::Index<usize> for Buffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> std::ops::IndexMut<usize> for Buffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_default_initialized() {
        let buf: Buffer<i32> = Buffer::allocate(4);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_grow_doubles_and_preserves_order() {
        let mut buf: Buffer<i32> = Buffer::allocate(4);
        for (i, slot) in buf.as_mut_slice().iter_mut().enumerate() {
            *slot = i as i32;
        }
        buf.grow(1);
        assert_eq!(buf.capacity(), 8);
        assert_eq!(&buf.as_slice()[..4], &[0, 1, 2, 3]);
        assert_eq!(&buf.as_slice()[4..], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_grow_extra_beyond_double() {
        let mut buf: Buffer<u8> = Buffer::allocate(2);
        buf.grow(10);
        assert_eq!(buf.capacity(), 12);
    }

    #[test]
    fn test_grow_from_empty() {
        let mut buf: Buffer<u8> = Buffer::default();
        assert_eq!(buf.capacity(), 0);
        buf.grow(1);
        assert_eq!(buf.capacity(), 1);
    }

    #[test]
    fn test_take_empties_source() {
        let mut buf: Buffer<String> = Buffer::allocate(3);
        buf[0] = "x".to_string();
        let moved = buf.take();
        assert_eq!(moved.capacity(), 3);
        assert_eq!(moved[0], "x");
        assert_eq!(buf.capacity(), 0);
        // The emptied source is reusable.
        buf.grow(2);
        assert_eq!(buf.capacity(), 2);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut buf: Buffer<i32> = Buffer::allocate(2);
        buf[0] = 7;
        let copy = buf.clone();
        buf[0] = 9;
        assert_eq!(copy[0], 7);
        assert_eq!(copy.capacity(), 2);
    }

    #[test]
    fn test_checked_access() {
        let buf: Buffer<i32> = Buffer::allocate(2);
        assert_eq!(buf.at(1), Ok(&0));
        assert_eq!(buf.at(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    }
}
