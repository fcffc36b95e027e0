//! Circular-buffer double-ended queue with O(1) pushes and pops at both
//! ends.

use std::mem;

use crate::buffer::Buffer;
use crate::error::Error;
use crate::view::View;

/// Default physical capacity for a freshly created deque.
const DEFAULT_CAPACITY: usize = 16;

/// A double-ended queue over a single owned [`Buffer`], indexed modulo the
/// physical capacity.
///
/// The explicit `len` field is authoritative throughout: the deque is full
/// exactly when `len == capacity` and empty exactly when `len == 0`. No gap
/// slot is reserved and index equality is never consulted, so the two
/// states cannot be confused.
///
/// Growth re-linearizes the content: elements are moved in logical order to
/// the start of the replacement block and `head` is reset to 0.
#[derive(Debug, Clone)]
pub struct Deque<T> {
    /// The owned storage block, indexed modulo its capacity
    data: Buffer<T>,
    /// Physical index of the logical front element
    head: usize,
    /// Number of live elements, always `<= data.capacity()`
    len: usize,
}

impl<T: Default> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> Deque<T> {
    /// Creates an empty deque with the default initial capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty deque; the capacity is rounded up to a power of
    /// two, with a minimum of 1.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Buffer::allocate(capacity.max(1).next_power_of_two()), head: 0, len: 0 }
    }

    /// Appends an element at the back, growing first when full.
    pub fn push_back(&mut self, value: T) {
        if self.len == self.data.capacity() {
            self.grow();
        }
        let tail = self.physical(self.len);
        self.data[tail] = value;
        self.len += 1;
    }

    /// Prepends an element at the front, growing first when full.
    pub fn push_front(&mut self, value: T) {
        if self.len == self.data.capacity() {
            self.grow();
        }
        let cap = self.data.capacity();
        self.head = (self.head + cap - 1) % cap;
        self.data[self.head] = value;
        self.len += 1;
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] when the deque has no elements.
    pub fn pop_back(&mut self) -> Result<T, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        self.len -= 1;
        let tail = self.physical(self.len);
        Ok(mem::take(&mut self.data[tail]))
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] when the deque has no elements.
    pub fn pop_front(&mut self) -> Result<T, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        let front = mem::take(&mut self.data[self.head]);
        self.head = (self.head + 1) % self.data.capacity();
        self.len -= 1;
        Ok(front)
    }

    /// Moves the content to the start of the physical block so that a
    /// single contiguous [`View`] covers it. A no-op when already
    /// contiguous.
    pub fn linearize(&mut self) {
        if self.is_contiguous() {
            return;
        }
        let mut flat = Buffer::allocate(self.data.capacity());
        for i in 0..self.len {
            let src = self.physical(i);
            flat[i] = mem::take(&mut self.data[src]);
        }
        self.data = flat;
        self.head = 0;
    }

    /// Replaces the storage with a doubled block, relinearizing content.
    fn grow(&mut self) {
        let new_cap = (self.data.capacity().saturating_mul(2)).max(1);
        let mut grown = Buffer::allocate(new_cap);
        for i in 0..self.len {
            let src = self.physical(i);
            grown[i] = mem::take(&mut self.data[src]);
        }
        self.data = grown;
        self.head = 0;
    }
}

impl<T> Deque<T> {
    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true when the deque has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current physical capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Maps a logical index to its physical slot.
    fn physical(&self, index: usize) -> usize {
        (self.head + index) % self.data.capacity()
    }

    /// True when the logical content occupies one physical run.
    fn is_contiguous(&self) -> bool {
        self.len == 0 || self.head + self.len <= self.data.capacity()
    }

    /// Checked element access by logical index (0 is the front).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        if index >= self.len {
            return Err(Error::OutOfRange { index, len: self.len });
        }
        Ok(&self.data[self.physical(index)])
    }

    /// Checked mutable element access by logical index.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        if index >= self.len {
            return Err(Error::OutOfRange { index, len: self.len });
        }
        let slot = self.physical(index);
        Ok(&mut self.data[slot])
    }

    /// Element access returning `None` out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len { Some(&self.data[self.physical(index)]) } else { None }
    }

    /// Mutable element access returning `None` out of range.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let slot = self.physical(index);
            Some(&mut self.data[slot])
        } else {
            None
        }
    }

    /// Front element, if any.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Back element, if any.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// A contiguous view over the content, when one exists.
    ///
    /// Returns `None` while the content wraps around the physical end of
    /// the block; call [`Deque::linearize`] first in that case. A wrapped
    /// deque cannot be described by one `[start, end)` window.
    #[must_use]
    pub fn try_as_view(&self) -> Option<View<'_, T>> {
        if self.is_contiguous() {
            Some(View::new(&self.data.as_slice()[self.head..self.head + self.len]))
        } else {
            None
        }
    }

    /// Iterates front to back, following any wrap.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { deque: self, index: 0 }
    }
}

/// Wrap-aware forward iterator over a [`Deque`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    /// The deque being walked
    deque: &'a Deque<T>,
    /// Next logical index to yield
    index: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = self.deque.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.deque.len() - self.index.min(self.deque.len());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Default> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Default> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_and_lifo_ends() {
        let mut deque: Deque<i32> = Deque::new();
        deque.push_back(2);
        deque.push_back(3);
        deque.push_front(1);
        assert_eq!(deque.len(), 3);
        assert_eq!(deque.at(0), Ok(&1));
        assert_eq!(deque.at(1), Ok(&2));
        assert_eq!(deque.at(2), Ok(&3));

        assert_eq!(deque.pop_front(), Ok(1));
        assert_eq!(deque.pop_back(), Ok(3));
        assert_eq!(deque.pop_front(), Ok(2));
        assert_eq!(deque.pop_front(), Err(Error::Empty));
        assert_eq!(deque.pop_back(), Err(Error::Empty));
    }

    #[test]
    fn test_wrapping_preserves_logical_order() {
        let mut deque: Deque<usize> = Deque::with_capacity(4);
        // Force the head to wrap past the physical start.
        for i in 0..3 {
            deque.push_back(i);
        }
        assert_eq!(deque.pop_front(), Ok(0));
        assert_eq!(deque.pop_front(), Ok(1));
        deque.push_back(3);
        deque.push_back(4);
        deque.push_back(5); // wraps

        let collected: Vec<usize> = deque.iter().copied().collect();
        assert_eq!(collected, vec![2, 3, 4, 5]);
        for (i, expected) in [2, 3, 4, 5].into_iter().enumerate() {
            assert_eq!(deque.at(i), Ok(&expected));
        }
    }

    #[test]
    fn test_growth_relinearizes_wrapped_content() {
        let mut deque: Deque<i32> = Deque::with_capacity(4);
        deque.push_back(10);
        deque.push_back(20);
        assert_eq!(deque.pop_front(), Ok(10));
        deque.push_back(30);
        deque.push_back(40);
        deque.push_back(50); // wrapped, now full
        assert_eq!(deque.capacity(), 4);

        deque.push_back(60); // triggers growth
        assert_eq!(deque.capacity(), 8);
        let collected: Vec<i32> = deque.iter().copied().collect();
        assert_eq!(collected, vec![20, 30, 40, 50, 60]);
        assert!(deque.try_as_view().is_some());
    }

    #[test]
    fn test_full_versus_empty_disambiguation() {
        let mut deque: Deque<u8> = Deque::with_capacity(2);
        assert!(deque.is_empty());
        deque.push_back(1);
        deque.push_back(2);
        // Full without growth: head == derived tail, but len disambiguates.
        assert_eq!(deque.len(), 2);
        assert_eq!(deque.capacity(), 2);
        assert_eq!(deque.pop_front(), Ok(1));
        assert_eq!(deque.pop_front(), Ok(2));
        assert!(deque.is_empty());
    }

    #[test]
    fn test_view_requires_contiguity() {
        let mut deque: Deque<i32> = Deque::with_capacity(4);
        deque.push_back(1);
        deque.push_back(2);
        deque.push_front(0); // head wraps to the physical end
        assert!(deque.try_as_view().is_none());

        deque.linearize();
        let view = deque.try_as_view().expect("contiguous after linearize");
        assert_eq!(view.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_at_out_of_range() {
        let deque: Deque<i32> = (0..3).collect();
        assert_eq!(deque.at(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn test_front_back() {
        let mut deque: Deque<i32> = Deque::new();
        assert_eq!(deque.front(), None);
        assert_eq!(deque.back(), None);
        deque.push_front(5);
        deque.push_back(6);
        assert_eq!(deque.front(), Some(&5));
        assert_eq!(deque.back(), Some(&6));
    }

    #[test]
    fn test_get_mut_follows_the_wrap() {
        let mut deque: Deque<i32> = Deque::with_capacity(4);
        deque.push_back(1);
        deque.push_back(2);
        deque.push_front(0); // head wraps to the physical end
        *deque.get_mut(0).unwrap() = 10;
        *deque.get_mut(2).unwrap() = 12;
        assert_eq!(deque.get_mut(3), None);
        let collected: Vec<i32> = deque.iter().copied().collect();
        assert_eq!(collected, vec![10, 1, 12]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut deque: Deque<i32> = (0..3).collect();
        let copy = deque.clone();
        deque.push_back(9);
        assert_eq!(copy.len(), 3);
        let collected: Vec<i32> = copy.iter().copied().collect();
        assert_eq!(collected, vec![0, 1, 2]);
    }
}
