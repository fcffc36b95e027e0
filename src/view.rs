//! Non-owning windows over contiguous storage.
//!
//! A [`View`] is the common currency between the owning containers and the
//! generic algorithms: every container can lend one, and [`crate::sort`]
//! consumes the mutable flavor. A view borrows its backing storage, so the
//! classic open-addressing hazard of reading a window after its owner
//! reallocated cannot compile:
//!
//! ```compile_fail
//! use coffer::DynArray;
//!
//! let mut array: DynArray<i32> = (0..3).collect();
//! let window = array.as_view();
//! array.push_back(3); // may reallocate: rejected while `window` is live
//! assert_eq!(window.len(), 3);
//! ```

use std::cmp::Ordering;

use crate::error::Error;

/// A read-only window `[start, start + len)` into contiguous storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View<'a, T> {
    /// The borrowed window
    data: &'a [T],
}

impl<'a, T> View<'a, T> {
    /// Wraps a slice as a view.
    #[must_use]
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    /// Number of elements in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true when the window is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checked element access.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index >= len`.
    pub fn at(&self, index: usize) -> Result<&'a T, Error> {
        self.data.get(index).ok_or(Error::OutOfRange { index, len: self.data.len() })
    }

    /// Element access returning `None` out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.data.get(index)
    }

    /// First element, if any.
    #[must_use]
    pub fn front(&self) -> Option<&'a T> {
        self.data.first()
    }

    /// Last element, if any.
    #[must_use]
    pub fn back(&self) -> Option<&'a T> {
        self.data.last()
    }

    /// Sub-window `[start, end)`. `end` is clamped to the window length;
    /// an `end` below `start` yields an empty sub-window.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `start > len`.
    pub fn sub(&self, start: usize, end: usize) -> Result<Self, Error> {
        if start > self.data.len() {
            return Err(Error::OutOfRange { index: start, len: self.data.len() });
        }
        let end = end.min(self.data.len()).max(start);
        Ok(Self { data: &self.data[start..end] })
    }

    /// Sub-window from `start` to the end of this window.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `start > len`.
    pub fn sub_from(&self, start: usize) -> Result<Self, Error> {
        self.sub(start, self.data.len())
    }

    /// The window as a plain slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Iterates the window in order.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }
}

impl<'a, T: Ord> View<'a, T> {
    /// Orders two windows: shorter sorts first, equal lengths compare
    /// elementwise left to right.
    #[must_use]
    pub fn compare(&self, other: &View<'_, T>) -> Ordering {
        if self.data.len() != other.data.len() {
            return self.data.len().cmp(&other.data.len());
        }
        self.data.cmp(other.data)
    }
}

impl<'a, T: PartialEq> View<'a, T> {
    /// Returns true when both windows have the same length and elements.
    #[must_use]
    pub fn equals(&self, other: &View<'_, T>) -> bool {
        self.data == other.data
    }
}

impl<'a, T> From<&'a [T]> for View<'a, T> {
    fn from(data: &'a [T]) -> Self {
        Self::new(data)
    }
}

impl<'a, T> IntoIterator for View<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// An exclusive window into contiguous storage, for in-place algorithms.
#[derive(Debug)]
pub struct ViewMut<'a, T> {
    /// The exclusively borrowed window
    data: &'a mut [T],
}

impl<'a, T> ViewMut<'a, T> {
    /// Wraps a mutable slice as a view.
    #[must_use]
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }

    /// Number of elements in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true when the window is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checked element access.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.data.get(index).ok_or(Error::OutOfRange { index, len: self.data.len() })
    }

    /// Checked mutable element access.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.data.len();
        self.data.get_mut(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics when either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    /// Splits the window into `[0, mid)` and `[mid, len)`.
    ///
    /// # Panics
    ///
    /// Panics when `mid > len`.
    #[must_use]
    pub fn split_at_mut(self, mid: usize) -> (ViewMut<'a, T>, ViewMut<'a, T>) {
        let (left, right) = self.data.split_at_mut(mid);
        (ViewMut::new(left), ViewMut::new(right))
    }

    /// A shorter-lived mutable window over the same elements.
    #[must_use]
    pub fn reborrow(&mut self) -> ViewMut<'_, T> {
        ViewMut::new(self.data)
    }

    /// A read-only window over the same elements.
    #[must_use]
    pub fn as_view(&self) -> View<'_, T> {
        View::new(self.data)
    }

    /// The window as a plain slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data
    }

    /// The window as a plain mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data
    }
}

impl<'a, T> From<&'a mut [T]> for ViewMut<'a, T> {
    fn from(data: &'a mut [T]) -> Self {
        Self::new(data)
    }
}
