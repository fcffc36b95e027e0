//! In-place recursive partition sort over a mutable view.

use crate::view::ViewMut;

/// Sorts a view in place in ascending order.
///
/// Hoare-style partitioning around the middle element, recursing on both
/// partitions. The pivot choice is deterministic, so adversarial inputs can
/// reach the quadratic worst case; average cost is log-linear. Equal
/// elements keep no guaranteed relative order.
///
/// # Examples
///
/// ```
/// use coffer::{ViewMut, sort};
///
/// let mut data = [5, 3, 8, 1, 9, 2];
/// sort(ViewMut::new(&mut data));
/// assert_eq!(data, [1, 2, 3, 5, 8, 9]);
/// ```
pub fn sort<T: Ord>(mut view: ViewMut<'_, T>) {
    partition_sort(view.as_mut_slice(), &mut |a, b| a < b);
}

/// Sorts a view in place with a caller-supplied strict "less than".
pub fn sort_by<T, F>(mut view: ViewMut<'_, T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    partition_sort(view.as_mut_slice(), &mut less);
}

/// Hoare partition around the middle element, tracking the pivot's slot
/// across swaps, then recursion into `[0, q]` and `[p, len)`.
fn partition_sort<T, F>(data: &mut [T], less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if data.len() < 2 {
        return;
    }
    let mut p = 0;
    let mut q = data.len() - 1;
    let mut pivot = data.len() / 2;

    while p <= q {
        while less(&data[p], &data[pivot]) {
            p += 1;
        }
        while less(&data[pivot], &data[q]) {
            q -= 1;
        }
        if p <= q {
            data.swap(p, q);
            // The pivot may have been one of the swapped elements.
            if pivot == p {
                pivot = q;
            } else if pivot == q {
                pivot = p;
            }
            p += 1;
            if q == 0 {
                break;
            }
            q -= 1;
        }
    }

    if q > 0 {
        partition_sort(&mut data[..=q], less);
    }
    if p + 1 < data.len() {
        partition_sort(&mut data[p..], less);
    }
}
