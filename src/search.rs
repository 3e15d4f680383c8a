//! First/last-occurrence binary search over a sorted slice.
//!
//! A plain library binary search reports *some* index of a matching element.
//! When the comparator maps many distinct elements to the same logical key
//! (the [`by_prefix_order`](crate::term::by_prefix_order) comparator groups
//! every text sharing a prefix into one match class), the caller needs the
//! *boundaries* of the run of equal elements instead. [`first_index_of`] and
//! [`last_index_of`] find those boundaries in O(log n), even when the run
//! covers most of the slice.
//!
//! The trick: on hitting an equal element at `mid`, check whether its
//! neighbor still compares equal. If it does not, `mid` is the boundary and
//! we are done; otherwise keep halving toward it. Never walk linearly from a
//! found match - a slice of all-equal elements would turn that into O(n).

use std::cmp::Ordering;

/// Smallest index `i` with `cmp(key, &a[i]) == Equal`, or `None` if no
/// element of the sorted slice compares equal to the key.
///
/// `a` must be sorted ascending under `cmp`, otherwise the result is
/// meaningless (but the call is still memory-safe and terminates).
pub fn first_index_of<T, F>(a: &[T], key: &T, cmp: F) -> Option<usize>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut lo = 0;
    let mut hi = a.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp(key, &a[mid]) {
            Ordering::Less => hi = mid,
            Ordering::Greater => lo = mid + 1,
            Ordering::Equal => {
                // Boundary test: leftmost overall, or predecessor differs.
                if mid == 0 || cmp(&a[mid - 1], &a[mid]) != Ordering::Equal {
                    return Some(mid);
                }
                hi = mid;
            }
        }
    }
    None
}

/// Largest index `i` with `cmp(key, &a[i]) == Equal`, or `None` if no
/// element of the sorted slice compares equal to the key.
///
/// Mirror image of [`first_index_of`]: narrows upward and stops as soon as
/// the successor no longer compares equal.
pub fn last_index_of<T, F>(a: &[T], key: &T, cmp: F) -> Option<usize>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut lo = 0;
    let mut hi = a.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp(key, &a[mid]) {
            Ordering::Less => hi = mid,
            Ordering::Greater => lo = mid + 1,
            Ordering::Equal => {
                if mid + 1 == a.len() || cmp(&a[mid], &a[mid + 1]) != Ordering::Equal {
                    return Some(mid);
                }
                lo = mid + 1;
            }
        }
    }
    None
}
