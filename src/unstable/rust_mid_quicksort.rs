//! Recursive Hoare-style quicksort with a fixed middle pivot.
//!
//! Recursion depth is bounded by the slice length: logarithmic for well distributed inputs, linear
//! for adversarial ones. Use `rust_mid_quicksort_stack` if the call stack is small.

use std::cmp::Ordering;

sort_impl!("rust_mid_quicksort_unstable");

/// Sorts the slice in place, but might not preserve the order of equal elements.
///
/// The pivot of every partition step is the element in the middle of the current range. There is
/// no randomization and no fallback, so the worst case is *O*(*n*^2) time.
///
/// # Examples
///
/// ```
/// let mut v = [34, 12, 45, 89, 1];
///
/// mid_quicksort::sort(&mut v);
/// assert_eq!(v, [1, 12, 34, 45, 89]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice in place with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but the slice still holds
/// exactly the elements it held before. The same is true if `compare` panics.
///
/// ```
/// let mut floats = [12.1, 45.1, 23.9, 12.9, 99.88];
/// mid_quicksort::sort_by(&mut floats, f64::total_cmp);
/// assert_eq!(floats, [12.1, 12.9, 23.9, 45.1, 99.88]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Exchanges the elements at `a` and `b`.
///
/// Does nothing if `a == b`.
///
/// # Panics
///
/// Panics if `a` or `b` are out of bounds.
#[inline]
pub fn exchange<T>(v: &mut [T], a: usize, b: usize) {
    if a != b {
        v.swap(a, b);
    }
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        // Already sorted, never partition.
        return;
    }

    quicksort(v, 0, len - 1, &mut is_less);
}

/// Sorts the inclusive range `v[left..=right]`.
fn quicksort<T, F>(v: &mut [T], left: usize, right: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if left >= right {
        return;
    }

    let (l, r) = partition(v, left, right, is_less);

    // `partition` guarantees `r < right` and `l > left`, so both ranges are strictly smaller.
    // They may share one element if the cursors met, see `partition`.
    if left < r {
        quicksort(v, left, r, is_less);
    }
    if right > l {
        quicksort(v, l, right, is_less);
    }
}

/// Partitions the inclusive range `v[left..=right]` around the value found at its middle index
/// and returns the final cursor positions `(l, r)`.
///
/// Afterwards every element in `v[left..l]` is not greater than the pivot and every element in
/// `v[r + 1..=right]` is not less than the pivot. Either `r < l`, or `r == l` and that single
/// element was never examined, so callers sort `v[left..=r]` and `v[l..=right]` without excluding
/// a pivot index.
///
/// Caller has to guarantee `left < right < v.len()`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partition<T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    is_less: &mut F,
) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(left < right && right < v.len());

    // The pivot value can be moved by an exchange. Follow its position instead of copying it out,
    // comparing against the followed slot is the same as comparing against the value read once.
    let mut pivot = left + (right - left) / 2;

    let mut l = left;
    let mut r = right;

    while l < r {
        // With a total order the pivot, or an element placed by an earlier exchange, stops both
        // scans inside the range. The bounds only matter if `is_less` is not a total order.
        while l < right && is_less(&v[l], &v[pivot]) {
            l += 1;
        }
        while r > left && is_less(&v[pivot], &v[r]) {
            r -= 1;
        }

        if l <= r {
            exchange(v, l, r);

            if pivot == l {
                pivot = r;
            } else if pivot == r {
                pivot = l;
            }

            l += 1;
            // Only saturates for `l == r == left == 0`, where -1 and 0 both fail `left < r`.
            r = r.saturating_sub(1);
        }
    }

    (l, r)
}
