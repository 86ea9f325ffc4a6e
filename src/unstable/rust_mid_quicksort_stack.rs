//! Non-recursive variant of `rust_mid_quicksort`.
//!
//! Pending ranges are kept in a heap allocated work list instead of the call stack. Ranges are
//! popped in the same order the recursive driver visits them, so both variants leave the slice in
//! the exact same arrangement.

use std::cmp::Ordering;

use crate::unstable::rust_mid_quicksort::partition;

sort_impl!("rust_mid_quicksort_stack_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
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
        return;
    }

    quicksort(v, &mut is_less);
}

fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Inclusive `(left, right)` ranges, every entry satisfies `left < right`.
    let mut stack: Vec<(usize, usize)> = vec![(0, v.len() - 1)];

    while let Some((left, right)) = stack.pop() {
        let (l, r) = partition(v, left, right, is_less);

        // Push the right side first so the left side is handled first, like the recursive driver.
        if right > l {
            stack.push((l, right));
        }
        if left < r {
            stack.push((left, r));
        }
    }
}
