//! In-place partition-exchange sort with a fixed middle pivot, and a delegating adapter that lets
//! wrapped values take part in the same sort.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod sortable_box;
pub mod unstable;

pub use sortable_box::SortableBox;
pub use unstable::rust_mid_quicksort::{exchange, sort, sort_by};
