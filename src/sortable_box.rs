use std::cmp::Ordering;
use std::fmt;

/// Holds exactly one value and orders, compares and displays itself as that value.
///
/// This lets a user defined type take part in `sort` without writing its own comparison logic,
/// and sorting boxes of `T` yields the same relative order as sorting the `T` values directly.
///
/// ```
/// use mid_quicksort::SortableBox;
///
/// let mut v = [SortableBox::new("a"), SortableBox::new("c"), SortableBox::new("b")];
/// mid_quicksort::sort(&mut v);
/// assert_eq!(format!("{:?}", v), r#"["a", "b", "c"]"#);
/// ```
#[derive(Clone, Copy, Default, Hash)]
pub struct SortableBox<T> {
    value: T,
}

impl<T> SortableBox<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<T> for SortableBox<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: PartialEq> PartialEq for SortableBox<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for SortableBox<T> {}

impl<T: PartialOrd> PartialOrd for SortableBox<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord> Ord for SortableBox<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: fmt::Display> fmt::Display for SortableBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

// Printed as the bare value, so a slice of boxes reads like a slice of values.
impl<T: fmt::Debug> fmt::Debug for SortableBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}
