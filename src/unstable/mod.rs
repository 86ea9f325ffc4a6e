pub mod rust_mid_quicksort;

// Same partition step, driven by an explicit work list instead of recursion.
pub mod rust_mid_quicksort_stack;
