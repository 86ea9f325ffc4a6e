use std::cell::Cell;
use std::cmp::Ordering;
use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use mid_quicksort::unstable::{rust_mid_quicksort, rust_mid_quicksort_stack};
use mid_quicksort::SortableBox;
use sort_test_tools::{patterns, Sort};

struct StdUnstable;

impl Sort for StdUnstable {
    fn name() -> String {
        "rust_std_unstable".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord,
    {
        arr.sort_unstable();
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        arr.sort_unstable_by(compare);
    }
}

type Pattern = (&'static str, fn(usize) -> Vec<i32>);

// Only shapes a middle pivot handles in n log n, quadratic ones would swamp the numbers.
const PATTERNS: [Pattern; 6] = [
    ("random", patterns::random),
    ("few_distinct", patterns::few_distinct),
    ("ascending", patterns::ascending),
    ("descending", patterns::descending),
    ("all_equal", patterns::all_equal),
    ("pipe_organ", patterns::pipe_organ),
];

const SIZES: [usize; 5] = [8, 100, 1_000, 10_000, 100_000];

fn bench_variant<T, S>(c: &mut Criterion, type_name: &str, to_type: fn(Vec<i32>) -> Vec<T>)
where
    T: Ord,
    S: Sort,
{
    let measure_comp = env::var("MEASURE_COMP").is_ok();

    for (pattern_name, pattern) in PATTERNS {
        for len in SIZES {
            let id = format!("{}-{type_name}-{pattern_name}-{len}", S::name());

            if measure_comp {
                let comparisons = Cell::new(0u64);
                let runs = 100;
                for _ in 0..runs {
                    let mut v = to_type(pattern(len));
                    S::sort_by(&mut v, |a, b| {
                        comparisons.set(comparisons.get() + 1);
                        a.cmp(b)
                    });
                }
                println!("{id}: mean comparisons: {}", comparisons.get() / runs);
                continue;
            }

            let batch_size = if len > 1_000 {
                BatchSize::LargeInput
            } else {
                BatchSize::SmallInput
            };
            c.bench_function(&id, |b| {
                b.iter_batched(
                    || to_type(pattern(len)),
                    |mut v| S::sort(black_box(v.as_mut_slice())),
                    batch_size,
                )
            });
        }
    }
}

fn bench_type<T: Ord>(c: &mut Criterion, type_name: &str, to_type: fn(Vec<i32>) -> Vec<T>) {
    bench_variant::<T, rust_mid_quicksort::SortImpl>(c, type_name, to_type);
    bench_variant::<T, rust_mid_quicksort_stack::SortImpl>(c, type_name, to_type);
    bench_variant::<T, StdUnstable>(c, type_name, to_type);
}

fn criterion_benchmark(c: &mut Criterion) {
    // Fresh values per batch, otherwise every iteration sorts the same input.
    patterns::disable_fixed_seed();

    bench_type(c, "i32", |v| v);
    bench_type(c, "string", |v| {
        v.iter().map(|x| format!("{x:011}")).collect::<Vec<String>>()
    });
    bench_type(c, "sortable_box_i32", |v| {
        v.into_iter().map(SortableBox::new).collect::<Vec<_>>()
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
