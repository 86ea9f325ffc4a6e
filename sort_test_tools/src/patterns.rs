//! Input generators shared by the test battery and the benches.
//!
//! Every random generator seeds a fresh `StdRng` from [`random_init_seed`], so within one process
//! the same call yields the same values, and a reported failure can be replayed by setting
//! `SORT_TEST_SEED` to the seed the battery printed.

use std::cmp::Reverse;
use std::env;
use std::sync::atomic::{self, AtomicBool};

use once_cell::sync::{Lazy, OnceCell};
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

static SEED_FROM_ENV: Lazy<Option<u64>> =
    Lazy::new(|| env::var("SORT_TEST_SEED").ok()?.trim().parse().ok());

static FRESH_SEED_PER_CALL: AtomicBool = AtomicBool::new(false);

/// Seed used by all random generators.
///
/// `SORT_TEST_SEED` wins if set. Otherwise one seed is drawn per process, or one per call after
/// [`disable_fixed_seed`].
pub fn random_init_seed() -> u64 {
    static PROCESS_SEED: OnceCell<u64> = OnceCell::new();

    match *SEED_FROM_ENV {
        Some(seed) => seed,
        None if FRESH_SEED_PER_CALL.load(atomic::Ordering::Acquire) => thread_rng().gen(),
        None => *PROCESS_SEED.get_or_init(|| thread_rng().gen()),
    }
}

/// Makes every random generator call draw new values. Benches use this so repeated batches don't
/// measure the same input.
///
/// # Panics
///
/// Panics if `SORT_TEST_SEED` is set, the two requests contradict each other.
pub fn disable_fixed_seed() {
    assert!(
        SEED_FROM_ENV.is_none(),
        "SORT_TEST_SEED pins the seed, fresh seeds per call were requested as well"
    );

    FRESH_SEED_PER_CALL.store(true, atomic::Ordering::Release);
}

pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Random values drawn from `range`, e.g. `0..4` for inputs dominated by duplicates.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    new_rng().sample_iter(range.into()).take(len).collect()
}

/// `random_uniform` with about `log2(len)` distinct values.
pub fn few_distinct(len: usize) -> Vec<i32> {
    let distinct = (len.max(2) as f64).log2().round() as i32;
    random_uniform(len, 0..distinct)
}

/// Finite values only.
pub fn random_f64(len: usize) -> Vec<f64> {
    new_rng()
        .sample_iter(Uniform::new(-1.0e9, 1.0e9))
        .take(len)
        .collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Random values cut into `runs` chunks, sorted alternately up and down.
pub fn saws(len: usize, runs: usize) -> Vec<i32> {
    let mut v = random(len);
    let chunk_len = (len / runs.max(1)).max(1);

    for (i, chunk) in v.chunks_mut(chunk_len).enumerate() {
        if i % 2 == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&x| Reverse(x));
        }
    }

    v
}

/// Random values, first half ascending, second half descending.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (up, down) = v.split_at_mut(len / 2);
    up.sort_unstable();
    down.sort_unstable_by_key(|&x| Reverse(x));

    v
}

/// `0, 1, .., len/2 - 1` followed by the same run backwards, no randomness.
///
/// Every middle pivot lands next to the largest remaining pair, so each partition step splits off
/// only a couple of elements. Recursion depth grows to about `len / 2`.
pub fn pipe_organ_exact(len: usize) -> Vec<i32> {
    let half = (len / 2) as i32;
    (0..half).chain((0..(len as i32 - half)).rev()).collect()
}

/// Random values with `i32::MAX` placed at the index the first partition reads its pivot from.
pub fn middle_peak(len: usize) -> Vec<i32> {
    let mut v = random_uniform(len, 0..=(len as i32));
    if let Some(mid) = len.checked_sub(1).map(|last| last / 2) {
        v[mid] = i32::MAX;
    }

    v
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
