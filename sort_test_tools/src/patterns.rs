//! Input pattern generators.
//!
//! All random generators share one seed per process, so a failing run can be
//! reproduced by setting the `OVERRIDE_SEED` environment variable to the
//! value printed by [`random_init_seed`].

use std::env;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use rand::rngs::StdRng;
use zipf::ZipfDistribution;

static SEED: OnceCell<u64> = OnceCell::new();

/// Seed shared by every generator in this process.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(val) => val
            .parse()
            .expect("OVERRIDE_SEED must be a valid u64 seed"),
        Err(_) => thread_rng().gen(),
    })
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Random values over the full `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : .
    // :.:::.::
    rng()
        .sample_iter(rand::distributions::Standard)
        .take(len)
        .collect()
}

/// Random values drawn uniformly from `range`; narrow ranges produce many
/// duplicates.
pub fn random_uniform(len: usize, range: std::ops::RangeInclusive<i32>) -> Vec<i32> {
    let mut rng = rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Zipfian distribution: a handful of values dominate, with a long tail.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }
    let mut rng = rng();
    let dist = ZipfDistribution::new(len, exponent)
        .expect("zipf requires len >= 1 and exponent > 0");
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Already sorted.
pub fn ascending(len: usize) -> Vec<i32> {
    //   .:
    // .:::
    (0..len as i32).collect()
}

/// Sorted the wrong way round.
pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    (0..len as i32).rev().collect()
}

/// Every element identical.
pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// Repeated short ascending runs.
pub fn sawtooth(len: usize, period: usize) -> Vec<i32> {
    // .:.:.:
    (0..len).map(|i| (i % period.max(1)) as i32).collect()
}

/// Rises to a peak, then falls.
pub fn mountain(len: usize) -> Vec<i32> {
    //  .:.
    // .:::.
    let mid = len / 2;
    (0..len)
        .map(|i| (if i <= mid { i } else { len - i }) as i32)
        .collect()
}

/// Falls to a trough, then rises.
pub fn valley(len: usize) -> Vec<i32> {
    // :. .:
    // :::::
    let mid = len / 2;
    (0..len)
        .map(|i| (if i <= mid { mid - i } else { i - mid }) as i32)
        .collect()
}

/// Alternates between the low and high end, converging toward the middle.
pub fn alternating(len: usize) -> Vec<i32> {
    // : : :
    // :.:.:.
    (0..len)
        .map(|i| {
            let step = (i / 2) as i32;
            if i % 2 == 0 {
                step
            } else {
                len as i32 - step
            }
        })
        .collect()
}

/// A lone minimum and maximum in front of a shuffled, tight middle band.
///
/// Once both frontiers have moved past the band edges, nearly every element
/// refuses both runs; this is the pending-buffer worst case.
pub fn band(len: usize) -> Vec<i32> {
    if len < 3 {
        return random(len);
    }
    let mut v = Vec::with_capacity(len);
    v.push(-1_000_000);
    v.push(1_000_000);
    v.extend((0..len - 2).map(|i| (i % 100) as i32 + 500));
    v[2..].shuffle(&mut rng());
    v
}
