use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks a preset by input length; larger inputs switch to flat sampling.
pub fn apply_runtime_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len <= 16384 {
        group.sampling_mode(SamplingMode::Auto);
        apply_small_runtime_config(group);
    } else if len <= 65536 {
        group.sampling_mode(SamplingMode::Flat);
        apply_medium_runtime_config(group);
    } else {
        group.sampling_mode(SamplingMode::Flat);
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// A value with exactly `digits` decimal digits (`0` for `digits == 0`).
pub fn random_with_digits<R: Rng + ?Sized>(rng: &mut R, digits: u32) -> u64 {
    if digits == 0 {
        return 0;
    }

    let digits = digits.min(20);
    let min = 10_u64.pow(digits - 1);
    let max = if digits == 20 {
        u64::MAX
    } else {
        10_u64.pow(digits) - 1
    };
    rng.random_range(min..=max)
}

/// `len` keys whose digit counts are drawn uniformly from `1..=max_digits`.
pub fn mixed_digit_keys<R: Rng + ?Sized>(rng: &mut R, len: usize, max_digits: u32) -> Vec<u64> {
    let max_digits = max_digits.clamp(1, 20);
    (0..len)
        .map(|_| {
            let digits = rng.random_range(1..=max_digits);
            random_with_digits(rng, digits)
        })
        .collect()
}

/// `0..len` with roughly one percent of positions swapped at random.
pub fn nearly_sorted_keys<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u64> {
    let mut data: Vec<u64> = (0..len as u64).collect();
    if len == 0 {
        return data;
    }
    let swaps = (len / 100).max(1);
    for _ in 0..swaps {
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        data.swap(a, b);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_with_digits_respects_width() {
        let mut rng = default_rng();
        assert_eq!(random_with_digits(&mut rng, 0), 0);
        for digits in 1..=20 {
            for _ in 0..32 {
                let v = random_with_digits(&mut rng, digits);
                let width = v.checked_ilog10().map_or(1, |log| log + 1);
                assert_eq!(width, digits, "v={v}");
            }
        }
    }

    #[test]
    fn nearly_sorted_is_a_permutation() {
        let mut rng = default_rng();
        let mut data = nearly_sorted_keys(&mut rng, 1000);
        data.sort_unstable();
        assert!(data.iter().copied().eq(0..1000));
        assert!(nearly_sorted_keys(&mut rng, 0).is_empty());
    }

    #[test]
    fn mixed_digit_keys_len() {
        let mut rng = default_rng();
        let data = mixed_digit_keys(&mut rng, 500, 7);
        assert_eq!(data.len(), 500);
        assert!(data.iter().all(|&v| v < 10_000_000));
    }
}
