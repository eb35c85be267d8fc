//! Input array generation
//!
//! Fills the data array with deterministic pseudo-random values so every run
//! (and every strategy within a run) multiplies the same numbers.

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Fixed seed so runs are reproducible
pub const RANDOM_SEED: u64 = 7649;

/// Largest value placed in the array
pub const MAX_RANDOM_NUMBER: u32 = 3000;

/// Generate the input array
///
/// Elements are uniform in `[1, MAX_RANDOM_NUMBER]`. When `zero_index` is set,
/// that element is forced to exactly zero, which collapses every strategy's
/// product to zero. The index must already be validated against `size`.
pub fn generate(size: usize, zero_index: Option<usize>) -> Vec<u32> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(RANDOM_SEED);

    let mut data: Vec<u32> = (0..size).map(|_| rng.gen_range(1..=MAX_RANDOM_NUMBER)).collect();

    if let Some(index) = zero_index {
        data[index] = 0;
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_length_and_range() {
        let data = generate(500, None);
        assert_eq!(data.len(), 500);
        assert!(data.iter().all(|&v| (1..=MAX_RANDOM_NUMBER).contains(&v)));
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(generate(1000, None), generate(1000, None));
    }

    #[test]
    fn test_zero_index_forces_zero() {
        let data = generate(100, Some(42));
        assert_eq!(data[42], 0);
        assert!(data.iter().enumerate().all(|(i, &v)| i == 42 || v >= 1));
    }

    #[test]
    fn test_zero_index_at_bounds() {
        assert_eq!(generate(10, Some(0))[0], 0);
        assert_eq!(generate(10, Some(9))[9], 0);
    }
}
