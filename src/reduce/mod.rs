//! Modular product reduction
//!
//! Every multiplication is immediately reduced modulo [`MODULUS`], keeping the
//! accumulator far from overflow no matter how long the array is. This is a
//! correctness requirement, not an optimization.

/// Modulus applied after every multiplication
pub const MODULUS: u64 = 9973;

/// Modular product of a slice of elements
///
/// Returns 1 for an empty slice. A zero element anywhere collapses the result
/// to zero; subsequent multiplications keep it there.
pub fn modular_product(elements: &[u32]) -> u64 {
    elements
        .iter()
        .fold(1u64, |acc, &value| (acc * u64::from(value)) % MODULUS)
}

/// Single-threaded baseline over the whole array
pub fn sequential_product(data: &[u32]) -> u64 {
    modular_product(data)
}

/// Combine per-division products into the final modular product
///
/// Iterates in division-index order for deterministic diagnostics, though the
/// result is order-independent.
pub fn combine(division_products: &[u64]) -> u64 {
    division_products
        .iter()
        .fold(1u64, |acc, &product| (acc * product) % MODULUS)
}
