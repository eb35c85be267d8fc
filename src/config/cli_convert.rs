//! CLI argument conversion utilities

use anyhow::{Context, Result};

/// Parse a scaled-integer argument (e.g., "250", "100M", "100M+5", "-1")
///
/// An `M`/`m` suffix multiplies the base value by one million. A `+<offset>`
/// addend, applied after scaling, is a plain decimal integer. Any other
/// trailing text is a parse error.
pub fn parse_scaled(s: &str) -> Result<i64> {
    let s = s.trim();

    let (base_str, offset) = match s.split_once('+') {
        Some((base, rest)) => {
            let offset: i64 = rest
                .trim()
                .parse()
                .with_context(|| format!("Invalid numeric format after +: {}", rest.trim()))?;
            (base.trim(), offset)
        }
        None => (s, 0),
    };

    let (num_str, multiplier) = if base_str.ends_with('M') || base_str.ends_with('m') {
        (&base_str[..base_str.len() - 1], 1_000_000i64)
    } else {
        (base_str, 1)
    };

    let num: i64 = num_str
        .parse()
        .with_context(|| format!("Invalid numeric format: {}", base_str))?;

    num.checked_mul(multiplier)
        .and_then(|value| value.checked_add(offset))
        .ok_or_else(|| anyhow::anyhow!("Numeric value out of range: {}", s))
}
