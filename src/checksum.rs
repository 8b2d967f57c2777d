//! This module holds the two weighted checksum algorithms every institution's
//! collection rules are built from.
//!
//! The mod-10 algorithm is fixed: alternating 2/1 weights, digit-sum folding
//! of two-digit products. The mod-11 algorithm is only *mostly* fixed: the
//! cyclic weight ceiling and the digits produced for remainders 0 and 1 vary
//! by institution, so those knobs are taken as an explicit [Mod11Policy]
//! instead of baking one bank's manual into the arithmetic.
//!
//! Both algorithms treat empty or non-numeric input as a programming error
//! inside the calling codec and fail loudly; callers zero-pad first.

use crate::{
    error::Result,
    util,
};

/// The per-institution knobs of the mod-11 algorithm: the top of the cyclic
/// 2..=N weight sequence, and which digit the two degenerate remainders
/// collapse to.
#[derive(Clone, Debug, PartialEq)]
pub struct Mod11Policy {
    /// Weights cycle 2, 3, ... max_weight, 2, 3, ... right to left
    pub max_weight: u32,
    /// The check digit produced when the remainder is 0
    pub on_remainder_zero: u8,
    /// The check digit produced when the remainder is 1
    pub on_remainder_one: u8,
}

impl Mod11Policy {
    /// The policy most institutions use: weights up to 9, remainders 0 and 1
    /// both collapse to digit 0.
    pub const STANDARD: Mod11Policy = Mod11Policy {
        max_weight: 9,
        on_remainder_zero: 0,
        on_remainder_one: 0,
    };
}

/// Weighted mod-10 check digit: scan right to left with alternating 2/1
/// weights, fold two-digit products by summing their digits, then take the
/// ten's complement of the sum.
pub fn mod10(digits: &str) -> Result<u8> {
    let values = util::digit_values(digits)?;
    let mut sum = 0;
    for (idx, val) in values.iter().rev().enumerate() {
        let weight = if idx % 2 == 0 { 2 } else { 1 };
        let product = val * weight;
        sum += if product > 9 { product - 9 } else { product };
    }
    Ok(((10 - sum % 10) % 10) as u8)
}

/// The weighted sum underneath the mod-11 check digit: weights cycle
/// 2..=max_weight right to left. Exposed separately because a few
/// institutions map the remainder to a non-numeric display character
/// (Banco do Brasil's `X`, Bradesco's `P`) and need the raw remainder.
pub fn mod11_remainder(digits: &str, max_weight: u32) -> Result<u32> {
    let values = util::digit_values(digits)?;
    let mut sum = 0;
    let mut weight = 2;
    for val in values.iter().rev() {
        sum += val * weight;
        weight += 1;
        if weight > max_weight {
            weight = 2;
        }
    }
    Ok(sum % 11)
}

/// Mod-11 check digit under the given policy.
pub fn mod11(digits: &str, policy: &Mod11Policy) -> Result<u8> {
    let digit = match mod11_remainder(digits, policy.max_weight)? {
        0 => policy.on_remainder_zero,
        1 => policy.on_remainder_one,
        rem => (11 - rem) as u8,
    };
    Ok(digit)
}

/// Weighted sum with an arbitrary repeating weight cycle applied left to
/// right, mod 11. Sicoob's our-number digit runs on a constant 3-1-9-7
/// cycle that fits neither algorithm above.
pub fn cycle_remainder(digits: &str, weights: &[u32]) -> Result<u32> {
    let values = util::digit_values(digits)?;
    let mut sum = 0;
    for (idx, val) in values.iter().enumerate() {
        sum += val * weights[idx % weights.len()];
    }
    Ok(sum % 11)
}

/// The ASBACE-style check digit pair used by Banrisul and BRB: the first
/// digit is mod-10 over the payload, the second is mod-11 over
/// payload + first digit. A mod-11 remainder of 1 does not map to a digit;
/// instead the first digit is incremented (9 wraps to 0) and the second
/// recomputed. The loop is bounded: each increment shifts the weighted sum
/// by a multiple of 2, and 2 is invertible mod 11, so at most one value of
/// the first digit can leave remainder 1.
pub fn double_check_digits(digits: &str) -> Result<(u8, u8)> {
    let mut first = mod10(digits)?;
    let mut rem = mod11_remainder(&format!("{}{}", digits, first), 9)?;
    let mut passes = 0;
    while rem == 1 && passes < 10 {
        first = (first + 1) % 10;
        rem = mod11_remainder(&format!("{}{}", digits, first), 9)?;
        passes += 1;
    }
    let second = match rem {
        // remainder 1 cannot survive the loop; matched only to be exhaustive
        0 | 1 => 0,
        rem => (11 - rem) as u8,
    };
    Ok((first, second))
}

/// The fixed FEBRABAN check digit over the other 43 barcode positions:
/// mod-11 with weights up to 9, remainders 0 and 1 both map to digit 1.
pub fn barcode_check_digit(digits: &str) -> Result<u8> {
    mod11(digits, &Mod11Policy {
        max_weight: 9,
        on_remainder_zero: 1,
        on_remainder_one: 1,
    })
}
