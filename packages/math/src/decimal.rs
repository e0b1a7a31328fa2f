// SPDX-License-Identifier: MIT
// Fixed-point decimals: i128 scaled by 10^18

use soroban_sdk::{Env, I256};
use crate::constants::DEC_ONE;

/// Whole units as a `Dec`
///
/// Panics on overflow like any other checked arithmetic in the workspace.
#[inline]
pub fn dec(units: i128) -> i128 {
    units * DEC_ONE
}

/// `a * b` for two decimals, truncated toward zero
///
/// The product is formed in 256 bits so only the final narrowing can fail.
pub fn checked_mul_dec(env: &Env, a: i128, b: i128) -> Option<i128> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, DEC_ONE))
        .to_i128()
}

/// Drop the fractional part, keeping the sign
#[inline]
pub fn truncate_dec(x: i128) -> i128 {
    x - x % DEC_ONE
}

/// Whole-unit count, rounded down
#[inline]
pub fn to_int_floor(x: i128) -> i128 {
    x.div_euclid(DEC_ONE)
}

/// Whole-unit count, rounded up
#[inline]
pub fn to_int_ceil(x: i128) -> i128 {
    -(-x).div_euclid(DEC_ONE)
}
