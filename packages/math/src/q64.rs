// SPDX-License-Identifier: MIT
// Q64.64 Fixed-Point Arithmetic Operations

use soroban_sdk::{Env, U256};
use crate::constants::Q64;

pub const ONE_X64: u128 = Q64;

/// Type conversion helpers
#[inline]
pub fn i128_to_u128_safe(x: i128) -> u128 {
    if x <= 0 { 0 } else { x as u128 }
}

#[inline]
pub fn u128_to_i128_saturating(x: u128) -> i128 {
    if x > i128::MAX as u128 { i128::MAX } else { x as i128 }
}

/// Multiply two Q64.64 numbers, returning Q64.64 result
/// Uses decomposition to avoid overflow
#[inline]
pub fn mul_q64(a: u128, b: u128) -> u128 {
    let a_hi = a >> 64;
    let a_lo = a & 0xFFFFFFFFFFFFFFFF;
    let b_hi = b >> 64;
    let b_lo = b & 0xFFFFFFFFFFFFFFFF;

    let term_hh = a_hi * b_hi;
    let term_hl = a_hi * b_lo;
    let term_lh = a_lo * b_hi;
    let term_ll = a_lo * b_lo;

    (term_hh << 64) + term_hl + term_lh + (term_ll >> 64)
}

/// 256-bit quotient, rounded down or up
pub fn div_u256(env: &Env, numerator: &U256, denominator: &U256, round_up: bool) -> U256 {
    let quotient = numerator.div(denominator);
    if round_up && numerator.rem_euclid(denominator) != U256::from_u32(env, 0) {
        quotient.add(&U256::from_u32(env, 1))
    } else {
        quotient
    }
}

/// Narrow a 256-bit value, saturating at u128::MAX
#[inline]
pub fn u256_to_u128_saturating(x: &U256) -> u128 {
    x.to_u128().unwrap_or(u128::MAX)
}
