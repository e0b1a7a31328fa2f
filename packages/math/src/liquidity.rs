// SPDX-License-Identifier: MIT
// Token amounts for a liquidity amount over a sqrt price range

use soroban_sdk::{Env, U256};
use crate::constants::Q64;
use crate::q64::{div_u256, u256_to_u128_saturating};

#[inline]
fn sorted(sqrt_price_a: u128, sqrt_price_b: u128) -> (u128, u128) {
    if sqrt_price_a < sqrt_price_b {
        (sqrt_price_a, sqrt_price_b)
    } else {
        (sqrt_price_b, sqrt_price_a)
    }
}

/// token0 amount: L * (1/sqrt_lower - 1/sqrt_upper)
///
/// Evaluated as `L·2^64/sqrt_lower − L·2^64/sqrt_upper` in 256 bits. The two
/// quotients are rounded in opposite directions so the result never moves
/// against the requested rounding.
pub fn get_amount_0_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> u128 {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);
    if sqrt_lower == 0 || sqrt_lower == sqrt_upper || liquidity == 0 {
        return 0;
    }

    let scaled = U256::from_u128(env, liquidity).mul(&U256::from_u128(env, Q64));
    let at_lower = div_u256(env, &scaled, &U256::from_u128(env, sqrt_lower), round_up);
    let at_upper = div_u256(env, &scaled, &U256::from_u128(env, sqrt_upper), !round_up);

    if at_lower <= at_upper {
        return 0;
    }
    u256_to_u128_saturating(&at_lower.sub(&at_upper))
}

/// token1 amount: L * (sqrt_upper - sqrt_lower)
pub fn get_amount_1_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> u128 {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);
    if liquidity == 0 {
        return 0;
    }

    let product = U256::from_u128(env, liquidity).mul(&U256::from_u128(env, sqrt_upper - sqrt_lower));
    u256_to_u128_saturating(&div_u256(env, &product, &U256::from_u128(env, Q64), round_up))
}
