// SPDX-License-Identifier: MIT
// Curve math seam used by the position ledger

use soroban_sdk::Env;
use crate::liquidity::{get_amount_0_delta, get_amount_1_delta};
use crate::sqrt_price::get_sqrt_ratio_at_tick;

/// Pure price-curve functions the position ledger needs to price liquidity.
///
/// The ledger never does price math itself; swapping the implementation
/// changes how amounts are quoted without touching fee accounting.
pub trait CurveMath {
    fn sqrt_price_for_tick(&self, tick: i32) -> u128;

    fn amount0_delta(
        &self,
        env: &Env,
        liquidity: u128,
        sqrt_price_a: u128,
        sqrt_price_b: u128,
        round_up: bool,
    ) -> u128;

    fn amount1_delta(
        &self,
        env: &Env,
        liquidity: u128,
        sqrt_price_a: u128,
        sqrt_price_b: u128,
        round_up: bool,
    ) -> u128;
}

/// Q64.64 sqrt-price curve (sqrt(1.0001^tick) * 2^64)
#[derive(Clone, Copy, Debug, Default)]
pub struct Q64Curve;

impl CurveMath for Q64Curve {
    fn sqrt_price_for_tick(&self, tick: i32) -> u128 {
        get_sqrt_ratio_at_tick(tick)
    }

    fn amount0_delta(
        &self,
        env: &Env,
        liquidity: u128,
        sqrt_price_a: u128,
        sqrt_price_b: u128,
        round_up: bool,
    ) -> u128 {
        get_amount_0_delta(env, sqrt_price_a, sqrt_price_b, liquidity, round_up)
    }

    fn amount1_delta(
        &self,
        env: &Env,
        liquidity: u128,
        sqrt_price_a: u128,
        sqrt_price_b: u128,
        round_up: bool,
    ) -> u128 {
        get_amount_1_delta(env, sqrt_price_a, sqrt_price_b, liquidity, round_up)
    }
}

/// Token amounts backing `liquidity` over `[sqrt_lower, sqrt_upper]`
///
/// The current price is clamped into the range: a range entirely above the
/// price is all token0, a range entirely below it is all token1.
pub fn amounts_for_liquidity<C: CurveMath>(
    curve: &C,
    env: &Env,
    liquidity: u128,
    sqrt_lower: u128,
    sqrt_upper: u128,
    sqrt_current: u128,
    round_up: bool,
) -> (u128, u128) {
    if liquidity == 0 || sqrt_lower >= sqrt_upper {
        return (0, 0);
    }

    let sp = sqrt_current.max(sqrt_lower).min(sqrt_upper);

    let amount0 = if sp < sqrt_upper {
        curve.amount0_delta(env, liquidity, sp, sqrt_upper, round_up)
    } else {
        0
    };

    let amount1 = if sp > sqrt_lower {
        curve.amount1_delta(env, liquidity, sqrt_lower, sp, round_up)
    } else {
        0
    };

    (amount0, amount1)
}
