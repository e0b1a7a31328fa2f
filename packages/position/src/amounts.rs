// Token amounts for a liquidity change
//
// Liquidity is a `Dec`; the curve prices whole liquidity units. Minting
// rounds the liquidity and both amounts up, withdrawing rounds them down, so
// every rounding error stays with the pool.

use soroban_sdk::Env;
use tidepool_math::{
    amounts_for_liquidity, i128_to_u128_safe, to_int_ceil, to_int_floor, u128_to_i128_saturating,
    CurveMath,
};

/// Amounts a provider has to supply to add `liquidity` to `[lower, upper)`
pub fn mint_amounts<C: CurveMath>(
    curve: &C,
    env: &Env,
    liquidity: i128,
    lower: i32,
    upper: i32,
    sqrt_price_current: u128,
) -> (i128, i128) {
    let units = i128_to_u128_safe(to_int_ceil(liquidity));
    quote(curve, env, units, lower, upper, sqrt_price_current, true)
}

/// Amounts released by removing `liquidity` from `[lower, upper)`
pub fn withdraw_amounts<C: CurveMath>(
    curve: &C,
    env: &Env,
    liquidity: i128,
    lower: i32,
    upper: i32,
    sqrt_price_current: u128,
) -> (i128, i128) {
    let units = i128_to_u128_safe(to_int_floor(liquidity));
    quote(curve, env, units, lower, upper, sqrt_price_current, false)
}

fn quote<C: CurveMath>(
    curve: &C,
    env: &Env,
    units: u128,
    lower: i32,
    upper: i32,
    sqrt_price_current: u128,
    round_up: bool,
) -> (i128, i128) {
    let (amount0, amount1) = amounts_for_liquidity(
        curve,
        env,
        units,
        curve.sqrt_price_for_tick(lower),
        curve.sqrt_price_for_tick(upper),
        sqrt_price_current,
        round_up,
    );
    (u128_to_i128_saturating(amount0), u128_to_i128_saturating(amount1))
}
