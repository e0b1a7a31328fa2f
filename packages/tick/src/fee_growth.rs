// Fee Growth Calculations
//
// Each tick stores the growth on its far side from the current price. Two
// boundary lookups and one subtraction give the growth inside any range,
// however often the ticks were crossed.

use soroban_sdk::Env;
use tidepool_math::{add_coins, empty, sub_coins, DecCoins};
use crate::update::TickStorage;

/// Growth on the side of `tick` that lies outside a range bounded by it
///
/// For a lower boundary that is the growth below the tick, for an upper
/// boundary the growth above it.
pub fn growth_across_boundary(
    outside: &DecCoins,
    tick: i32,
    current_tick: i32,
    fee_growth_global: &DecCoins,
    upper: bool,
) -> DecCoins {
    let price_below_tick = current_tick < tick;
    if upper == price_below_tick {
        outside.clone()
    } else {
        sub_coins(fee_growth_global, outside)
    }
}

/// Growth below `lower_tick` plus growth above `upper_tick`
pub fn fee_growth_outside<S: TickStorage>(
    env: &Env,
    storage: &S,
    lower_tick: i32,
    upper_tick: i32,
    current_tick: i32,
    fee_growth_global: &DecCoins,
) -> DecCoins {
    let lower = storage.tick_info(env, lower_tick);
    let upper = storage.tick_info(env, upper_tick);

    let below = growth_across_boundary(
        &lower.fee_growth_outside,
        lower_tick,
        current_tick,
        fee_growth_global,
        false,
    );
    let above = growth_across_boundary(
        &upper.fee_growth_outside,
        upper_tick,
        current_tick,
        fee_growth_global,
        true,
    );

    add_coins(&below, &above)
}

/// Growth accrued while the price was inside `[lower_tick, upper_tick)`
pub fn fee_growth_inside<S: TickStorage>(
    env: &Env,
    storage: &S,
    lower_tick: i32,
    upper_tick: i32,
    current_tick: i32,
    fee_growth_global: &DecCoins,
) -> DecCoins {
    let outside = fee_growth_outside(
        env,
        storage,
        lower_tick,
        upper_tick,
        current_tick,
        fee_growth_global,
    );
    sub_coins(fee_growth_global, &outside)
}

/// Baseline `fee_growth_outside` for a tick referenced for the first time
///
/// Ticks at or below the current price count as already crossed and start
/// with all growth so far; ticks above start empty.
pub fn initial_fee_growth_outside(
    env: &Env,
    tick: i32,
    current_tick: i32,
    fee_growth_global: &DecCoins,
) -> DecCoins {
    if tick <= current_tick {
        fee_growth_global.clone()
    } else {
        empty(env)
    }
}
