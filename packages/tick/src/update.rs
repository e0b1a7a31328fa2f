// Tick Update and Crossing Logic

use soroban_sdk::Env;
use tidepool_math::{sub_coins, DecCoins};
use crate::error::TickError;
use crate::types::TickInfo;

/// Storage trait for tick operations
/// This allows the update module to work with any storage implementation
pub trait TickStorage {
    fn read_tick_info(&self, env: &Env, tick: i32) -> Option<TickInfo>;
    fn write_tick_info(&self, env: &Env, tick: i32, info: &TickInfo);
    fn remove_tick_info(&self, env: &Env, tick: i32);

    /// Stored record, or the zero record for a tick nothing references
    fn tick_info(&self, env: &Env, tick: i32) -> TickInfo {
        self.read_tick_info(env, tick)
            .unwrap_or_else(|| TickInfo::empty(env))
    }
}

/// Gross and net liquidity of `info` after applying `liquidity_delta`
///
/// Both boundaries move gross liquidity by `liquidity_delta`; net liquidity
/// gains the delta at a lower boundary and loses it at an upper one, so the
/// prefix sum of `liquidity_net` up to the current tick is the active
/// liquidity. Gross liquidity never goes below zero.
pub fn updated_liquidity(
    info: &TickInfo,
    liquidity_delta: i128,
    upper: bool,
) -> Result<(i128, i128), TickError> {
    let liquidity_gross = info
        .liquidity_gross
        .checked_add(liquidity_delta)
        .ok_or(TickError::Overflow)?;
    if liquidity_gross < 0 {
        return Err(TickError::InsufficientLiquidity);
    }

    let liquidity_net = if upper {
        info.liquidity_net.checked_sub(liquidity_delta)
    } else {
        info.liquidity_net.checked_add(liquidity_delta)
    }
    .ok_or(TickError::Overflow)?;

    Ok((liquidity_gross, liquidity_net))
}

/// Apply a liquidity change to one boundary of a range
///
/// `baseline` supplies `fee_growth_outside` when the tick goes from
/// unreferenced to referenced and is not called otherwise. A tick whose gross
/// liquidity returns to zero is deleted. Nothing is written on error.
///
/// Returns whether the tick flipped between initialized and uninitialized.
pub fn init_or_update_tick<S, E, F>(
    env: &Env,
    storage: &S,
    tick: i32,
    liquidity_delta: i128,
    upper: bool,
    baseline: F,
) -> Result<bool, E>
where
    S: TickStorage,
    E: From<TickError>,
    F: FnOnce() -> Result<DecCoins, E>,
{
    let mut info = storage.tick_info(env, tick);

    let liquidity_gross_before = info.liquidity_gross;
    let (liquidity_gross_after, liquidity_net_after) =
        updated_liquidity(&info, liquidity_delta, upper)?;

    let flipped = (liquidity_gross_after == 0) != (liquidity_gross_before == 0);

    if liquidity_gross_after == 0 {
        if liquidity_gross_before > 0 {
            storage.remove_tick_info(env, tick);
        }
        return Ok(flipped);
    }

    if liquidity_gross_before == 0 {
        info.fee_growth_outside = baseline()?;
    }

    info.liquidity_gross = liquidity_gross_after;
    info.liquidity_net = liquidity_net_after;

    storage.write_tick_info(env, tick, &info);

    Ok(flipped)
}

/// Cross a tick boundary during a swap
///
/// Flips `fee_growth_outside` to the other side of the tick and returns the
/// net liquidity to apply. Uninitialized ticks carry nothing and are left
/// unwritten.
pub fn cross_tick<S: TickStorage>(
    env: &Env,
    storage: &S,
    tick: i32,
    fee_growth_global: &DecCoins,
) -> i128 {
    let mut info = match storage.read_tick_info(env, tick) {
        Some(info) if info.is_initialized() => info,
        _ => return 0,
    };

    info.fee_growth_outside = sub_coins(fee_growth_global, &info.fee_growth_outside);

    storage.write_tick_info(env, tick, &info);

    info.liquidity_net
}
