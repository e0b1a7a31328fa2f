// Keeper events module for Tidepool
// Topics carry the event name, data carries the pool id first

use soroban_sdk::{Address, Env, Symbol};
use tidepool_math::{Coins, LiquidityRounding};

/// Topics: ("KeeperInit",)
/// Data: (admin, liquidity_rounding)
pub fn emit_initialized(env: &Env, admin: &Address, rounding: LiquidityRounding) {
    env.events().publish(
        (Symbol::new(env, "KeeperInit"),),
        (admin.clone(), rounding as u32),
    );
}

/// Topics: ("RoundingSet",)
/// Data: liquidity_rounding
pub fn emit_rounding_updated(env: &Env, rounding: LiquidityRounding) {
    env.events()
        .publish((Symbol::new(env, "RoundingSet"),), rounding as u32);
}

/// Topics: ("PoolCreated",)
/// Data: (pool_id, token0, token1, sqrt_price, tick)
pub fn emit_pool_created(
    env: &Env,
    pool_id: u64,
    token0: &Symbol,
    token1: &Symbol,
    sqrt_price: u128,
    tick: i32,
) {
    env.events().publish(
        (Symbol::new(env, "PoolCreated"),),
        (pool_id, token0.clone(), token1.clone(), sqrt_price, tick),
    );
}

/// Topics: ("PoolUpdated",)
/// Data: (pool_id, sqrt_price, tick)
pub fn emit_pool_updated(env: &Env, pool_id: u64, sqrt_price: u128, tick: i32) {
    env.events().publish(
        (Symbol::new(env, "PoolUpdated"),),
        (pool_id, sqrt_price, tick),
    );
}

/// Topics: ("AccumCreated",)
/// Data: pool_id
pub fn emit_accumulator_created(env: &Env, pool_id: u64) {
    env.events()
        .publish((Symbol::new(env, "AccumCreated"),), pool_id);
}

/// Topics: ("FeeCharged",)
/// Data: (pool_id, denom, amount)
pub fn emit_fee_charged(env: &Env, pool_id: u64, denom: &Symbol, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "FeeCharged"),),
        (pool_id, denom.clone(), amount),
    );
}

/// Topics: ("FeePosInit",)
/// Data: (pool_id, owner, liquidity)
pub fn emit_fee_position_initialized(env: &Env, pool_id: u64, owner: &Address, liquidity: i128) {
    env.events().publish(
        (Symbol::new(env, "FeePosInit"),),
        (pool_id, owner.clone(), liquidity),
    );
}

/// Topics: ("TickUpdated",)
/// Data: (pool_id, tick, liquidity_delta, flipped)
pub fn emit_tick_updated(env: &Env, pool_id: u64, tick: i32, liquidity_delta: i128, flipped: bool) {
    env.events().publish(
        (Symbol::new(env, "TickUpdated"),),
        (pool_id, tick, liquidity_delta, flipped),
    );
}

/// Topics: ("TickCrossed",)
/// Data: (pool_id, tick, liquidity_net)
pub fn emit_tick_crossed(env: &Env, pool_id: u64, tick: i32, liquidity_net: i128) {
    env.events().publish(
        (Symbol::new(env, "TickCrossed"),),
        (pool_id, tick, liquidity_net),
    );
}

/// Topics: ("Mint",)
/// Data: (pool_id, owner, lower_tick, upper_tick, liquidity, amount0, amount1)
pub fn emit_mint(
    env: &Env,
    pool_id: u64,
    owner: &Address,
    lower: i32,
    upper: i32,
    liquidity: i128,
    amount0: i128,
    amount1: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Mint"),),
        (pool_id, owner.clone(), lower, upper, liquidity, amount0, amount1),
    );
}

/// Topics: ("Withdraw",)
/// Data: (pool_id, owner, lower_tick, upper_tick, liquidity, amount0, amount1)
pub fn emit_withdraw(
    env: &Env,
    pool_id: u64,
    owner: &Address,
    lower: i32,
    upper: i32,
    liquidity: i128,
    amount0: i128,
    amount1: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Withdraw"),),
        (pool_id, owner.clone(), lower, upper, liquidity, amount0, amount1),
    );
}

/// Topics: ("FeePosSynced",)
/// Data: (pool_id, owner, lower_tick, upper_tick, shares)
pub fn emit_fee_position_synced(
    env: &Env,
    pool_id: u64,
    owner: &Address,
    lower: i32,
    upper: i32,
    shares: i128,
) {
    env.events().publish(
        (Symbol::new(env, "FeePosSynced"),),
        (pool_id, owner.clone(), lower, upper, shares),
    );
}

/// Topics: ("FeesCollected",)
/// Data: (pool_id, owner, lower_tick, upper_tick, fees)
pub fn emit_fees_collected(
    env: &Env,
    pool_id: u64,
    owner: &Address,
    lower: i32,
    upper: i32,
    fees: &Coins,
) {
    env.events().publish(
        (Symbol::new(env, "FeesCollected"),),
        (pool_id, owner.clone(), lower, upper, fees.clone()),
    );
}
