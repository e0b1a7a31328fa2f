#![allow(dead_code)]

use soroban_sdk::{
    symbol_short, testutils::storage::Persistent as _, testutils::Address as _, Address, Env,
    Map, Symbol, Val,
};
use tidepool_keeper::{FeeKeeper, FeeKeeperClient};
use tidepool_math::{coin, get_sqrt_ratio_at_tick, DecCoins, LiquidityRounding};

// Test constants
pub const POOL_ID: u64 = 1;
pub const DEFAULT_TICK: i32 = 0;

pub fn eth() -> Symbol {
    symbol_short!("ETH")
}

pub fn usdc() -> Symbol {
    symbol_short!("USDC")
}

pub fn eth_coins(env: &Env, amount: i128) -> DecCoins {
    coin(env, eth(), amount)
}

/// Keeper initialized with the default (truncating) rounding policy
pub fn setup_keeper(env: &Env) -> (FeeKeeperClient<'_>, Address) {
    setup_keeper_with_rounding(env, LiquidityRounding::Truncate)
}

pub fn setup_keeper_with_rounding(
    env: &Env,
    rounding: LiquidityRounding,
) -> (FeeKeeperClient<'_>, Address) {
    let admin = Address::generate(env);
    let keeper_id = env.register(FeeKeeper, ());
    let client = FeeKeeperClient::new(env, &keeper_id);
    client.initialize(&admin, &rounding);
    (client, admin)
}

pub fn create_pool(client: &FeeKeeperClient<'_>, pool_id: u64, tick: i32) {
    client.create_pool(
        &pool_id,
        &eth(),
        &usdc(),
        &get_sqrt_ratio_at_tick(tick),
        &tick,
    );
}

/// Keeper with one pool at `tick` and its fee accumulator
pub fn setup_pool(env: &Env, tick: i32) -> (FeeKeeperClient<'_>, Address) {
    let (client, admin) = setup_keeper(env);
    create_pool(&client, POOL_ID, tick);
    client.create_accumulator(&POOL_ID);
    (client, admin)
}

/// Move the pool price to `tick`
pub fn move_price(client: &FeeKeeperClient<'_>, pool_id: u64, tick: i32) {
    let mut pool = client.get_pool(&pool_id);
    pool.current_tick = tick;
    pool.current_sqrt_price = get_sqrt_ratio_at_tick(tick);
    client.set_pool(&pool_id, &pool);
}

/// Every persistent entry of the keeper contract
pub fn storage_snapshot(env: &Env, client: &FeeKeeperClient<'_>) -> Map<Val, Val> {
    env.as_contract(&client.address, || env.storage().persistent().all())
}

/// Move the pool price to `tick`, crossing every listed tick on the way
pub fn swap_to(client: &FeeKeeperClient<'_>, pool_id: u64, initialized: &[i32], tick: i32) {
    let current = client.get_pool(&pool_id).current_tick;
    for t in initialized.iter().copied() {
        let crossed_up = current < t && t <= tick;
        let crossed_down = tick < t && t <= current;
        if crossed_up || crossed_down {
            client.cross_tick(&pool_id, &t);
        }
    }
    move_price(client, pool_id, tick);
}
