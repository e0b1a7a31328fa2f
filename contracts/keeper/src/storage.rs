// Keeper storage module for Tidepool
//
// Everything is per pool: ticks, ledger entries and the fee accumulator are
// keyed by `pool_id`, so pools never share state.

use soroban_sdk::{contracttype, Address, Env, IntoVal, Val};
use tidepool_accum::{AccumPosition, AccumStore, Accumulator};
use tidepool_math::DecCoins;
use tidepool_position::Position;
use tidepool_tick::{TickInfo, TickStorage};

use crate::error::KeeperError;
use crate::types::{FeePositionKey, FeePositionRecord, KeeperConfig, Pool};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Keeper configuration
    Config,
    /// Pool price state by pool id
    Pool(u64),
    /// Tick record by (pool, tick)
    Tick(u64, i32),
    /// Ledger entry by (pool, owner, lower_tick, upper_tick)
    Position(u64, Address, i32, i32),
    /// Fee accumulator value by pool
    FeeAccumValue(u64),
    /// Fee accumulator position by (pool, key)
    FeeAccumPosition(u64, FeePositionKey),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// TTL bump threshold
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

fn write<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    extend_ttl(env, key);
}

// ============================================================
// CONFIG
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Config)
}

pub fn read_config(env: &Env) -> Result<KeeperConfig, KeeperError> {
    env.storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or(KeeperError::NotInitialized)
}

pub fn write_config(env: &Env, config: &KeeperConfig) {
    write(env, &DataKey::Config, config);
}

// ============================================================
// POOLS
// ============================================================

pub fn has_pool(env: &Env, pool_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Pool(pool_id))
}

pub fn read_pool(env: &Env, pool_id: u64) -> Option<Pool> {
    env.storage().persistent().get(&DataKey::Pool(pool_id))
}

pub fn write_pool(env: &Env, pool_id: u64, pool: &Pool) {
    write(env, &DataKey::Pool(pool_id), pool);
}

// ============================================================
// POSITION LEDGER
// ============================================================

fn position_key(pool_id: u64, owner: &Address, lower: i32, upper: i32) -> DataKey {
    DataKey::Position(pool_id, owner.clone(), lower, upper)
}

pub fn read_position(
    env: &Env,
    pool_id: u64,
    owner: &Address,
    lower: i32,
    upper: i32,
) -> Option<Position> {
    env.storage()
        .persistent()
        .get(&position_key(pool_id, owner, lower, upper))
}

pub fn write_position(
    env: &Env,
    pool_id: u64,
    owner: &Address,
    lower: i32,
    upper: i32,
    position: &Position,
) {
    write(env, &position_key(pool_id, owner, lower, upper), position);
}

pub fn remove_position(env: &Env, pool_id: u64, owner: &Address, lower: i32, upper: i32) {
    env.storage()
        .persistent()
        .remove(&position_key(pool_id, owner, lower, upper));
}

// ============================================================
// TICKS
// ============================================================

/// Tick registry of one pool
pub struct PoolTicks {
    pool_id: u64,
}

impl PoolTicks {
    pub fn new(pool_id: u64) -> Self {
        Self { pool_id }
    }
}

impl TickStorage for PoolTicks {
    fn read_tick_info(&self, env: &Env, tick: i32) -> Option<TickInfo> {
        env.storage()
            .persistent()
            .get(&DataKey::Tick(self.pool_id, tick))
    }

    fn write_tick_info(&self, env: &Env, tick: i32, info: &TickInfo) {
        write(env, &DataKey::Tick(self.pool_id, tick), info);
    }

    fn remove_tick_info(&self, env: &Env, tick: i32) {
        env.storage()
            .persistent()
            .remove(&DataKey::Tick(self.pool_id, tick));
    }
}

// ============================================================
// FEE ACCUMULATOR
// ============================================================

/// Fee accumulator of one pool
pub struct FeeAccumStore {
    pool_id: u64,
}

impl FeeAccumStore {
    pub fn new(pool_id: u64) -> Self {
        Self { pool_id }
    }

    fn position_key(&self, key: &FeePositionKey) -> DataKey {
        DataKey::FeeAccumPosition(self.pool_id, key.clone())
    }
}

impl AccumStore<FeePositionKey, DecCoins> for FeeAccumStore {
    fn read_value(&self, env: &Env) -> Option<DecCoins> {
        env.storage()
            .persistent()
            .get(&DataKey::FeeAccumValue(self.pool_id))
    }

    fn write_value(&self, env: &Env, value: &DecCoins) {
        write(env, &DataKey::FeeAccumValue(self.pool_id), value);
    }

    fn read_position(&self, env: &Env, key: &FeePositionKey) -> Option<AccumPosition<DecCoins>> {
        let record: FeePositionRecord = env.storage().persistent().get(&self.position_key(key))?;
        Some(AccumPosition {
            shares: record.shares,
            growth_at_last_sync: record.growth_at_last_sync,
            unclaimed: record.unclaimed,
        })
    }

    fn write_position(&self, env: &Env, key: &FeePositionKey, position: &AccumPosition<DecCoins>) {
        let record = FeePositionRecord {
            shares: position.shares,
            growth_at_last_sync: position.growth_at_last_sync.clone(),
            unclaimed: position.unclaimed.clone(),
        };
        write(env, &self.position_key(key), &record);
    }

    fn remove_position(&self, env: &Env, key: &FeePositionKey) {
        env.storage().persistent().remove(&self.position_key(key));
    }
}

pub type FeeAccumulator<'a> = Accumulator<'a, FeePositionKey, DecCoins, FeeAccumStore>;
