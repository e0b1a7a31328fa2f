//! Keeper type definitions

use soroban_sdk::{contracttype, Address, Symbol};
use tidepool_math::{DecCoins, LiquidityRounding};

// ============================================================
// KEEPER CONFIG
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeeperConfig {
    /// Account allowed to manage pools, ticks and fee accounting
    pub admin: Address,
    /// Rounding applied to liquidity before it is minted or withdrawn
    pub liquidity_rounding: LiquidityRounding,
}

// ============================================================
// POOL
// ============================================================

/// Price state of a pool, owned by the surrounding AMM
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    pub current_tick: i32,
    /// sqrt(price) * 2^64
    pub current_sqrt_price: u128,
    pub token0: Symbol,
    pub token1: Symbol,
}

// ============================================================
// FEE POSITIONS
// ============================================================

/// Key of a shareholder in a pool's fee accumulator
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FeePositionKey {
    /// Owner-wide share set by `initialize_fee_position`
    Owner(Address),
    /// Share of one ledger position, settled against fee growth inside
    /// `[lower, upper)`
    Range(Address, i32, i32),
}

/// Persisted form of an accumulator position
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeePositionRecord {
    pub shares: i128,
    pub growth_at_last_sync: DecCoins,
    pub unclaimed: DecCoins,
}
