// Tick Types

use soroban_sdk::{contracttype, Env};
use tidepool_math::{empty, DecCoins};

/// Information stored for each initialized tick
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TickInfo {
    /// Total liquidity referencing this tick as a boundary
    pub liquidity_gross: i128,
    /// Net liquidity change when crossing left-to-right
    pub liquidity_net: i128,
    /// Fee growth on the side of this tick away from the current price
    pub fee_growth_outside: DecCoins,
}

impl TickInfo {
    /// The record an unreferenced tick reads as
    pub fn empty(env: &Env) -> Self {
        Self {
            liquidity_gross: 0,
            liquidity_net: 0,
            fee_growth_outside: empty(env),
        }
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.liquidity_gross > 0
    }
}
