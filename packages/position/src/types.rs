use soroban_sdk::contracttype;
use tidepool_math::DecCoins;

/// Ledger entry for one owner's liquidity in one tick range
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    pub liquidity: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionInfo {
    pub liquidity: i128,
    pub amount0: i128,
    pub amount1: i128,
    pub uncollected_fees: DecCoins,
}
