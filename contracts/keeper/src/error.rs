// Keeper error module for Tidepool

use soroban_sdk::contracterror;
use tidepool_accum::AccumError;
use tidepool_position::PositionError;
use tidepool_tick::TickError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum KeeperError {
    // Initialization errors (100-199)
    AlreadyInitialized = 100,
    NotInitialized = 101,

    // Pool errors (200-299)
    PoolNotFound = 200,
    PoolAlreadyExists = 201,

    // Fee accumulator errors (300-399)
    AccumulatorDoesNotExist = 300,
    AccumulatorAlreadyExists = 301,
    /// Fee position read before it was initialized
    PositionNotFound = 302,
    NegativeShares = 303,
    InsufficientShares = 304,
    /// Fees are only ever added
    InvalidFeeAmount = 305,

    // Tick errors (400-499)
    InvalidTick = 400,
    /// Lower tick must be < upper tick
    InvalidTickRange = 401,

    // Liquidity errors (500-599)
    ZeroLiquidity = 500,
    /// No ledger entry for (pool, owner, lower, upper)
    PositionDoesNotExist = 501,
    InsufficientLiquidity = 502,

    // Math errors (700-799)
    Overflow = 700,
}

impl From<AccumError> for KeeperError {
    fn from(err: AccumError) -> Self {
        match err {
            AccumError::AlreadyExists => KeeperError::AccumulatorAlreadyExists,
            AccumError::DoesNotExist => KeeperError::AccumulatorDoesNotExist,
            AccumError::PositionNotFound => KeeperError::PositionNotFound,
            AccumError::NegativeShares => KeeperError::NegativeShares,
            AccumError::InsufficientShares => KeeperError::InsufficientShares,
            AccumError::Overflow => KeeperError::Overflow,
        }
    }
}

impl From<PositionError> for KeeperError {
    fn from(err: PositionError) -> Self {
        match err {
            PositionError::InvalidTick => KeeperError::InvalidTick,
            PositionError::InvalidTickRange => KeeperError::InvalidTickRange,
            PositionError::ZeroLiquidity => KeeperError::ZeroLiquidity,
            PositionError::InsufficientLiquidity => KeeperError::InsufficientLiquidity,
            PositionError::Overflow => KeeperError::Overflow,
        }
    }
}

impl From<TickError> for KeeperError {
    fn from(err: TickError) -> Self {
        match err {
            TickError::InsufficientLiquidity => KeeperError::InsufficientLiquidity,
            TickError::Overflow => KeeperError::Overflow,
        }
    }
}
