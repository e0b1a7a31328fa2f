#![no_std]

pub mod types;
pub mod error;
pub mod manager;
pub mod amounts;

pub use types::{Position, PositionInfo};
pub use error::PositionError;
pub use manager::{
    add_liquidity, checked_liquidity, positive_liquidity, remove_liquidity, validate_ticks,
};
pub use amounts::{mint_amounts, withdraw_amounts};
