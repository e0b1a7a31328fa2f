#![no_std]

pub mod error;
pub mod types;
pub mod update;
pub mod fee_growth;

pub use error::TickError;
pub use types::TickInfo;
pub use update::{cross_tick, init_or_update_tick, updated_liquidity, TickStorage};
pub use fee_growth::{
    fee_growth_inside, fee_growth_outside, growth_across_boundary, initial_fee_growth_outside,
};
