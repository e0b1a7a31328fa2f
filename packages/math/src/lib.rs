// Tidepool Math Package

#![no_std]

pub mod constants;
pub mod q64;
pub mod sqrt_price;
pub mod liquidity;
pub mod curve;
pub mod decimal;
pub mod coins;
pub mod rounding;

pub use constants::*;

pub use q64::{i128_to_u128_safe, mul_q64, u128_to_i128_saturating, ONE_X64};

pub use sqrt_price::get_sqrt_ratio_at_tick;

pub use liquidity::{get_amount_0_delta, get_amount_1_delta};

pub use curve::{amounts_for_liquidity, CurveMath, Q64Curve};

pub use decimal::{checked_mul_dec, dec, to_int_ceil, to_int_floor, truncate_dec};

pub use coins::{
    add_coins, amount_of, checked_add_coins, checked_sub_coins, coin, empty, is_zero, scale_coins,
    split_whole, sub_coins, to_token_amounts, Coins, DecCoins,
};

pub use rounding::LiquidityRounding;
