// SPDX-License-Identifier: MIT
// Liquidity rounding policy

use soroban_sdk::contracttype;
use crate::constants::{DEC_HALF, DEC_ONE};
use crate::decimal::truncate_dec;

/// How a minted or withdrawn liquidity amount is rounded before it is
/// written to ticks and the position ledger.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum LiquidityRounding {
    /// Drop the fractional part
    Truncate = 0,
    /// Round half to even
    BankersRound = 1,
    /// Keep all 18 fractional digits
    Exact = 2,
}

impl LiquidityRounding {
    pub fn apply(self, liquidity: i128) -> i128 {
        match self {
            LiquidityRounding::Truncate => truncate_dec(liquidity),
            LiquidityRounding::BankersRound => round_half_even(liquidity),
            LiquidityRounding::Exact => liquidity,
        }
    }
}

fn round_half_even(x: i128) -> i128 {
    let whole = x / DEC_ONE;
    let frac = (x % DEC_ONE).abs();

    let bump = frac > DEC_HALF || (frac == DEC_HALF && whole % 2 != 0);
    let rounded = if bump { whole + x.signum() } else { whole };

    rounded * DEC_ONE
}
