// Reward units distributed by the accumulator

use soroban_sdk::Env;
use tidepool_math::{
    checked_add_coins, checked_mul_dec, checked_sub_coins, empty, scale_coins, split_whole,
    DecCoins, DEC_ONE,
};

/// A quantity the accumulator can hand out per share.
///
/// Values are `Dec` scaled (10^18). Arithmetic returns `None` on overflow.
/// `scaled` multiplies by a decimal share count and `split_whole` separates what can be paid out in whole units from
/// the dust that stays behind.
pub trait RewardUnit: Clone {
    fn zero(env: &Env) -> Self;
    fn is_zero(&self) -> bool;
    fn plus(&self, other: &Self) -> Option<Self>;
    fn minus(&self, other: &Self) -> Option<Self>;
    fn scaled(&self, env: &Env, shares: i128) -> Option<Self>;
    fn split_whole(&self, env: &Env) -> (Self, Self);
}

/// Single-asset rewards
impl RewardUnit for i128 {
    fn zero(_env: &Env) -> Self {
        0
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn plus(&self, other: &Self) -> Option<Self> {
        self.checked_add(*other)
    }

    fn minus(&self, other: &Self) -> Option<Self> {
        self.checked_sub(*other)
    }

    fn scaled(&self, env: &Env, shares: i128) -> Option<Self> {
        checked_mul_dec(env, *self, shares)
    }

    fn split_whole(&self, _env: &Env) -> (Self, Self) {
        let dust = self % DEC_ONE;
        (self - dust, dust)
    }
}

/// Multi-asset rewards keyed by denom
impl RewardUnit for DecCoins {
    fn zero(env: &Env) -> Self {
        empty(env)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn plus(&self, other: &Self) -> Option<Self> {
        checked_add_coins(self, other)
    }

    fn minus(&self, other: &Self) -> Option<Self> {
        checked_sub_coins(self, other)
    }

    fn scaled(&self, env: &Env, shares: i128) -> Option<Self> {
        scale_coins(env, self, shares)
    }

    fn split_whole(&self, env: &Env) -> (Self, Self) {
        split_whole(env, self)
    }
}
