// SPDX-License-Identifier: MIT
// Multi-asset decimal amounts
//
// A `DecCoins` maps a denom to a `Dec` amount. Zero entries are never stored,
// so the empty map is the zero amount and equal amounts compare equal.

use soroban_sdk::{Env, Map, Symbol};
use crate::constants::DEC_ONE;
use crate::decimal::checked_mul_dec;

pub type DecCoins = Map<Symbol, i128>;

/// Whole token amounts keyed by denom
pub type Coins = Map<Symbol, i128>;

#[inline]
pub fn empty(env: &Env) -> DecCoins {
    Map::new(env)
}

/// A single-denom amount
pub fn coin(env: &Env, denom: Symbol, amount: i128) -> DecCoins {
    let mut coins = empty(env);
    if amount != 0 {
        coins.set(denom, amount);
    }
    coins
}

#[inline]
pub fn amount_of(coins: &DecCoins, denom: &Symbol) -> i128 {
    coins.get(denom.clone()).unwrap_or(0)
}

#[inline]
pub fn is_zero(coins: &DecCoins) -> bool {
    coins.is_empty()
}

fn set_canonical(coins: &mut DecCoins, denom: Symbol, amount: i128) {
    if amount == 0 {
        coins.remove(denom);
    } else {
        coins.set(denom, amount);
    }
}

pub fn add_coins(a: &DecCoins, b: &DecCoins) -> DecCoins {
    let mut sum = a.clone();
    for (denom, amount) in b.iter() {
        let next = amount_of(&sum, &denom) + amount;
        set_canonical(&mut sum, denom, next);
    }
    sum
}

/// Signed difference; an entry goes negative when `b` exceeds `a`
pub fn sub_coins(a: &DecCoins, b: &DecCoins) -> DecCoins {
    let mut diff = a.clone();
    for (denom, amount) in b.iter() {
        let next = amount_of(&diff, &denom) - amount;
        set_canonical(&mut diff, denom, next);
    }
    diff
}

/// `a + b`; `None` if any entry leaves the i128 range
pub fn checked_add_coins(a: &DecCoins, b: &DecCoins) -> Option<DecCoins> {
    let mut sum = a.clone();
    for (denom, amount) in b.iter() {
        let next = amount_of(&sum, &denom).checked_add(amount)?;
        set_canonical(&mut sum, denom, next);
    }
    Some(sum)
}

/// `a - b`; `None` if any entry leaves the i128 range
pub fn checked_sub_coins(a: &DecCoins, b: &DecCoins) -> Option<DecCoins> {
    let mut diff = a.clone();
    for (denom, amount) in b.iter() {
        let next = amount_of(&diff, &denom).checked_sub(amount)?;
        set_canonical(&mut diff, denom, next);
    }
    Some(diff)
}

/// Every entry multiplied by a decimal factor; `None` on overflow
pub fn scale_coins(env: &Env, coins: &DecCoins, factor: i128) -> Option<DecCoins> {
    let mut scaled = empty(env);
    for (denom, amount) in coins.iter() {
        let product = checked_mul_dec(env, amount, factor)?;
        set_canonical(&mut scaled, denom, product);
    }
    Some(scaled)
}

/// Split into (whole-unit part, fractional dust), both still in `Dec` units
pub fn split_whole(env: &Env, coins: &DecCoins) -> (DecCoins, DecCoins) {
    let mut whole = empty(env);
    let mut dust = empty(env);
    for (denom, amount) in coins.iter() {
        let frac = amount % DEC_ONE;
        set_canonical(&mut whole, denom.clone(), amount - frac);
        set_canonical(&mut dust, denom, frac);
    }
    (whole, dust)
}

/// Whole-unit `Dec` amounts converted to integer token amounts
pub fn to_token_amounts(env: &Env, coins: &DecCoins) -> Coins {
    let mut tokens = Map::new(env);
    for (denom, amount) in coins.iter() {
        set_canonical(&mut tokens, denom, amount / DEC_ONE);
    }
    tokens
}
