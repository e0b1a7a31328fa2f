// Shared in-memory tick store

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use soroban_sdk::{symbol_short, Env};
use tidepool_math::{coin, DecCoins};
use tidepool_tick::{TickInfo, TickStorage};

#[derive(Default)]
pub struct MemTicks {
    ticks: RefCell<BTreeMap<i32, TickInfo>>,
}

impl MemTicks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ticks.borrow().len()
    }

    pub fn net_liquidity_up_to(&self, tick: i32) -> i128 {
        self.ticks
            .borrow()
            .range(..=tick)
            .map(|(_, info)| info.liquidity_net)
            .sum()
    }
}

impl TickStorage for MemTicks {
    fn read_tick_info(&self, _env: &Env, tick: i32) -> Option<TickInfo> {
        self.ticks.borrow().get(&tick).cloned()
    }

    fn write_tick_info(&self, _env: &Env, tick: i32, info: &TickInfo) {
        self.ticks.borrow_mut().insert(tick, info.clone());
    }

    fn remove_tick_info(&self, _env: &Env, tick: i32) {
        self.ticks.borrow_mut().remove(&tick);
    }
}

pub fn eth(env: &Env, amount: i128) -> DecCoins {
    coin(env, symbol_short!("ETH"), amount)
}
