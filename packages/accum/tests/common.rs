// Shared in-memory accumulator store

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use soroban_sdk::Env;
use tidepool_accum::{AccumPosition, AccumStore};

pub struct MemStore<R> {
    value: RefCell<Option<R>>,
    positions: RefCell<BTreeMap<u32, AccumPosition<R>>>,
}

impl<R> MemStore<R> {
    pub fn new() -> Self {
        Self {
            value: RefCell::new(None),
            positions: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn position_count(&self) -> usize {
        self.positions.borrow().len()
    }
}

impl<R: Clone> AccumStore<u32, R> for &MemStore<R> {
    fn read_value(&self, _env: &Env) -> Option<R> {
        self.value.borrow().clone()
    }

    fn write_value(&self, _env: &Env, value: &R) {
        *self.value.borrow_mut() = Some(value.clone());
    }

    fn read_position(&self, _env: &Env, key: &u32) -> Option<AccumPosition<R>> {
        self.positions.borrow().get(key).cloned()
    }

    fn write_position(&self, _env: &Env, key: &u32, position: &AccumPosition<R>) {
        self.positions.borrow_mut().insert(*key, position.clone());
    }

    fn remove_position(&self, _env: &Env, key: &u32) {
        self.positions.borrow_mut().remove(key);
    }
}
