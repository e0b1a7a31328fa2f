// Lazy share-weighted reward accumulator
//
// The accumulator keeps a single running `value`: total rewards per share
// since creation. A position records the value it last synced at, so what it
// is owed is always
//
//     unclaimed + shares * (value - growth_at_last_sync)
//
// and adding rewards costs O(1) no matter how many positions exist.
//
// The `*_custom` variants take the value to settle against from the caller
// instead of the stored one. A caller that tracks a sub-range of the value
// (fee growth inside a tick range) passes that derived value.

use core::marker::PhantomData;
use soroban_sdk::Env;

use crate::error::AccumError;
use crate::reward::RewardUnit;
use crate::store::{AccumPosition, AccumStore};

pub struct Accumulator<'a, K, R, S> {
    env: &'a Env,
    store: S,
    value: R,
    _key: PhantomData<K>,
}

impl<'a, K, R, S> Accumulator<'a, K, R, S>
where
    R: RewardUnit,
    S: AccumStore<K, R>,
{
    /// Create a new accumulator with a zero value
    pub fn create(env: &'a Env, store: S) -> Result<Self, AccumError> {
        if store.read_value(env).is_some() {
            return Err(AccumError::AlreadyExists);
        }
        let value = R::zero(env);
        store.write_value(env, &value);
        Ok(Self { env, store, value, _key: PhantomData })
    }

    /// Load an existing accumulator
    pub fn load(env: &'a Env, store: S) -> Result<Self, AccumError> {
        let value = store.read_value(env).ok_or(AccumError::DoesNotExist)?;
        Ok(Self { env, store, value, _key: PhantomData })
    }

    pub fn value(&self) -> &R {
        &self.value
    }

    /// Add rewards for every share
    ///
    /// The stored value is left unchanged when the sum overflows.
    pub fn add_to_accumulator(&mut self, amount: &R) -> Result<(), AccumError> {
        self.value = self.value.plus(amount).ok_or(AccumError::Overflow)?;
        self.store.write_value(self.env, &self.value);
        Ok(())
    }

    // ========================================================
    // POSITIONS
    // ========================================================

    /// Create or overwrite a position synced at the current value
    ///
    /// Overwriting drops whatever the old entry had earned.
    pub fn new_position(&self, key: &K, shares: i128) -> Result<(), AccumError> {
        let value = self.value.clone();
        self.new_position_custom(key, shares, &value)
    }

    pub fn new_position_custom(&self, key: &K, shares: i128, value: &R) -> Result<(), AccumError> {
        if shares < 0 {
            return Err(AccumError::NegativeShares);
        }
        let position = AccumPosition {
            shares,
            growth_at_last_sync: value.clone(),
            unclaimed: R::zero(self.env),
        };
        self.store.write_position(self.env, key, &position);
        Ok(())
    }

    pub fn has_position(&self, key: &K) -> bool {
        self.store.read_position(self.env, key).is_some()
    }

    pub fn position(&self, key: &K) -> Result<AccumPosition<R>, AccumError> {
        self.store
            .read_position(self.env, key)
            .ok_or(AccumError::PositionNotFound)
    }

    pub fn position_size(&self, key: &K) -> Result<i128, AccumError> {
        Ok(self.position(key)?.shares)
    }

    /// Total owed to the position if it were claimed now
    pub fn pending_rewards(&self, key: &K) -> Result<R, AccumError> {
        self.pending_rewards_custom(key, &self.value)
    }

    pub fn pending_rewards_custom(&self, key: &K, value: &R) -> Result<R, AccumError> {
        let position = self.position(key)?;
        let earned = self.earned_since_sync(&position, value)?;
        position.unclaimed.plus(&earned).ok_or(AccumError::Overflow)
    }

    pub fn add_to_position(&self, key: &K, shares: i128) -> Result<(), AccumError> {
        if shares < 0 {
            return Err(AccumError::NegativeShares);
        }
        let total = self
            .position_size(key)?
            .checked_add(shares)
            .ok_or(AccumError::Overflow)?;
        let value = self.value.clone();
        self.update_position_custom(key, total, &value)
    }

    pub fn remove_from_position(&self, key: &K, shares: i128) -> Result<(), AccumError> {
        if shares < 0 {
            return Err(AccumError::NegativeShares);
        }
        let current = self.position_size(key)?;
        if shares > current {
            return Err(AccumError::InsufficientShares);
        }
        let value = self.value.clone();
        self.update_position_custom(key, current - shares, &value)
    }

    /// Fold what the old share count earned into `unclaimed`, then resync at
    /// `value` with `shares`
    pub fn update_position_custom(&self, key: &K, shares: i128, value: &R) -> Result<(), AccumError> {
        if shares < 0 {
            return Err(AccumError::NegativeShares);
        }
        let mut position = self.position(key)?;
        let earned = self.earned_since_sync(&position, value)?;

        position.unclaimed = position.unclaimed.plus(&earned).ok_or(AccumError::Overflow)?;
        position.shares = shares;
        position.growth_at_last_sync = value.clone();

        self.store.write_position(self.env, key, &position);
        Ok(())
    }

    /// Pay out the whole-unit part of what the position is owed
    ///
    /// Fractional dust stays in `unclaimed` while the position holds shares.
    /// A position with no shares is deleted once claimed and its dust is forfeited.
    pub fn claim_rewards(&self, key: &K) -> Result<R, AccumError> {
        self.claim_rewards_custom(key, &self.value)
    }

    pub fn claim_rewards_custom(&self, key: &K, value: &R) -> Result<R, AccumError> {
        let mut position = self.position(key)?;
        let earned = self.earned_since_sync(&position, value)?;
        let (whole, dust) = position
            .unclaimed
            .plus(&earned)
            .ok_or(AccumError::Overflow)?
            .split_whole(self.env);

        if position.shares == 0 {
            self.store.remove_position(self.env, key);
            return Ok(whole);
        }

        position.unclaimed = dust;
        position.growth_at_last_sync = value.clone();
        self.store.write_position(self.env, key, &position);
        Ok(whole)
    }

    fn earned_since_sync(&self, position: &AccumPosition<R>, value: &R) -> Result<R, AccumError> {
        value
            .minus(&position.growth_at_last_sync)
            .and_then(|growth| growth.scaled(self.env, position.shares))
            .ok_or(AccumError::Overflow)
    }
}
