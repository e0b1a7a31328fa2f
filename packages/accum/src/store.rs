// Accumulator storage seam

use soroban_sdk::Env;

/// One shareholder's entry in an accumulator
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccumPosition<R> {
    /// Share count (`Dec`)
    pub shares: i128,
    /// Accumulator value when rewards were last folded into `unclaimed`
    pub growth_at_last_sync: R,
    /// Rewards already earned but not yet claimed
    pub unclaimed: R,
}

/// Storage trait for one accumulator
/// This allows the accumulator to work with any storage implementation
pub trait AccumStore<K, R> {
    fn read_value(&self, env: &Env) -> Option<R>;
    fn write_value(&self, env: &Env, value: &R);
    fn read_position(&self, env: &Env, key: &K) -> Option<AccumPosition<R>>;
    fn write_position(&self, env: &Env, key: &K, position: &AccumPosition<R>);
    fn remove_position(&self, env: &Env, key: &K);
}
