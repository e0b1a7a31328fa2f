#![no_std]

//! # Tidepool Keeper
//!
//! Fee accounting and tick-indexed liquidity for concentrated-liquidity pools.
//!
//! ## Responsibilities:
//! 1. Tick registry (gross/net liquidity, fee growth outside)
//! 2. Per-pool fee accumulator with lazy share-weighted distribution
//! 3. Fee growth range queries
//! 4. Position ledger (mint, withdraw, fee sync and collection)
//!
//! Token custody is not handled here: mint and withdraw return the amounts
//! the caller has to move.

use soroban_sdk::{contract, contractimpl, log, Address, Env, Symbol};

use tidepool_accum::AccumError;
use tidepool_math::{
    coin, empty, to_token_amounts, Coins, DecCoins, LiquidityRounding, Q64Curve,
    MAX_TICK, MIN_TICK,
};
use tidepool_position::{
    add_liquidity, checked_liquidity, mint_amounts, positive_liquidity, remove_liquidity,
    validate_ticks, withdraw_amounts, Position, PositionInfo,
};
use tidepool_tick::{
    fee_growth_inside, fee_growth_outside, init_or_update_tick, initial_fee_growth_outside,
    updated_liquidity, TickInfo, TickStorage,
};

mod error;
mod events;
mod storage;
mod types;

pub use error::KeeperError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct FeeKeeper;

#[contractimpl]
impl FeeKeeper {
    // ========================================================
    // INITIALIZATION & CONFIG
    // ========================================================

    /// Initialize keeper
    ///
    /// # Arguments
    /// * `admin` - Account that manages pools and fee accounting
    /// * `liquidity_rounding` - Rounding applied to minted/withdrawn liquidity
    pub fn initialize(
        env: Env,
        admin: Address,
        liquidity_rounding: LiquidityRounding,
    ) -> Result<(), KeeperError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(KeeperError::AlreadyInitialized);
        }

        let config = KeeperConfig {
            admin: admin.clone(),
            liquidity_rounding,
        };
        write_config(&env, &config);

        emit_initialized(&env, &admin, liquidity_rounding);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<KeeperConfig, KeeperError> {
        read_config(&env)
    }

    /// Change the liquidity rounding policy
    pub fn set_liquidity_rounding(
        env: Env,
        liquidity_rounding: LiquidityRounding,
    ) -> Result<(), KeeperError> {
        let mut config = Self::require_admin(&env)?;
        config.liquidity_rounding = liquidity_rounding;
        write_config(&env, &config);

        emit_rounding_updated(&env, liquidity_rounding);

        Ok(())
    }

    // ========================================================
    // POOLS
    // ========================================================

    /// Register a pool's price state
    ///
    /// The fee accumulator is a separate step (`create_accumulator`).
    pub fn create_pool(
        env: Env,
        pool_id: u64,
        token0: Symbol,
        token1: Symbol,
        sqrt_price: u128,
        tick: i32,
    ) -> Result<(), KeeperError> {
        Self::require_admin(&env)?;

        if has_pool(&env, pool_id) {
            log!(&env, "pool already exists", pool_id);
            return Err(KeeperError::PoolAlreadyExists);
        }
        if !(MIN_TICK..=MAX_TICK).contains(&tick) {
            log!(&env, "invalid pool tick", tick);
            return Err(KeeperError::InvalidTick);
        }

        let pool = Pool {
            current_tick: tick,
            current_sqrt_price: sqrt_price,
            token0: token0.clone(),
            token1: token1.clone(),
        };
        write_pool(&env, pool_id, &pool);

        emit_pool_created(&env, pool_id, &token0, &token1, sqrt_price, tick);

        Ok(())
    }

    pub fn get_pool(env: Env, pool_id: u64) -> Result<Pool, KeeperError> {
        Self::load_pool(&env, pool_id)
    }

    /// Overwrite a pool's price state (price moves happen outside the keeper)
    pub fn set_pool(env: Env, pool_id: u64, pool: Pool) -> Result<(), KeeperError> {
        Self::require_admin(&env)?;
        Self::load_pool(&env, pool_id)?;

        write_pool(&env, pool_id, &pool);

        emit_pool_updated(&env, pool_id, pool.current_sqrt_price, pool.current_tick);

        Ok(())
    }

    // ========================================================
    // FEE ACCUMULATOR
    // ========================================================

    pub fn create_accumulator(env: Env, pool_id: u64) -> Result<(), KeeperError> {
        Self::require_admin(&env)?;

        FeeAccumulator::create(&env, FeeAccumStore::new(pool_id)).map_err(|err| {
            log!(&env, "fee accumulator already exists", pool_id);
            KeeperError::from(err)
        })?;

        emit_accumulator_created(&env, pool_id);

        Ok(())
    }

    /// Add fee growth per unit of liquidity to a pool's accumulator
    ///
    /// The single entry point for collected trading fees.
    pub fn charge_fee(
        env: Env,
        pool_id: u64,
        denom: Symbol,
        amount: i128,
    ) -> Result<(), KeeperError> {
        Self::require_admin(&env)?;

        if amount < 0 {
            log!(&env, "negative fee", pool_id, amount);
            return Err(KeeperError::InvalidFeeAmount);
        }

        let mut accum = Self::load_accumulator(&env, pool_id)?;
        accum.add_to_accumulator(&coin(&env, denom.clone(), amount))?;

        emit_fee_charged(&env, pool_id, &denom, amount);

        Ok(())
    }

    pub fn get_fee_accumulator_value(env: Env, pool_id: u64) -> Result<DecCoins, KeeperError> {
        Self::fee_growth_global(&env, pool_id)
    }

    /// Set the owner's fee shares to `liquidity`, synced at the current value
    ///
    /// Replaces the previous share count. Anything the old entry had earned
    /// and not claimed is dropped.
    pub fn initialize_fee_position(
        env: Env,
        pool_id: u64,
        owner: Address,
        liquidity: i128,
    ) -> Result<(), KeeperError> {
        Self::require_admin(&env)?;

        let accum = Self::load_accumulator(&env, pool_id)?;
        accum.new_position(&FeePositionKey::Owner(owner.clone()), liquidity)?;

        emit_fee_position_initialized(&env, pool_id, &owner, liquidity);

        Ok(())
    }

    pub fn get_fee_position_size(
        env: Env,
        pool_id: u64,
        owner: Address,
    ) -> Result<i128, KeeperError> {
        let accum = Self::load_accumulator(&env, pool_id)?;
        Ok(accum.position_size(&FeePositionKey::Owner(owner))?)
    }

    // ========================================================
    // TICK REGISTRY
    // ========================================================

    /// Tick record; an unreferenced tick reads as the zero record
    pub fn get_tick_info(env: Env, pool_id: u64, tick: i32) -> TickInfo {
        PoolTicks::new(pool_id).tick_info(&env, tick)
    }

    pub fn set_tick_info(
        env: Env,
        pool_id: u64,
        tick: i32,
        info: TickInfo,
    ) -> Result<(), KeeperError> {
        Self::require_admin(&env)?;
        PoolTicks::new(pool_id).write_tick_info(&env, tick, &info);
        Ok(())
    }

    /// Apply a liquidity change to one boundary tick
    ///
    /// Returns whether the tick flipped between initialized and uninitialized.
    pub fn init_or_update_tick(
        env: Env,
        pool_id: u64,
        tick: i32,
        liquidity_delta: i128,
        upper: bool,
    ) -> Result<bool, KeeperError> {
        Self::require_admin(&env)?;

        if !(MIN_TICK..=MAX_TICK).contains(&tick) {
            log!(&env, "invalid tick", tick);
            return Err(KeeperError::InvalidTick);
        }
        Self::load_pool(&env, pool_id)?;

        Self::update_tick(&env, pool_id, tick, liquidity_delta, upper)
    }

    /// Flip a tick's outside growth as the price crosses it
    ///
    /// Returns the net liquidity the swap applies when crossing left to right.
    pub fn cross_tick(env: Env, pool_id: u64, tick: i32) -> Result<i128, KeeperError> {
        Self::require_admin(&env)?;

        Self::load_pool(&env, pool_id)?;
        let global = Self::fee_growth_global(&env, pool_id)?;

        let liquidity_net = tidepool_tick::cross_tick(&env, &PoolTicks::new(pool_id), tick, &global);

        emit_tick_crossed(&env, pool_id, tick, liquidity_net);

        Ok(liquidity_net)
    }

    // ========================================================
    // FEE GROWTH QUERIES
    // ========================================================

    /// Growth below `lower_tick` plus growth above `upper_tick`
    pub fn get_fee_growth_outside(
        env: Env,
        pool_id: u64,
        lower_tick: i32,
        upper_tick: i32,
    ) -> Result<DecCoins, KeeperError> {
        let pool = Self::load_pool(&env, pool_id)?;
        let global = Self::fee_growth_global(&env, pool_id)?;

        Ok(fee_growth_outside(
            &env,
            &PoolTicks::new(pool_id),
            lower_tick,
            upper_tick,
            pool.current_tick,
            &global,
        ))
    }

    /// Growth accrued while the price was inside `[lower_tick, upper_tick)`
    pub fn get_fee_growth_inside(
        env: Env,
        pool_id: u64,
        lower_tick: i32,
        upper_tick: i32,
    ) -> Result<DecCoins, KeeperError> {
        let pool = Self::load_pool(&env, pool_id)?;
        let global = Self::fee_growth_global(&env, pool_id)?;

        Ok(fee_growth_inside(
            &env,
            &PoolTicks::new(pool_id),
            lower_tick,
            upper_tick,
            pool.current_tick,
            &global,
        ))
    }

    /// Outside growth a tick starts with when it is first referenced
    pub fn initial_fee_growth_outside(
        env: Env,
        pool_id: u64,
        tick: i32,
    ) -> Result<DecCoins, KeeperError> {
        Self::initial_growth(&env, pool_id, tick)
    }

    // ========================================================
    // POSITION LEDGER
    // ========================================================

    /// Add liquidity to `[lower_tick, upper_tick)`
    ///
    /// Returns the token amounts the caller must supply, rounded up. The fee
    /// position is left alone; call `sync_fee_position` to bring it in line.
    pub fn mint(
        env: Env,
        pool_id: u64,
        owner: Address,
        liquidity_delta: i128,
        lower_tick: i32,
        upper_tick: i32,
    ) -> Result<(i128, i128), KeeperError> {
        owner.require_auth();

        Self::check_ticks(&env, lower_tick, upper_tick)?;
        let config = read_config(&env)?;
        let liquidity = checked_liquidity(config.liquidity_rounding, liquidity_delta)?;

        let pool = Self::load_pool(&env, pool_id)?;
        Self::load_accumulator(&env, pool_id)?;

        let mut position = read_position(&env, pool_id, &owner, lower_tick, upper_tick)
            .unwrap_or_default();
        add_liquidity(&mut position, liquidity).map_err(|err| {
            log!(&env, "position liquidity overflow", pool_id, liquidity);
            KeeperError::from(err)
        })?;
        Self::check_tick_update(&env, pool_id, lower_tick, liquidity, false)?;
        Self::check_tick_update(&env, pool_id, upper_tick, liquidity, true)?;

        Self::update_tick(&env, pool_id, lower_tick, liquidity, false)?;
        Self::update_tick(&env, pool_id, upper_tick, liquidity, true)?;

        write_position(&env, pool_id, &owner, lower_tick, upper_tick, &position);

        let (amount0, amount1) = mint_amounts(
            &Q64Curve,
            &env,
            liquidity,
            lower_tick,
            upper_tick,
            pool.current_sqrt_price,
        );

        emit_mint(&env, pool_id, &owner, lower_tick, upper_tick, liquidity, amount0, amount1);

        Ok((amount0, amount1))
    }

    /// Remove liquidity from `[lower_tick, upper_tick)`
    ///
    /// The requested amount is taken as is; the rounding policy only shapes
    /// what gets minted. Fees earned so far are folded into the range fee
    /// position before its shares shrink. Returns the token amounts released,
    /// rounded down.
    pub fn withdraw(
        env: Env,
        pool_id: u64,
        owner: Address,
        liquidity_delta: i128,
        lower_tick: i32,
        upper_tick: i32,
    ) -> Result<(i128, i128), KeeperError> {
        owner.require_auth();

        Self::check_ticks(&env, lower_tick, upper_tick)?;
        let liquidity = positive_liquidity(liquidity_delta)?;

        let pool = Self::load_pool(&env, pool_id)?;
        let accum = Self::load_accumulator(&env, pool_id)?;

        let mut position = Self::load_position(&env, pool_id, &owner, lower_tick, upper_tick)?;
        remove_liquidity(&mut position, liquidity)?;
        Self::check_tick_update(&env, pool_id, lower_tick, -liquidity, false)?;
        Self::check_tick_update(&env, pool_id, upper_tick, -liquidity, true)?;

        let key = FeePositionKey::Range(owner.clone(), lower_tick, upper_tick);
        let tracked = accum.has_position(&key);
        if tracked {
            let inside = fee_growth_inside(
                &env,
                &PoolTicks::new(pool_id),
                lower_tick,
                upper_tick,
                pool.current_tick,
                accum.value(),
            );
            accum.update_position_custom(&key, position.liquidity, &inside)?;
        }

        Self::update_tick(&env, pool_id, lower_tick, -liquidity, false)?;
        Self::update_tick(&env, pool_id, upper_tick, -liquidity, true)?;

        if position.liquidity == 0 && !tracked {
            remove_position(&env, pool_id, &owner, lower_tick, upper_tick);
        } else {
            write_position(&env, pool_id, &owner, lower_tick, upper_tick, &position);
        }

        let (amount0, amount1) = withdraw_amounts(
            &Q64Curve,
            &env,
            liquidity,
            lower_tick,
            upper_tick,
            pool.current_sqrt_price,
        );

        emit_withdraw(&env, pool_id, &owner, lower_tick, upper_tick, liquidity, amount0, amount1);

        Ok((amount0, amount1))
    }

    /// Bring the range fee position in line with the ledger
    ///
    /// The first sync starts tracking at the current fee growth inside, so
    /// earlier history is excluded. Later syncs fold what the stored share
    /// count earned into the position, then adopt the ledger liquidity.
    pub fn sync_fee_position(
        env: Env,
        pool_id: u64,
        owner: Address,
        lower_tick: i32,
        upper_tick: i32,
    ) -> Result<(), KeeperError> {
        owner.require_auth();

        Self::check_ticks(&env, lower_tick, upper_tick)?;
        let pool = Self::load_pool(&env, pool_id)?;
        let accum = Self::load_accumulator(&env, pool_id)?;
        let position = Self::load_position(&env, pool_id, &owner, lower_tick, upper_tick)?;

        let inside = fee_growth_inside(
            &env,
            &PoolTicks::new(pool_id),
            lower_tick,
            upper_tick,
            pool.current_tick,
            accum.value(),
        );

        let key = FeePositionKey::Range(owner.clone(), lower_tick, upper_tick);
        if accum.has_position(&key) {
            accum.update_position_custom(&key, position.liquidity, &inside)?;
        } else {
            accum.new_position_custom(&key, position.liquidity, &inside)?;
        }

        emit_fee_position_synced(&env, pool_id, &owner, lower_tick, upper_tick, position.liquidity);

        Ok(())
    }

    /// Claim the whole-token fees a range position has earned
    ///
    /// Fractional dust stays behind for the next claim while the position
    /// holds liquidity. A ledger entry with no liquidity left is removed once
    /// its fees are collected, and its dust with it.
    pub fn collect_fees(
        env: Env,
        pool_id: u64,
        owner: Address,
        lower_tick: i32,
        upper_tick: i32,
    ) -> Result<Coins, KeeperError> {
        owner.require_auth();

        Self::check_ticks(&env, lower_tick, upper_tick)?;
        let pool = Self::load_pool(&env, pool_id)?;
        let accum = Self::load_accumulator(&env, pool_id)?;
        let position = Self::load_position(&env, pool_id, &owner, lower_tick, upper_tick)?;

        let inside = fee_growth_inside(
            &env,
            &PoolTicks::new(pool_id),
            lower_tick,
            upper_tick,
            pool.current_tick,
            accum.value(),
        );

        let key = FeePositionKey::Range(owner.clone(), lower_tick, upper_tick);
        let fees = if accum.has_position(&key) {
            accum.update_position_custom(&key, position.liquidity, &inside)?;
            let claimed = accum.claim_rewards_custom(&key, &inside)?;
            to_token_amounts(&env, &claimed)
        } else {
            empty(&env)
        };

        if position.liquidity == 0 {
            remove_position(&env, pool_id, &owner, lower_tick, upper_tick);
        }

        emit_fees_collected(&env, pool_id, &owner, lower_tick, upper_tick, &fees);

        Ok(fees)
    }

    /// Ledger entry; an unknown range reads as zero liquidity
    pub fn get_position(
        env: Env,
        pool_id: u64,
        owner: Address,
        lower_tick: i32,
        upper_tick: i32,
    ) -> Position {
        read_position(&env, pool_id, &owner, lower_tick, upper_tick).unwrap_or_default()
    }

    /// Ledger entry with the amounts it would release and its uncollected fees
    pub fn get_position_info(
        env: Env,
        pool_id: u64,
        owner: Address,
        lower_tick: i32,
        upper_tick: i32,
    ) -> Result<PositionInfo, KeeperError> {
        Self::check_ticks(&env, lower_tick, upper_tick)?;
        let pool = Self::load_pool(&env, pool_id)?;
        let accum = Self::load_accumulator(&env, pool_id)?;
        let position = read_position(&env, pool_id, &owner, lower_tick, upper_tick)
            .unwrap_or_default();

        let (amount0, amount1) = withdraw_amounts(
            &Q64Curve,
            &env,
            position.liquidity,
            lower_tick,
            upper_tick,
            pool.current_sqrt_price,
        );

        let inside = fee_growth_inside(
            &env,
            &PoolTicks::new(pool_id),
            lower_tick,
            upper_tick,
            pool.current_tick,
            accum.value(),
        );
        let key = FeePositionKey::Range(owner, lower_tick, upper_tick);
        let uncollected_fees = match accum.pending_rewards_custom(&key, &inside) {
            Ok(pending) => pending,
            Err(AccumError::PositionNotFound) => empty(&env),
            Err(err) => return Err(err.into()),
        };

        Ok(PositionInfo {
            liquidity: position.liquidity,
            amount0,
            amount1,
            uncollected_fees,
        })
    }
}

// ============================================================
// INTERNAL HELPERS
// ============================================================

impl FeeKeeper {
    fn require_admin(env: &Env) -> Result<KeeperConfig, KeeperError> {
        let config = read_config(env)?;
        config.admin.require_auth();
        Ok(config)
    }

    fn load_pool(env: &Env, pool_id: u64) -> Result<Pool, KeeperError> {
        read_pool(env, pool_id).ok_or_else(|| {
            log!(env, "pool not found", pool_id);
            KeeperError::PoolNotFound
        })
    }

    fn load_accumulator(env: &Env, pool_id: u64) -> Result<FeeAccumulator<'_>, KeeperError> {
        FeeAccumulator::load(env, FeeAccumStore::new(pool_id)).map_err(|err| {
            log!(env, "fee accumulator does not exist", pool_id);
            KeeperError::from(err)
        })
    }

    fn load_position(
        env: &Env,
        pool_id: u64,
        owner: &Address,
        lower_tick: i32,
        upper_tick: i32,
    ) -> Result<Position, KeeperError> {
        read_position(env, pool_id, owner, lower_tick, upper_tick).ok_or_else(|| {
            log!(env, "position does not exist", pool_id, lower_tick, upper_tick);
            KeeperError::PositionDoesNotExist
        })
    }

    fn fee_growth_global(env: &Env, pool_id: u64) -> Result<DecCoins, KeeperError> {
        Ok(Self::load_accumulator(env, pool_id)?.value().clone())
    }

    fn initial_growth(env: &Env, pool_id: u64, tick: i32) -> Result<DecCoins, KeeperError> {
        let pool = Self::load_pool(env, pool_id)?;
        let global = Self::fee_growth_global(env, pool_id)?;
        Ok(initial_fee_growth_outside(env, tick, pool.current_tick, &global))
    }

    fn check_ticks(env: &Env, lower_tick: i32, upper_tick: i32) -> Result<(), KeeperError> {
        validate_ticks(lower_tick, upper_tick).map_err(|err| {
            log!(env, "invalid position ticks", lower_tick, upper_tick);
            KeeperError::from(err)
        })
    }

    /// Fail before any write if a boundary cannot take `liquidity_delta`
    fn check_tick_update(
        env: &Env,
        pool_id: u64,
        tick: i32,
        liquidity_delta: i128,
        upper: bool,
    ) -> Result<(), KeeperError> {
        let info = PoolTicks::new(pool_id).tick_info(env, tick);
        updated_liquidity(&info, liquidity_delta, upper).map_err(|err| {
            log!(env, "tick liquidity update rejected", pool_id, tick, liquidity_delta);
            KeeperError::from(err)
        })?;
        Ok(())
    }

    fn update_tick(
        env: &Env,
        pool_id: u64,
        tick: i32,
        liquidity_delta: i128,
        upper: bool,
    ) -> Result<bool, KeeperError> {
        let flipped = init_or_update_tick(
            env,
            &PoolTicks::new(pool_id),
            tick,
            liquidity_delta,
            upper,
            || Self::initial_growth(env, pool_id, tick),
        )?;

        emit_tick_updated(env, pool_id, tick, liquidity_delta, flipped);

        Ok(flipped)
    }
}
