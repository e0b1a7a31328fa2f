mod common;

use soroban_sdk::{testutils::Address as _, Address, Env};
use tidepool_keeper::{FeeKeeper, FeeKeeperClient, KeeperError};
use tidepool_math::{get_sqrt_ratio_at_tick, LiquidityRounding};

#[test]
fn test_initialization_success() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, admin) = common::setup_keeper(&env);

    let config = client.get_config();
    assert_eq!(config.admin, admin);
    assert_eq!(config.liquidity_rounding, LiquidityRounding::Truncate);
}

#[test]
fn test_double_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, admin) = common::setup_keeper(&env);

    assert_eq!(
        client.try_initialize(&admin, &LiquidityRounding::Exact),
        Err(Ok(KeeperError::AlreadyInitialized))
    );
}

#[test]
fn test_calls_before_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let keeper_id = env.register(FeeKeeper, ());
    let client = FeeKeeperClient::new(&env, &keeper_id);

    assert_eq!(client.try_get_config(), Err(Ok(KeeperError::NotInitialized)));
    assert_eq!(
        client.try_create_pool(&1, &common::eth(), &common::usdc(), &get_sqrt_ratio_at_tick(0), &0),
        Err(Ok(KeeperError::NotInitialized))
    );
    assert_eq!(client.try_create_accumulator(&1), Err(Ok(KeeperError::NotInitialized)));
}

#[test]
fn test_set_liquidity_rounding() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_keeper(&env);
    client.set_liquidity_rounding(&LiquidityRounding::BankersRound);

    assert_eq!(client.get_config().liquidity_rounding, LiquidityRounding::BankersRound);
}

#[test]
#[should_panic]
fn test_set_liquidity_rounding_requires_admin_auth() {
    let env = Env::default();
    let admin = Address::generate(&env);
    let keeper_id = env.register(FeeKeeper, ());
    let client = FeeKeeperClient::new(&env, &keeper_id);

    env.mock_all_auths();
    client.initialize(&admin, &LiquidityRounding::Truncate);

    env.set_auths(&[]);
    client.set_liquidity_rounding(&LiquidityRounding::Exact);
}

// ============================================================
// POOL REGISTRY
// ============================================================

#[test]
fn test_create_and_get_pool() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_keeper(&env);
    common::create_pool(&client, 7, -120);

    let pool = client.get_pool(&7);
    assert_eq!(pool.current_tick, -120);
    assert_eq!(pool.current_sqrt_price, get_sqrt_ratio_at_tick(-120));
    assert_eq!(pool.token0, common::eth());
    assert_eq!(pool.token1, common::usdc());
}

#[test]
fn test_create_pool_twice() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_keeper(&env);
    common::create_pool(&client, 7, 0);

    assert_eq!(
        client.try_create_pool(&7, &common::eth(), &common::usdc(), &get_sqrt_ratio_at_tick(0), &0),
        Err(Ok(KeeperError::PoolAlreadyExists))
    );
}

#[test]
fn test_create_pool_tick_out_of_range() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_keeper(&env);

    assert_eq!(
        client.try_create_pool(&7, &common::eth(), &common::usdc(), &1, &5_000_000),
        Err(Ok(KeeperError::InvalidTick))
    );
}

#[test]
fn test_unknown_pool() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_keeper(&env);
    common::create_pool(&client, 1, 0);
    let pool = client.get_pool(&1);

    assert_eq!(client.try_get_pool(&2), Err(Ok(KeeperError::PoolNotFound)));
    assert_eq!(client.try_set_pool(&2, &pool), Err(Ok(KeeperError::PoolNotFound)));
}

#[test]
fn test_set_pool_moves_price() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_keeper(&env);
    common::create_pool(&client, 1, 0);
    common::move_price(&client, 1, 300);

    let pool = client.get_pool(&1);
    assert_eq!(pool.current_tick, 300);
    assert_eq!(pool.current_sqrt_price, get_sqrt_ratio_at_tick(300));
}
