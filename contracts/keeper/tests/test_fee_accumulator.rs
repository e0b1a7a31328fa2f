mod common;

use soroban_sdk::{testutils::Address as _, Address, Env};
use tidepool_keeper::KeeperError;
use tidepool_math::*;

#[test]
fn test_charge_fee_accumulates_per_denom() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_keeper(&env);
    common::create_pool(&client, 1, 0);
    client.create_accumulator(&1);

    client.charge_fee(&1, &common::eth(), &dec(1));
    client.charge_fee(&1, &common::usdc(), &dec(2));

    let value = client.get_fee_accumulator_value(&1);
    let expected = add_coins(&common::eth_coins(&env, dec(1)), &coin(&env, common::usdc(), dec(2)));
    assert_eq!(value, expected);
}

#[test]
fn test_charge_fee_without_accumulator() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_keeper(&env);

    assert_eq!(
        client.try_charge_fee(&99, &common::eth(), &dec(1)),
        Err(Ok(KeeperError::AccumulatorDoesNotExist))
    );
    assert_eq!(
        client.try_get_fee_accumulator_value(&99),
        Err(Ok(KeeperError::AccumulatorDoesNotExist))
    );
}

#[test]
fn test_create_accumulator_twice() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_pool(&env, 0);
    client.charge_fee(&common::POOL_ID, &common::eth(), &dec(3));

    assert_eq!(
        client.try_create_accumulator(&common::POOL_ID),
        Err(Ok(KeeperError::AccumulatorAlreadyExists))
    );
    // the existing value is untouched
    assert_eq!(
        client.get_fee_accumulator_value(&common::POOL_ID),
        common::eth_coins(&env, dec(3))
    );
}

#[test]
fn test_accumulator_does_not_need_pool() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_keeper(&env);
    client.create_accumulator(&5);

    assert!(is_zero(&client.get_fee_accumulator_value(&5)));
}

#[test]
fn test_rejected_fee_leaves_value_unchanged() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_pool(&env, 0);
    client.charge_fee(&common::POOL_ID, &common::eth(), &dec(1));

    assert_eq!(
        client.try_charge_fee(&common::POOL_ID, &common::eth(), &-1),
        Err(Ok(KeeperError::InvalidFeeAmount))
    );
    assert_eq!(
        client.try_charge_fee(&common::POOL_ID, &common::eth(), &i128::MAX),
        Err(Ok(KeeperError::Overflow))
    );
    assert_eq!(
        client.get_fee_accumulator_value(&common::POOL_ID),
        common::eth_coins(&env, dec(1))
    );
}

#[test]
fn test_value_is_monotonic() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_pool(&env, 0);
    let mut previous = 0;

    for amount in [0, dec(1), dec(1) / 3, 7, dec(100)] {
        client.charge_fee(&common::POOL_ID, &common::eth(), &amount);
        let current = amount_of(&client.get_fee_accumulator_value(&common::POOL_ID), &common::eth());
        assert!(current >= previous);
        previous = current;
    }
}

// ============================================================
// OWNER FEE POSITIONS
// ============================================================

#[test]
fn test_initialize_fee_position_overwrites() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_pool(&env, 0);
    let owner = Address::generate(&env);

    client.initialize_fee_position(&common::POOL_ID, &owner, &dec(10));
    client.initialize_fee_position(&common::POOL_ID, &owner, &dec(20));

    assert_eq!(client.get_fee_position_size(&common::POOL_ID, &owner), dec(20));
}

#[test]
fn test_initialize_same_liquidity_twice() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_pool(&env, 0);
    let owner = Address::generate(&env);

    client.initialize_fee_position(&common::POOL_ID, &owner, &dec(10));
    client.initialize_fee_position(&common::POOL_ID, &owner, &dec(10));

    assert_eq!(client.get_fee_position_size(&common::POOL_ID, &owner), dec(10));
}

#[test]
fn test_fee_position_not_found() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_pool(&env, 0);
    let owner = Address::generate(&env);

    assert_eq!(
        client.try_get_fee_position_size(&common::POOL_ID, &owner),
        Err(Ok(KeeperError::PositionNotFound))
    );
}

#[test]
fn test_fee_position_needs_accumulator() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_keeper(&env);
    let owner = Address::generate(&env);

    assert_eq!(
        client.try_initialize_fee_position(&3, &owner, &dec(1)),
        Err(Ok(KeeperError::AccumulatorDoesNotExist))
    );
    assert_eq!(
        client.try_get_fee_position_size(&3, &owner),
        Err(Ok(KeeperError::AccumulatorDoesNotExist))
    );
}

#[test]
fn test_fee_position_rejects_negative_liquidity() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_pool(&env, 0);
    let owner = Address::generate(&env);

    assert_eq!(
        client.try_initialize_fee_position(&common::POOL_ID, &owner, &-dec(1)),
        Err(Ok(KeeperError::NegativeShares))
    );
}

#[test]
fn test_pools_are_independent() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_keeper(&env);
    client.create_accumulator(&1);
    client.create_accumulator(&2);

    client.charge_fee(&1, &common::eth(), &dec(4));

    assert_eq!(client.get_fee_accumulator_value(&1), common::eth_coins(&env, dec(4)));
    assert!(is_zero(&client.get_fee_accumulator_value(&2)));
}
