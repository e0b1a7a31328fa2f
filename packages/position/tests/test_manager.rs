use tidepool_math::*;
use tidepool_position::*;

// ============================================================
// TICK VALIDATION
// ============================================================

#[test]
fn test_validate_ticks_accepts_full_range() {
    assert_eq!(validate_ticks(MIN_TICK, MAX_TICK), Ok(()));
    assert_eq!(validate_ticks(-5, 5), Ok(()));
}

#[test]
fn test_lower_tick_bounds() {
    assert_eq!(validate_ticks(MIN_TICK - 1, 0), Err(PositionError::InvalidTick));
    assert_eq!(validate_ticks(MAX_TICK, MAX_TICK), Err(PositionError::InvalidTick));
}

#[test]
fn test_upper_tick_bounds() {
    assert_eq!(validate_ticks(-5, 5_000_000), Err(PositionError::InvalidTick));
    assert_eq!(validate_ticks(MIN_TICK, MIN_TICK), Err(PositionError::InvalidTick));
    assert_eq!(validate_ticks(0, MAX_TICK + 1), Err(PositionError::InvalidTick));
}

#[test]
fn test_bounds_checked_before_ordering() {
    assert_eq!(validate_ticks(5, 5), Err(PositionError::InvalidTickRange));
    assert_eq!(validate_ticks(10, -10), Err(PositionError::InvalidTickRange));
    assert_eq!(validate_ticks(10, 5_000_000), Err(PositionError::InvalidTick));
}

// ============================================================
// LIQUIDITY ROUNDING
// ============================================================

#[test]
fn test_checked_liquidity_truncates_by_default_policy() {
    let requested = dec(10) + dec(7) / 10;
    assert_eq!(checked_liquidity(LiquidityRounding::Truncate, requested), Ok(dec(10)));
    assert_eq!(checked_liquidity(LiquidityRounding::BankersRound, requested), Ok(dec(11)));
    assert_eq!(checked_liquidity(LiquidityRounding::Exact, requested), Ok(requested));
}

#[test]
fn test_checked_liquidity_rejects_non_positive() {
    assert_eq!(checked_liquidity(LiquidityRounding::Exact, 0), Err(PositionError::ZeroLiquidity));
    assert_eq!(checked_liquidity(LiquidityRounding::Exact, -dec(1)), Err(PositionError::ZeroLiquidity));
}

#[test]
fn test_fraction_below_one_unit_rounds_to_zero() {
    let requested = dec(1) / 2;
    assert_eq!(checked_liquidity(LiquidityRounding::Truncate, requested), Err(PositionError::ZeroLiquidity));
    // half to even: 0.5 -> 0
    assert_eq!(checked_liquidity(LiquidityRounding::BankersRound, requested), Err(PositionError::ZeroLiquidity));
    assert_eq!(checked_liquidity(LiquidityRounding::Exact, requested), Ok(requested));
}

// ============================================================
// LEDGER UPDATES
// ============================================================

#[test]
fn test_add_then_remove_liquidity() {
    let mut pos = Position::default();

    add_liquidity(&mut pos, dec(10)).unwrap();
    add_liquidity(&mut pos, dec(5)).unwrap();
    assert_eq!(pos.liquidity, dec(15));

    assert_eq!(remove_liquidity(&mut pos, dec(15)), Ok(()));
    assert_eq!(pos.liquidity, 0);
}

#[test]
fn test_remove_more_than_held() {
    let mut pos = Position { liquidity: dec(3) };
    assert_eq!(remove_liquidity(&mut pos, dec(4)), Err(PositionError::InsufficientLiquidity));
    assert_eq!(pos.liquidity, dec(3));
}

#[test]
fn test_add_liquidity_overflow_keeps_ledger() {
    let mut pos = Position { liquidity: i128::MAX - dec(1) };
    assert_eq!(add_liquidity(&mut pos, dec(2)), Err(PositionError::Overflow));
    assert_eq!(pos.liquidity, i128::MAX - dec(1));
}

#[test]
fn test_positive_liquidity_keeps_fraction() {
    assert_eq!(positive_liquidity(dec(1) / 2), Ok(dec(1) / 2));
    assert_eq!(positive_liquidity(0), Err(PositionError::ZeroLiquidity));
    assert_eq!(positive_liquidity(-1), Err(PositionError::ZeroLiquidity));
}
