// Position Management Logic

use tidepool_math::{LiquidityRounding, MAX_TICK, MIN_TICK};
use crate::error::PositionError;
use crate::types::Position;

/// Validate the boundaries of a range
///
/// A lower boundary may sit on `MIN_TICK` but not on `MAX_TICK`, an upper
/// boundary the other way round.
pub fn validate_ticks(lower: i32, upper: i32) -> Result<(), PositionError> {
    if !(MIN_TICK..MAX_TICK).contains(&lower) {
        return Err(PositionError::InvalidTick);
    }
    if upper <= MIN_TICK || upper > MAX_TICK {
        return Err(PositionError::InvalidTick);
    }
    if lower >= upper {
        return Err(PositionError::InvalidTickRange);
    }
    Ok(())
}

/// Round a requested liquidity amount and require it to stay positive
pub fn checked_liquidity(
    rounding: LiquidityRounding,
    liquidity_delta: i128,
) -> Result<i128, PositionError> {
    positive_liquidity(rounding.apply(liquidity_delta))
}

/// Require a liquidity amount to be positive, as requested
#[inline]
pub fn positive_liquidity(liquidity: i128) -> Result<i128, PositionError> {
    if liquidity <= 0 {
        return Err(PositionError::ZeroLiquidity);
    }
    Ok(liquidity)
}

pub fn add_liquidity(pos: &mut Position, liquidity: i128) -> Result<(), PositionError> {
    pos.liquidity = pos
        .liquidity
        .checked_add(liquidity)
        .ok_or(PositionError::Overflow)?;
    Ok(())
}

pub fn remove_liquidity(pos: &mut Position, liquidity: i128) -> Result<(), PositionError> {
    if liquidity > pos.liquidity {
        return Err(PositionError::InsufficientLiquidity);
    }
    pos.liquidity -= liquidity;
    Ok(())
}
