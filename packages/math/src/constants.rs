// Tidepool constants
//
// Grouped by the component that owns them:
// - tick bounds used by the position ledger
// - decimal precision shared by fee growth, shares and liquidity
// - Q64.64 scaling for the curve math

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Minimum valid tick value (corresponds to minimum price)
/// Price at MIN_TICK ≈ 5.42e-20, the smallest sqrt price Q64.64 still resolves
pub const MIN_TICK: i32 = -443636;

/// Maximum valid tick value (corresponds to maximum price)
/// Price at MAX_TICK ≈ 1.84e+19
pub const MAX_TICK: i32 = 443636;

// ============================================================
// DECIMAL CONSTANTS
// ============================================================

/// 1.0 as a `Dec` (10^18), so every `Dec` carries 18 fractional digits
pub const DEC_ONE: i128 = 1_000_000_000_000_000_000;

/// 0.5 as a `Dec`, the banker's rounding midpoint
pub const DEC_HALF: i128 = DEC_ONE / 2;

// ============================================================
// SQRT PRICE CONSTANTS (Q64.64 format)
// ============================================================

/// Q64 multiplier (2^64) for fixed-point math
pub const Q64: u128 = 1u128 << 64;

/// Sqrt price for 1:1 price ratio (2^64)
pub const SQRT_PRICE_1_1: u128 = Q64;

/// Minimum sqrt price (at MIN_TICK)
/// Calculated as: sqrt(1.0001^-443636) * 2^64
pub const MIN_SQRT_PRICE: u128 = 4295048016;

/// Maximum sqrt price (at MAX_TICK)
/// Calculated as: sqrt(1.0001^443636) * 2^64
pub const MAX_SQRT_PRICE: u128 = 79226673515401279992447579061;
