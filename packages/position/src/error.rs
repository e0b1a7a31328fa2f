// Position ledger errors

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PositionError {
    /// A boundary lies outside the range allowed for its role
    InvalidTick,
    /// Lower boundary not strictly below the upper one
    InvalidTickRange,
    /// Liquidity is not positive after rounding
    ZeroLiquidity,
    /// Withdrawing more liquidity than the position holds
    InsufficientLiquidity,
    /// Ledger liquidity left the i128 range
    Overflow,
}
