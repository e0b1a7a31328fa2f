// Tick registry errors

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TickError {
    /// Removing more liquidity than the tick carries
    InsufficientLiquidity,
    /// Gross or net liquidity left the i128 range
    Overflow,
}
