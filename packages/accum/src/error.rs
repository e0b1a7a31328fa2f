// Accumulator errors

/// Failures of the lazy reward accumulator
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AccumError {
    /// `create` called for an accumulator that already has a value
    AlreadyExists,
    /// Accumulator used before `create`
    DoesNotExist,
    /// Position read before it was initialized
    PositionNotFound,
    /// Share counts are never negative
    NegativeShares,
    /// Removing more shares than the position holds
    InsufficientShares,
    /// Reward arithmetic left the representable range
    Overflow,
}
