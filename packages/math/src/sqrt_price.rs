// SPDX-License-Identifier: MIT
// Tick -> Sqrt Price Conversion

use crate::constants::{MAX_TICK, MIN_TICK};
use crate::q64::{mul_q64, ONE_X64};

/// sqrt(1.0001^(2^n)) * 2^64 for n = 0..=18
const TICK_RATIOS_X64: [u128; 19] = [
    18447666387855959851,
    18448588748116922571,
    18450433606991734263,
    18454123878217468680,
    18461506635090006702,
    18476281010653910145,
    18505865242158250042,
    18565175891880433523,
    18684368066214940583,
    18925053041275764672,
    19415764168677886927,
    20435687552633177495,
    22639080592224303007,
    27784196929998399742,
    41848122137994986129,
    94936283578220370716,
    488590176327622479861,
    12941056668319229769860,
    9078618265828848800676189,
];

/// Convert tick to sqrt price in Q64.64 format
/// Formula: sqrt(1.0001^tick) * 2^64
///
/// Callers validate the tick first; an out-of-range tick is a programming error.
pub fn get_sqrt_ratio_at_tick(tick: i32) -> u128 {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        panic!("tick out of range");
    }

    let abs_tick = tick.unsigned_abs();
    let ratio = TICK_RATIOS_X64
        .iter()
        .enumerate()
        .filter(|(bit, _)| abs_tick & (1u32 << bit) != 0)
        .fold(ONE_X64, |ratio, (_, factor)| mul_q64(ratio, *factor));

    if tick >= 0 {
        return ratio;
    }
    if ratio == 0 {
        return u128::MAX;
    }
    u128::MAX / ratio
}
