//! Heal pricing.

use crate::EconomyError;

/// Cost of fully curing a pet at `sickness_level`.
///
/// The price scales linearly: `sickness_level * cost_per_level`.
pub fn heal_cost(sickness_level: u8, cost_per_level: u32) -> Result<u32, EconomyError> {
    u32::from(sickness_level)
        .checked_mul(cost_per_level)
        .ok_or_else(|| EconomyError::ArithmeticOverflow {
            context: String::from("heal cost overflow"),
        })
}
