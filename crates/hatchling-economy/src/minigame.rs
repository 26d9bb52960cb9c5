//! Dice minigames and the per-stage play allowance.
//!
//! Two games share one allowance:
//!
//! - **Dice**: roll two dice, earn their sum; a pair (both dice equal)
//!   doubles the reward.
//! - **Chouhan**: bet on the parity of the sum (even = chou, odd = han);
//!   a correct bet earns a fixed reward, a wrong one earns nothing.
//!
//! Each stage permits a fixed number of plays. Once spent, further plays
//! return an exhausted result without drawing dice or touching money.

use rand::Rng;
use serde::{Deserialize, Serialize};

use hatchling_types::{ChouhanRoll, DiceRoll, Parity};

/// Faces on each die.
const DIE_FACES: u32 = 6;

/// Plays consumed in the current stage, against a fixed limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayAllowance {
    used: u32,
    limit: u32,
}

impl PlayAllowance {
    /// A fresh allowance of `limit` plays.
    pub const fn new(limit: u32) -> Self {
        Self { used: 0, limit }
    }

    /// Plays left in this stage.
    pub const fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.used)
    }

    /// Consume one play. Returns `false` without changing anything if the
    /// allowance is spent.
    pub const fn try_consume(&mut self) -> bool {
        if self.used >= self.limit {
            return false;
        }
        self.used = self.used.saturating_add(1);
        true
    }

    /// Restore the full allowance (on stage advance).
    pub const fn reset(&mut self) {
        self.used = 0;
    }
}

fn roll_die(rng: &mut impl Rng) -> u32 {
    rng.random_range(1..=DIE_FACES)
}

/// Reward for a dice result: the sum, doubled on a pair.
///
/// Returns `(reward, double_bonus)`.
pub const fn dice_reward(first: u32, second: u32) -> (u32, bool) {
    let sum = first.saturating_add(second);
    if first == second {
        (sum.saturating_mul(2), true)
    } else {
        (sum, false)
    }
}

/// Play one round of the dice game, consuming a play if any remain.
pub fn play_dice(allowance: &mut PlayAllowance, rng: &mut impl Rng) -> DiceRoll {
    if !allowance.try_consume() {
        tracing::debug!("Dice play rejected: no plays remaining");
        return DiceRoll::EXHAUSTED;
    }

    let first = roll_die(rng);
    let second = roll_die(rng);
    let (reward, double_bonus) = dice_reward(first, second);

    tracing::debug!(first, second, reward, double_bonus, "Dice rolled");

    DiceRoll {
        first,
        second,
        reward,
        double_bonus,
        plays_exhausted: false,
    }
}

/// Play one round of chouhan with the given bet, consuming a play if any
/// remain. A correct bet pays `win_reward`.
pub fn play_chouhan(
    bet: Parity,
    win_reward: u32,
    allowance: &mut PlayAllowance,
    rng: &mut impl Rng,
) -> ChouhanRoll {
    if !allowance.try_consume() {
        tracing::debug!("Chouhan play rejected: no plays remaining");
        return ChouhanRoll {
            first: 0,
            second: 0,
            sum: 0,
            bet,
            outcome: Parity::Even,
            won: false,
            reward: 0,
            plays_exhausted: true,
        };
    }

    let first = roll_die(rng);
    let second = roll_die(rng);
    let sum = first.saturating_add(second);
    let outcome = Parity::of(sum);
    let won = outcome == bet;
    let reward = if won { win_reward } else { 0 };

    tracing::debug!(first, second, %bet, %outcome, won, "Chouhan rolled");

    ChouhanRoll {
        first,
        second,
        sum,
        bet,
        outcome,
        won,
        reward,
        plays_exhausted: false,
    }
}
