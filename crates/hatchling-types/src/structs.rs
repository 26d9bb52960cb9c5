//! Core structs shared between the engine and the presentation layer.
//!
//! [`Grave`] is the archive record; [`PetSnapshot`] is the read-only view of
//! the live pet returned after every operation. The roll structs describe
//! minigame results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{AdultVariant, DeathCause, Parity, PetStatus, Stage};
use crate::ids::{FoodId, GraveId};

// ---------------------------------------------------------------------------
// Grave
// ---------------------------------------------------------------------------

/// Immutable archive record of one completed lifecycle.
///
/// Written exactly once, at the moment the pet dies. Fields added after the
/// first archive format default when absent so older files keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Grave {
    /// Unique record identifier. Absent on records written before graves
    /// carried one.
    #[serde(default)]
    pub id: Option<GraveId>,
    /// The pet's name at death.
    pub name: String,
    /// Stage held at the moment of death.
    pub stage: Stage,
    /// Cosmetic branch, if the pet reached adulthood.
    #[serde(default)]
    pub adult_variant: Option<AdultVariant>,
    /// Generation number of the pet.
    pub generation: u32,
    /// Growth points accumulated toward the next threshold at death.
    #[serde(default)]
    pub feed_progress: u32,
    /// Why the pet died.
    #[serde(default)]
    pub cause: DeathCause,
    /// Wall-clock time of death.
    #[serde(default)]
    pub died_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Complete read-only view of the live pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PetSnapshot {
    /// Display name; empty while awaiting a name.
    pub name: String,
    /// Generation number, starting at 1.
    pub generation: u32,
    /// Current life stage.
    pub stage: Stage,
    /// Cosmetic branch once the pet is an adult.
    pub adult_variant: Option<AdultVariant>,
    /// Growth points toward the next stage.
    pub feed_progress: u32,
    /// Growth points needed per stage.
    pub stage_threshold: u32,
    /// Sickness level, 0 (healthy) to 3.
    pub sickness_level: u8,
    /// Currency balance.
    pub money: u32,
    /// Minigame plays left in the current stage.
    pub plays_remaining: u32,
    /// Whether the pet is alive.
    pub alive: bool,
    /// Why the pet died, once it has.
    pub cause_of_death: Option<DeathCause>,
    /// Which screen the presentation layer should show.
    pub status: PetStatus,
}

// ---------------------------------------------------------------------------
// Minigames
// ---------------------------------------------------------------------------

/// Outcome of one dice minigame play.
///
/// When no plays remain, both dice are 0, the reward is 0 and
/// `plays_exhausted` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DiceRoll {
    /// First die, 1--6.
    pub first: u32,
    /// Second die, 1--6.
    pub second: u32,
    /// Currency credited to the pet.
    pub reward: u32,
    /// Both dice showed the same face and the reward was doubled.
    pub double_bonus: bool,
    /// The per-stage play allowance was already used up.
    pub plays_exhausted: bool,
}

impl DiceRoll {
    /// The empty result returned when no plays remain.
    pub const EXHAUSTED: Self = Self {
        first: 0,
        second: 0,
        reward: 0,
        double_bonus: false,
        plays_exhausted: true,
    };
}

/// Outcome of one chouhan (even/odd) play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ChouhanRoll {
    /// First die, 1--6 (0 when exhausted).
    pub first: u32,
    /// Second die, 1--6 (0 when exhausted).
    pub second: u32,
    /// Sum of both dice.
    pub sum: u32,
    /// The player's bet.
    pub bet: Parity,
    /// Parity of the sum.
    pub outcome: Parity,
    /// Whether the bet matched the outcome.
    pub won: bool,
    /// Currency credited to the pet.
    pub reward: u32,
    /// The per-stage play allowance was already used up.
    pub plays_exhausted: bool,
}

// ---------------------------------------------------------------------------
// Food menu
// ---------------------------------------------------------------------------

/// One entry of the food menu offered to the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FoodMenuItem {
    /// Catalog key passed back to `feed`.
    pub id: FoodId,
    /// Human-readable label.
    pub label: String,
    /// Price in currency units.
    pub price: u32,
}
