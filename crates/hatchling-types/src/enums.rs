//! Enumeration types for the Hatchling pet.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Life stages
// ---------------------------------------------------------------------------

/// Ordinal life phase of a pet.
///
/// Stages only move forward, one step per threshold crossing. `Elderly` is
/// terminal: crossing its threshold ends the pet's life.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub enum Stage {
    /// Freshly laid egg. Every generation starts here.
    #[default]
    Egg,
    /// Just hatched.
    Baby,
    /// Growing up.
    Child,
    /// Fully grown; the cosmetic [`AdultVariant`] is chosen on entry.
    Adult,
    /// Last stage of life.
    Elderly,
}

impl Stage {
    /// The stage that follows this one, or `None` for the terminal stage.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Egg => Some(Self::Baby),
            Self::Baby => Some(Self::Child),
            Self::Child => Some(Self::Adult),
            Self::Adult => Some(Self::Elderly),
            Self::Elderly => None,
        }
    }
}

impl core::fmt::Display for Stage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Egg => write!(f, "egg"),
            Self::Baby => write!(f, "baby"),
            Self::Child => write!(f, "child"),
            Self::Adult => write!(f, "adult"),
            Self::Elderly => write!(f, "elderly"),
        }
    }
}

// ---------------------------------------------------------------------------
// Adult variants
// ---------------------------------------------------------------------------

/// Cosmetic branch resolved at the Adult transition from the food history.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub enum AdultVariant {
    /// No food dominated the diet enough to shape the adult.
    #[default]
    Plain,
    /// Raised mostly on liver.
    Muscle,
    /// Raised mostly on cake.
    Chubby,
    /// Raised mostly on natto.
    Sage,
}

impl core::fmt::Display for AdultVariant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Muscle => write!(f, "muscle"),
            Self::Chubby => write!(f, "chubby"),
            Self::Sage => write!(f, "sage"),
        }
    }
}

// ---------------------------------------------------------------------------
// Death
// ---------------------------------------------------------------------------

/// Why a pet died.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub enum DeathCause {
    /// Crossed a stage threshold while sick.
    Sickness,
    /// Crossed the threshold of the terminal stage.
    #[default]
    OldAge,
    /// Ended by the owner.
    SelfTerminated,
}

impl core::fmt::Display for DeathCause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Sickness => write!(f, "sickness"),
            Self::OldAge => write!(f, "old_age"),
            Self::SelfTerminated => write!(f, "self_terminated"),
        }
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Coarse status used by the presentation layer to pick a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum PetStatus {
    /// Alive but not yet named; only naming is accepted.
    AwaitingName,
    /// Alive and named.
    Alive,
    /// Dead; only advancing to the next generation is accepted.
    Dead,
}

// ---------------------------------------------------------------------------
// Chouhan parity
// ---------------------------------------------------------------------------

/// Parity of a two-dice sum in the chouhan game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Parity {
    /// Even sum (chou).
    Even,
    /// Odd sum (han).
    Odd,
}

impl Parity {
    /// Parity of the given number.
    pub const fn of(value: u32) -> Self {
        if value & 1 == 0 { Self::Even } else { Self::Odd }
    }
}

impl core::fmt::Display for Parity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Even => write!(f, "chou"),
            Self::Odd => write!(f, "han"),
        }
    }
}
