//! Shared type definitions for the Hatchling virtual pet.
//!
//! This crate is the single source of truth for the types that cross crate
//! boundaries. Types defined here flow downstream to `TypeScript` via `ts-rs`
//! for the presentation layer.
//!
//! # Modules
//!
//! - [`ids`] -- Grave identifiers and food catalog keys
//! - [`enums`] -- Life stages, adult variants, death causes, status, parity
//! - [`structs`] -- Graves, pet snapshots, minigame results, menu entries

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{AdultVariant, DeathCause, Parity, PetStatus, Stage};
pub use ids::{FoodId, GraveId};
pub use structs::{ChouhanRoll, DiceRoll, FoodMenuItem, Grave, PetSnapshot};
