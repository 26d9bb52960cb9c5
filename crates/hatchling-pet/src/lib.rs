//! Pet state, growth, sickness, evolution, and death for the Hatchling pet.
//!
//! This crate contains the logic layer for the pet -- everything that
//! operates on pet state without touching I/O or locks. It sits between
//! `hatchling-types` (data structures) and `hatchling-core` (exclusive
//! access and archive writes).
//!
//! # Modules
//!
//! - [`config`] -- Tunable growth and economy parameters ([`PetConfig`])
//! - [`death`] -- Death processing and the grave it produces
//! - [`error`] -- Refusal reasons for pet operations ([`PetError`])
//! - [`evolution`] -- Adult branch selection from the food history
//! - [`growth`] -- Feeding, sickness draws, and the stage-advance loop
//! - [`state`] -- The live [`PetState`] and its care operations

pub mod config;
pub mod death;
pub mod error;
pub mod evolution;
pub mod growth;
pub mod state;

// Re-export primary types at crate root for convenience.
pub use config::{PetConfig, SICKNESS_CEILING};
pub use death::{process_death, self_terminate};
pub use error::PetError;
pub use evolution::resolve_adult_variant;
pub use growth::{FeedReport, feed};
pub use state::PetState;
