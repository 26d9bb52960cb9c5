//! Lifecycle controller and configuration for the Hatchling virtual pet.
//!
//! This is the crate a presentation layer talks to. It owns the one live
//! pet behind a lock, runs every operation against it, and hands each grave
//! to the archive the moment the pet dies.
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration ([`HatchlingConfig`])
//! - [`controller`] -- The [`LifecycleController`] and its operation outcomes
//!
//! # Usage
//!
//! ```
//! use hatchling_archive::MemoryBackend;
//! use hatchling_core::{HatchlingConfig, LifecycleController};
//! use hatchling_types::FoodId;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let config = HatchlingConfig::default();
//! let controller = LifecycleController::new(
//!     config.to_pet_config(),
//!     config.economy.foods.clone(),
//!     SmallRng::seed_from_u64(7),
//!     MemoryBackend::new(),
//! );
//!
//! assert!(controller.set_name("Tama").is_ok());
//! let outcome = controller.feed(&FoodId::from("natto"));
//! assert!(outcome.is_ok_and(|o| o.snapshot.money == 12));
//! ```

pub mod config;
pub mod controller;

pub use config::{ConfigError, HatchlingConfig};
pub use controller::{FeedOutcome, HealOutcome, LifecycleController, PlayOutcome, TerminateOutcome};
pub use hatchling_archive::ArchiveError;
pub use hatchling_pet::PetError;
