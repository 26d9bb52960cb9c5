//! The live pet and its care operations.
//!
//! [`PetState`] is plain data with no interior locking. Whoever owns it is
//! responsible for exclusive access; in this workspace that is the
//! lifecycle controller's mutex.
//!
//! Every method that can refuse validates all preconditions first and only
//! then mutates, so a returned error always means "nothing changed".

use std::collections::BTreeMap;

use hatchling_economy::{PlayAllowance, Wallet, heal_cost};
use hatchling_types::{AdultVariant, DeathCause, FoodId, PetSnapshot, PetStatus, Stage};

use crate::config::PetConfig;
use crate::error::PetError;

/// Mutable state of the one live pet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetState {
    /// Display name; empty until the owner names the pet.
    pub name: String,
    /// Generation number, starting at 1.
    pub generation: u32,
    /// Current life stage.
    pub stage: Stage,
    /// Cosmetic branch, set on entering Adult.
    pub adult_variant: Option<AdultVariant>,
    /// Growth points toward the next stage.
    pub feed_progress: u32,
    /// Sickness level, 0 (healthy) up to the configured maximum.
    pub sickness_level: u8,
    /// Currency balance.
    pub wallet: Wallet,
    /// Minigame plays consumed in the current stage.
    pub plays: PlayAllowance,
    /// Times each food has been eaten over this life.
    pub food_history: BTreeMap<FoodId, u32>,
    /// Whether the pet is alive.
    pub alive: bool,
    /// Set once the pet dies.
    pub cause_of_death: Option<DeathCause>,
}

impl PetState {
    /// A fresh, unnamed egg of the given generation.
    pub fn hatch(generation: u32, config: &PetConfig) -> Self {
        Self {
            name: String::new(),
            generation,
            stage: Stage::Egg,
            adult_variant: None,
            feed_progress: 0,
            sickness_level: 0,
            wallet: Wallet::new(config.starting_money),
            plays: PlayAllowance::new(config.plays_per_stage),
            food_history: BTreeMap::new(),
            alive: true,
            cause_of_death: None,
        }
    }

    /// Whether the owner has named the pet.
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }

    /// Whether the pet has any sickness.
    pub const fn is_sick(&self) -> bool {
        self.sickness_level > 0
    }

    /// Coarse status for the presentation layer.
    pub fn status(&self) -> PetStatus {
        if !self.alive {
            PetStatus::Dead
        } else if self.is_named() {
            PetStatus::Alive
        } else {
            PetStatus::AwaitingName
        }
    }

    /// Read-only view of the pet.
    pub fn snapshot(&self, config: &PetConfig) -> PetSnapshot {
        PetSnapshot {
            name: self.name.clone(),
            generation: self.generation,
            stage: self.stage,
            adult_variant: self.adult_variant,
            feed_progress: self.feed_progress,
            stage_threshold: config.stage_threshold,
            sickness_level: self.sickness_level,
            money: self.wallet.balance(),
            plays_remaining: self.plays.remaining(),
            alive: self.alive,
            cause_of_death: self.cause_of_death,
            status: self.status(),
        }
    }

    /// Refuse unless the pet is alive and named.
    ///
    /// Feeding, healing and minigames all require this.
    pub fn ensure_active(&self) -> Result<(), PetError> {
        if !self.alive {
            return Err(PetError::Dead);
        }
        if !self.is_named() {
            return Err(PetError::Unnamed);
        }
        Ok(())
    }

    /// Give the pet its name. Only accepted once per life.
    ///
    /// Leading and trailing whitespace is trimmed.
    pub fn set_name(&mut self, name: &str) -> Result<(), PetError> {
        if !self.alive {
            return Err(PetError::Dead);
        }
        if self.is_named() {
            return Err(PetError::AlreadyNamed(self.name.clone()));
        }
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(PetError::EmptyName);
        }
        trimmed.clone_into(&mut self.name);
        Ok(())
    }

    /// Cure all sickness for `sickness_level * heal_cost_per_level`.
    ///
    /// Returns the amount charged.
    pub fn heal(&mut self, config: &PetConfig) -> Result<u32, PetError> {
        self.ensure_active()?;
        if !self.is_sick() {
            return Err(PetError::Healthy);
        }
        let cost = heal_cost(self.sickness_level, config.heal_cost_per_level)?;
        self.wallet.debit(cost)?;
        self.sickness_level = 0;
        Ok(cost)
    }

    /// Build the pet of the next generation. Only a dead pet has a successor.
    ///
    /// Everything except the generation counter starts over: name, stage,
    /// money, sickness, plays and food history.
    pub fn successor(&self, config: &PetConfig) -> Result<Self, PetError> {
        if self.alive {
            return Err(PetError::StillAlive);
        }
        let generation = self
            .generation
            .checked_add(1)
            .ok_or_else(|| PetError::ArithmeticOverflow {
                context: String::from("generation counter overflow"),
            })?;
        Ok(Self::hatch(generation, config))
    }
}
