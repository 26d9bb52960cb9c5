//! The lifecycle controller: sole owner of the live pet.
//!
//! Every operation takes the pet lock for its full duration, so no caller
//! ever observes a half-applied feed. A death appends its grave to the
//! archive before the lock is released. The archive has its own lock, which
//! is why listing and resetting graves never wait on the pet.
//!
//! Refused operations return a [`PetError`] and leave the pet exactly as it
//! was.

use std::sync::{Mutex, MutexGuard, PoisonError};

use hatchling_archive::{Archive, ArchiveBackend, ArchiveError, JsonFileBackend};
use hatchling_economy::{FoodCatalog, play_chouhan, play_dice};
use hatchling_pet::{FeedReport, PetConfig, PetError, PetState, feed, self_terminate};
use hatchling_types::{ChouhanRoll, DiceRoll, FoodId, FoodMenuItem, Grave, Parity, PetSnapshot};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::HatchlingConfig;

/// Result of a successful feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedOutcome {
    /// The pet after the feed.
    pub snapshot: PetSnapshot,
    /// What the feed did: price, growth, sickness, stages, death.
    pub report: FeedReport,
}

/// Result of a successful heal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealOutcome {
    /// The pet after treatment.
    pub snapshot: PetSnapshot,
    /// Amount charged.
    pub cost: u32,
}

/// Result of a minigame attempt, including exhausted ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome<T> {
    /// The pet after the reward was paid.
    pub snapshot: PetSnapshot,
    /// The dice and the reward.
    pub roll: T,
}

/// Result of ending the pet's life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminateOutcome {
    /// The dead pet.
    pub snapshot: PetSnapshot,
    /// The grave handed to the archive.
    pub grave: Grave,
}

#[derive(Debug)]
struct Live<R> {
    pet: PetState,
    rng: R,
}

/// Owns the single live pet and orchestrates every operation on it.
///
/// Share it between request handlers behind an `Arc`; all methods take
/// `&self`.
#[derive(Debug)]
pub struct LifecycleController<R, B> {
    live: Mutex<Live<R>>,
    archive: Archive<B>,
    catalog: FoodCatalog,
    config: PetConfig,
}

impl LifecycleController<SmallRng, JsonFileBackend> {
    /// Build a controller from loaded configuration.
    ///
    /// Graves go to the configured JSON file. The random source uses the
    /// configured seed, or OS entropy when none is given.
    pub fn from_config(config: &HatchlingConfig) -> Self {
        let rng = config
            .rng
            .seed
            .map_or_else(SmallRng::from_os_rng, SmallRng::seed_from_u64);
        Self::new(
            config.to_pet_config(),
            config.economy.foods.clone(),
            rng,
            JsonFileBackend::new(&config.archive.path),
        )
    }
}

impl<R: Rng, B: ArchiveBackend> LifecycleController<R, B> {
    /// Create a controller with a generation-1 egg.
    pub fn new(config: PetConfig, catalog: FoodCatalog, rng: R, backend: B) -> Self {
        let pet = PetState::hatch(1, &config);
        tracing::info!(
            foods = catalog.iter().count(),
            stage_threshold = config.stage_threshold,
            "Lifecycle controller started"
        );
        Self {
            live: Mutex::new(Live { pet, rng }),
            archive: Archive::new(backend),
            catalog,
            config,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Live<R>> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Hand a grave to the archive. A failed write is logged; the pet stays
    /// dead either way.
    fn bury(&self, grave: Grave) {
        let generation = grave.generation;
        if let Err(e) = self.archive.append(grave) {
            tracing::error!(error = %e, generation, "Failed to archive grave");
        }
    }

    /// Current view of the pet.
    pub fn snapshot(&self) -> PetSnapshot {
        self.lock().pet.snapshot(&self.config)
    }

    /// The food menu in canonical order.
    pub fn menu(&self) -> Vec<FoodMenuItem> {
        self.catalog.menu()
    }

    /// Name the pet. Accepted once per life.
    pub fn set_name(&self, name: &str) -> Result<PetSnapshot, PetError> {
        let mut live = self.lock();
        live.pet.set_name(name)?;
        tracing::info!(name = %live.pet.name, generation = live.pet.generation, "Pet named");
        Ok(live.pet.snapshot(&self.config))
    }

    /// Feed the pet one portion of `food`.
    ///
    /// Unknown foods are free and grow the pet by one point.
    pub fn feed(&self, food: &FoodId) -> Result<FeedOutcome, PetError> {
        let mut live = self.lock();
        let Live { pet, rng } = &mut *live;
        let report = feed(pet, food, &self.catalog, &self.config, rng).inspect_err(|e| {
            tracing::debug!(%food, error = %e, "Feed refused");
        })?;
        if let Some(grave) = &report.grave {
            self.bury(grave.clone());
        }
        Ok(FeedOutcome {
            snapshot: pet.snapshot(&self.config),
            report,
        })
    }

    /// Cure all sickness.
    pub fn heal(&self) -> Result<HealOutcome, PetError> {
        let mut live = self.lock();
        let level = live.pet.sickness_level;
        let cost = live.pet.heal(&self.config)?;
        tracing::info!(
            generation = live.pet.generation,
            cured_level = level,
            cost,
            "Pet healed"
        );
        Ok(HealOutcome {
            snapshot: live.pet.snapshot(&self.config),
            cost,
        })
    }

    /// Play one round of the dice game and pay out the reward.
    ///
    /// Once the stage's plays are spent the result is marked exhausted and
    /// money is untouched.
    pub fn play_minigame(&self) -> Result<PlayOutcome<DiceRoll>, PetError> {
        let mut live = self.lock();
        let Live { pet, rng } = &mut *live;
        pet.ensure_active()?;
        let roll = play_dice(&mut pet.plays, rng);
        pet.wallet.credit(roll.reward);
        Ok(PlayOutcome {
            snapshot: pet.snapshot(&self.config),
            roll,
        })
    }

    /// Play one round of chouhan, betting on the parity of the sum.
    ///
    /// Shares the per-stage allowance with [`Self::play_minigame`].
    pub fn play_chouhan(&self, bet: Parity) -> Result<PlayOutcome<ChouhanRoll>, PetError> {
        let mut live = self.lock();
        let Live { pet, rng } = &mut *live;
        pet.ensure_active()?;
        let roll = play_chouhan(bet, self.config.chouhan_reward, &mut pet.plays, rng);
        pet.wallet.credit(roll.reward);
        Ok(PlayOutcome {
            snapshot: pet.snapshot(&self.config),
            roll,
        })
    }

    /// End the pet's life now.
    pub fn self_terminate(&self) -> Result<TerminateOutcome, PetError> {
        let mut live = self.lock();
        let grave = self_terminate(&mut live.pet)?;
        self.bury(grave.clone());
        Ok(TerminateOutcome {
            snapshot: live.pet.snapshot(&self.config),
            grave,
        })
    }

    /// Replace the dead pet with a fresh egg of the next generation.
    pub fn advance_generation(&self) -> Result<PetSnapshot, PetError> {
        let mut live = self.lock();
        let next = live.pet.successor(&self.config)?;
        live.pet = next;
        tracing::info!(generation = live.pet.generation, "New generation hatched");
        Ok(live.pet.snapshot(&self.config))
    }

    /// Every archived grave, by ascending generation.
    pub fn graves(&self) -> Vec<Grave> {
        self.archive.list()
    }

    /// Delete every archived grave. The live pet is unaffected.
    pub fn reset_graves(&self) -> Result<(), ArchiveError> {
        self.archive.reset()
    }
}
