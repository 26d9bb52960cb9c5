//! Feeding: growth, sickness draws, and the stage-advance loop.
//!
//! # Order of operations
//!
//! 1. Refuse if the pet is dead or unnamed
//! 2. Charge the food's price (refuse with nothing changed if unaffordable)
//! 3. Draw sickness: one roll in `[0, 10000)` against the food's chance
//! 4. Record the food in the history
//! 5. Add the food's growth to `feed_progress`
//! 6. While `feed_progress >= stage_threshold`:
//!    - sick: die of sickness, stage unchanged
//!    - not terminal: advance one stage, carry the excess over, reset plays,
//!      resolve the adult branch when entering Adult
//!    - terminal: die of old age
//!
//! Sickness is never cleared here; only healing does that.

use hatchling_economy::{FoodCatalog, SICKNESS_CHANCE_SCALE};
use hatchling_types::{DeathCause, FoodId, Grave, Stage};
use rand::Rng;

use crate::config::{PetConfig, SICKNESS_CEILING};
use crate::death::process_death;
use crate::error::PetError;
use crate::evolution::resolve_adult_variant;
use crate::state::PetState;

/// What happened during one feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedReport {
    /// The food that was fed.
    pub food: FoodId,
    /// Price charged.
    pub price: u32,
    /// Growth points added.
    pub growth: u32,
    /// Whether the sickness draw hit (even if already at the maximum level).
    pub sickened: bool,
    /// Stages entered during this feed, in order.
    pub stages_entered: Vec<Stage>,
    /// The grave, if the pet died during this feed.
    pub grave: Option<Grave>,
}

/// Feed the pet one portion of `food`.
pub fn feed(
    state: &mut PetState,
    food: &FoodId,
    catalog: &FoodCatalog,
    config: &PetConfig,
    rng: &mut impl Rng,
) -> Result<FeedReport, PetError> {
    state.ensure_active()?;

    let terms = catalog.terms(food);
    state.wallet.debit(terms.price)?;

    // Sickness draw
    let sickened = config.sickness_enabled && {
        let roll: u32 = rng.random_range(0..SICKNESS_CHANCE_SCALE);
        roll < terms.sickness_chance_per_10000
    };
    if sickened {
        state.sickness_level = state
            .sickness_level
            .saturating_add(1)
            .min(config.max_sickness.min(SICKNESS_CEILING));
    }

    let eaten = state.food_history.entry(food.clone()).or_insert(0);
    *eaten = eaten.saturating_add(1);

    state.feed_progress = state.feed_progress.saturating_add(terms.growth);

    tracing::debug!(
        %food,
        price = terms.price,
        growth = terms.growth,
        sickened,
        sickness_level = state.sickness_level,
        feed_progress = state.feed_progress,
        "Fed pet"
    );

    let mut stages_entered = Vec::new();
    let mut grave = None;

    while state.feed_progress >= config.stage_threshold {
        if state.is_sick() {
            grave = Some(process_death(state, DeathCause::Sickness));
            break;
        }
        let Some(next) = state.stage.next() else {
            grave = Some(process_death(state, DeathCause::OldAge));
            break;
        };
        advance_stage(state, next, catalog, config);
        stages_entered.push(next);
    }

    Ok(FeedReport {
        food: food.clone(),
        price: terms.price,
        growth: terms.growth,
        sickened,
        stages_entered,
        grave,
    })
}

fn advance_stage(state: &mut PetState, next: Stage, catalog: &FoodCatalog, config: &PetConfig) {
    state.stage = next;
    state.feed_progress = state.feed_progress.saturating_sub(config.stage_threshold);
    state.plays.reset();
    if next == Stage::Adult {
        state.adult_variant = Some(resolve_adult_variant(&state.food_history, catalog));
    }

    tracing::info!(
        name = %state.name,
        generation = state.generation,
        stage = %next,
        adult_variant = ?state.adult_variant,
        "Pet advanced stage"
    );
}

#[cfg(test)]
mod tests {
    use hatchling_economy::{FoodSpec, Wallet};
    use hatchling_types::AdultVariant;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn safe_config() -> PetConfig {
        PetConfig {
            sickness_enabled: false,
            ..PetConfig::default()
        }
    }

    fn named_pet(config: &PetConfig) -> PetState {
        let mut pet = PetState::hatch(1, config);
        pet.name = String::from("Tama");
        pet
    }

    /// A catalog where `poison` always sickens and `feast` grows a lot.
    fn test_catalog() -> FoodCatalog {
        let foods = vec![
            FoodSpec {
                id: FoodId::from("poison"),
                label: String::from("Poison"),
                price: 0,
                growth: 1,
                sickness_chance_per_10000: SICKNESS_CHANCE_SCALE,
                adult_variant: None,
            },
            FoodSpec {
                id: FoodId::from("feast"),
                label: String::from("Feast"),
                price: 0,
                growth: 12,
                sickness_chance_per_10000: 0,
                adult_variant: Some(AdultVariant::Chubby),
            },
        ];
        FoodCatalog::new(foods).unwrap_or_default()
    }

    #[test]
    fn three_onigiri_advance_once_with_carry_over() {
        let config = safe_config();
        let catalog = FoodCatalog::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut pet = named_pet(&config);
        let onigiri = FoodId::from("onigiri");

        for _ in 0..3 {
            assert!(feed(&mut pet, &onigiri, &catalog, &config, &mut rng).is_ok());
        }
        assert_eq!(pet.stage, Stage::Baby);
        assert_eq!(pet.feed_progress, 4);
        assert_eq!(pet.wallet.balance(), 0);

        let before = pet.clone();
        let result = feed(&mut pet, &onigiri, &catalog, &config, &mut rng);
        assert_eq!(
            result,
            Err(PetError::InsufficientFunds {
                required: 5,
                available: 0,
            })
        );
        assert_eq!(pet, before);
    }

    #[test]
    fn dead_pet_cannot_eat() {
        let config = safe_config();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut pet = named_pet(&config);
        pet.alive = false;
        let result = feed(
            &mut pet,
            &FoodId::from("natto"),
            &FoodCatalog::default(),
            &config,
            &mut rng,
        );
        assert_eq!(result, Err(PetError::Dead));
    }

    #[test]
    fn unnamed_pet_cannot_eat() {
        let config = safe_config();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut pet = PetState::hatch(1, &config);
        let before = pet.clone();
        let result = feed(
            &mut pet,
            &FoodId::from("natto"),
            &FoodCatalog::default(),
            &config,
            &mut rng,
        );
        assert_eq!(result, Err(PetError::Unnamed));
        assert_eq!(pet, before);
    }

    #[test]
    fn certain_sickness_increments_and_caps() {
        let config = PetConfig::default();
        let catalog = test_catalog();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut pet = named_pet(&config);
        let poison = FoodId::from("poison");

        for expected in 1..=3_u8 {
            let report = feed(&mut pet, &poison, &catalog, &config, &mut rng);
            assert_eq!(report.map(|r| r.sickened), Ok(true));
            assert_eq!(pet.sickness_level, expected);
        }
        // Further hits stay at the cap.
        pet.feed_progress = 0;
        assert!(feed(&mut pet, &poison, &catalog, &config, &mut rng).is_ok());
        assert_eq!(pet.sickness_level, 3);
    }

    #[test]
    fn oversized_max_sickness_stops_at_ceiling() {
        let config = PetConfig {
            max_sickness: 9,
            stage_threshold: 100,
            ..PetConfig::default()
        };
        let catalog = test_catalog();
        let mut rng = SmallRng::seed_from_u64(5);
        let mut pet = named_pet(&config);
        let poison = FoodId::from("poison");

        for _ in 0..6 {
            assert!(feed(&mut pet, &poison, &catalog, &config, &mut rng).is_ok());
        }
        assert_eq!(pet.sickness_level, SICKNESS_CEILING);
        pet.wallet = Wallet::new(100);
        assert_eq!(pet.heal(&config), Ok(30));
    }

    #[test]
    fn zero_chance_never_sickens() {
        let config = PetConfig::default();
        let catalog = FoodCatalog::default();
        let mut rng = SmallRng::seed_from_u64(11);
        let mut pet = named_pet(&config);
        pet.wallet = Wallet::new(1000);
        let natto = FoodId::from("natto");
        for _ in 0..4 {
            let report = feed(&mut pet, &natto, &catalog, &config, &mut rng);
            assert_eq!(report.map(|r| r.sickened), Ok(false));
        }
        assert_eq!(pet.sickness_level, 0);
    }

    #[test]
    fn sick_pet_dies_at_threshold_without_advancing() {
        let config = safe_config();
        let catalog = FoodCatalog::default();
        let mut rng = SmallRng::seed_from_u64(5);
        let mut pet = named_pet(&config);
        pet.stage = Stage::Child;
        pet.sickness_level = 1;
        pet.feed_progress = 3;

        let report = feed(&mut pet, &FoodId::from("onigiri"), &catalog, &config, &mut rng);
        assert!(report.is_ok());
        let Ok(report) = report else { return };

        assert!(!pet.alive);
        assert_eq!(pet.stage, Stage::Child);
        assert!(report.stages_entered.is_empty());
        let grave = report.grave;
        assert_eq!(grave.as_ref().map(|g| g.stage), Some(Stage::Child));
        assert_eq!(grave.as_ref().map(|g| g.cause), Some(DeathCause::Sickness));
    }

    #[test]
    fn sick_pet_survives_below_threshold() {
        let config = safe_config();
        let catalog = FoodCatalog::default();
        let mut rng = SmallRng::seed_from_u64(5);
        let mut pet = named_pet(&config);
        pet.sickness_level = 2;

        let report = feed(&mut pet, &FoodId::from("onigiri"), &catalog, &config, &mut rng);
        assert_eq!(report.map(|r| r.grave.is_none()), Ok(true));
        assert!(pet.alive);
        assert_eq!(pet.feed_progress, 3);
        assert_eq!(pet.sickness_level, 2);
    }

    #[test]
    fn elderly_dies_of_old_age_even_when_healthy() {
        let config = safe_config();
        let catalog = FoodCatalog::default();
        let mut rng = SmallRng::seed_from_u64(8);
        let mut pet = named_pet(&config);
        pet.stage = Stage::Elderly;
        pet.feed_progress = 4;

        let report = feed(&mut pet, &FoodId::from("natto"), &catalog, &config, &mut rng);
        assert!(!pet.alive);
        assert_eq!(pet.stage, Stage::Elderly);
        assert_eq!(
            report.map(|r| r.grave.map(|g| g.cause)),
            Ok(Some(DeathCause::OldAge))
        );
    }

    #[test]
    fn large_growth_advances_several_stages() {
        let config = safe_config();
        let catalog = test_catalog();
        let mut rng = SmallRng::seed_from_u64(9);
        let mut pet = named_pet(&config);

        let report = feed(&mut pet, &FoodId::from("feast"), &catalog, &config, &mut rng);
        assert_eq!(
            report.map(|r| r.stages_entered),
            Ok(vec![Stage::Baby, Stage::Child])
        );
        assert_eq!(pet.stage, Stage::Child);
        assert_eq!(pet.feed_progress, 2);
        assert!(pet.alive);
    }

    #[test]
    fn entering_adult_resolves_variant() {
        let config = safe_config();
        let catalog = test_catalog();
        let mut rng = SmallRng::seed_from_u64(10);
        let mut pet = named_pet(&config);
        pet.stage = Stage::Child;

        assert!(feed(&mut pet, &FoodId::from("feast"), &catalog, &config, &mut rng).is_ok());
        assert_eq!(pet.stage, Stage::Elderly);
        assert_eq!(pet.adult_variant, Some(AdultVariant::Chubby));
        assert_eq!(pet.feed_progress, 2);
    }

    #[test]
    fn stage_advance_restores_plays() {
        let config = safe_config();
        let catalog = FoodCatalog::default();
        let mut rng = SmallRng::seed_from_u64(12);
        let mut pet = named_pet(&config);
        pet.plays.try_consume();
        pet.plays.try_consume();
        pet.feed_progress = 4;

        assert!(feed(&mut pet, &FoodId::from("natto"), &catalog, &config, &mut rng).is_ok());
        assert_eq!(pet.stage, Stage::Baby);
        assert_eq!(pet.plays.remaining(), 3);
    }

    #[test]
    fn unknown_food_is_free_and_grows_one() {
        let config = safe_config();
        let catalog = FoodCatalog::default();
        let mut rng = SmallRng::seed_from_u64(13);
        let mut pet = named_pet(&config);

        let report = feed(&mut pet, &FoodId::from("acorn"), &catalog, &config, &mut rng);
        assert_eq!(report.map(|r| (r.price, r.growth)), Ok((0, 1)));
        assert_eq!(pet.wallet.balance(), 15);
        assert_eq!(pet.feed_progress, 1);
        assert_eq!(pet.food_history.get(&FoodId::from("acorn")), Some(&1));
    }
}
