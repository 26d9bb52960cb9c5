//! The static food catalog.
//!
//! Each food has a price, a growth value, a sickness chance, and optionally
//! an adult branch it steers toward. The catalog order is canonical: it is
//! the menu order and the tie-break order for adult branch selection.
//!
//! Sickness chances are integers per 10 000 so draws stay in integer
//! arithmetic.
//!
//! | Food    | Price | Growth | Sickness | Adult branch |
//! |---------|-------|--------|----------|--------------|
//! | ramen   | 8     | 2      | 10%      | --           |
//! | cake    | 6     | 2      | 25%      | Chubby       |
//! | natto   | 3     | 1      | 0%       | Sage         |
//! | onigiri | 5     | 3      | 5%       | --           |
//! | liver   | 10    | 4      | 15%      | Muscle       |

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use hatchling_types::{AdultVariant, FoodId, FoodMenuItem};

use crate::EconomyError;

/// Denominator for sickness chances: 10 000 means certain.
pub const SICKNESS_CHANCE_SCALE: u32 = 10_000;

/// Catalog entry for one food.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodSpec {
    /// Catalog key.
    pub id: FoodId,
    /// Human-readable label.
    pub label: String,
    /// Price in currency units.
    pub price: u32,
    /// Growth points added per feed.
    pub growth: u32,
    /// Chance per 10 000 that a feed makes the pet sicker.
    #[serde(default)]
    pub sickness_chance_per_10000: u32,
    /// Adult branch chosen when this food dominates the diet.
    #[serde(default)]
    pub adult_variant: Option<AdultVariant>,
}

impl FoodSpec {
    fn new(
        id: &str,
        label: &str,
        price: u32,
        growth: u32,
        sickness_chance_per_10000: u32,
        adult_variant: Option<AdultVariant>,
    ) -> Self {
        Self {
            id: FoodId::from(id),
            label: label.to_owned(),
            price,
            growth,
            sickness_chance_per_10000,
            adult_variant,
        }
    }

    /// The terms applied when this food is fed.
    pub const fn terms(&self) -> FoodTerms {
        FoodTerms {
            price: self.price,
            growth: self.growth,
            sickness_chance_per_10000: self.sickness_chance_per_10000,
        }
    }
}

/// Price, growth and sickness chance applied by one feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodTerms {
    /// Price in currency units.
    pub price: u32,
    /// Growth points added.
    pub growth: u32,
    /// Chance per 10 000 of getting sicker.
    pub sickness_chance_per_10000: u32,
}

impl FoodTerms {
    /// Terms for a food key the catalog does not know: free, growth 1, safe.
    pub const UNKNOWN: Self = Self {
        price: 0,
        growth: 1,
        sickness_chance_per_10000: 0,
    };
}

/// Ordered, validated set of foods.
///
/// Immutable after construction. Deserializes from a plain list of
/// [`FoodSpec`] and rejects duplicate keys or impossible chances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FoodSpec>", into = "Vec<FoodSpec>")]
pub struct FoodCatalog {
    foods: Vec<FoodSpec>,
}

impl FoodCatalog {
    /// Build a catalog from foods in canonical order.
    ///
    /// # Errors
    ///
    /// Returns [`EconomyError::DuplicateFood`] if a key repeats, or
    /// [`EconomyError::InvalidSicknessChance`] if a chance exceeds
    /// [`SICKNESS_CHANCE_SCALE`].
    pub fn new(foods: Vec<FoodSpec>) -> Result<Self, EconomyError> {
        let mut seen = BTreeSet::new();
        for food in &foods {
            if !seen.insert(&food.id) {
                return Err(EconomyError::DuplicateFood(food.id.clone()));
            }
            if food.sickness_chance_per_10000 > SICKNESS_CHANCE_SCALE {
                return Err(EconomyError::InvalidSicknessChance {
                    food: food.id.clone(),
                    chance: food.sickness_chance_per_10000,
                });
            }
        }
        Ok(Self { foods })
    }

    /// Look up a food by key.
    pub fn get(&self, id: &FoodId) -> Option<&FoodSpec> {
        self.foods.iter().find(|food| &food.id == id)
    }

    /// Terms for the given key, falling back to [`FoodTerms::UNKNOWN`].
    pub fn terms(&self, id: &FoodId) -> FoodTerms {
        self.get(id).map_or(FoodTerms::UNKNOWN, FoodSpec::terms)
    }

    /// Foods in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &FoodSpec> {
        self.foods.iter()
    }

    /// The menu offered to the owner, in canonical order.
    pub fn menu(&self) -> Vec<FoodMenuItem> {
        self.foods
            .iter()
            .map(|food| FoodMenuItem {
                id: food.id.clone(),
                label: food.label.clone(),
                price: food.price,
            })
            .collect()
    }
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self {
            foods: vec![
                FoodSpec::new("ramen", "ラーメン", 8, 2, 1000, None),
                FoodSpec::new("cake", "ケーキ", 6, 2, 2500, Some(AdultVariant::Chubby)),
                FoodSpec::new("natto", "納豆", 3, 1, 0, Some(AdultVariant::Sage)),
                FoodSpec::new("onigiri", "おにぎり", 5, 3, 500, None),
                FoodSpec::new("liver", "レバー", 10, 4, 1500, Some(AdultVariant::Muscle)),
            ],
        }
    }
}

impl TryFrom<Vec<FoodSpec>> for FoodCatalog {
    type Error = EconomyError;

    fn try_from(foods: Vec<FoodSpec>) -> Result<Self, Self::Error> {
        Self::new(foods)
    }
}

impl From<FoodCatalog> for Vec<FoodSpec> {
    fn from(catalog: FoodCatalog) -> Self {
        catalog.foods
    }
}
