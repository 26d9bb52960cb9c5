//! Adult branch selection.
//!
//! On entering Adult, the most-eaten food decides the cosmetic variant.
//! Ties go to the food that comes first in the catalog's canonical order;
//! foods the catalog does not know rank after every catalog food, in key
//! order. A winning food without an adult branch, or an empty history,
//! yields [`AdultVariant::Plain`].

use std::collections::BTreeMap;

use hatchling_economy::FoodCatalog;
use hatchling_types::{AdultVariant, FoodId};

/// The food eaten most often, with ties broken by canonical order.
pub fn dominant_food<'a>(
    history: &'a BTreeMap<FoodId, u32>,
    catalog: &FoodCatalog,
) -> Option<&'a FoodId> {
    let known = catalog
        .iter()
        .filter_map(|food| history.get_key_value(&food.id));
    let unknown = history
        .iter()
        .filter(|(id, _)| catalog.get(id).is_none());

    let mut best: Option<(&FoodId, u32)> = None;
    for (id, &count) in known.chain(unknown) {
        if count == 0 {
            continue;
        }
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((id, count)),
        }
    }
    best.map(|(id, _)| id)
}

/// Resolve the adult variant for the given food history.
pub fn resolve_adult_variant(
    history: &BTreeMap<FoodId, u32>,
    catalog: &FoodCatalog,
) -> AdultVariant {
    dominant_food(history, catalog)
        .and_then(|id| catalog.get(id))
        .and_then(|food| food.adult_variant)
        .unwrap_or_default()
}
