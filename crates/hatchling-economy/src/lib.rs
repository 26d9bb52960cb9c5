//! Wallet, food catalog, treatment pricing, and minigames for the Hatchling pet.
//!
//! Money is a nominal in-memory currency. It is earned through minigames and
//! spent on food and treatment. The one rule every module here upholds: a
//! debit is validated against the balance before anything else changes, so a
//! rejected purchase leaves the pet untouched.
//!
//! # Modules
//!
//! - [`catalog`] -- The static [`FoodCatalog`]: price, growth, sickness chance
//!   and adult branch per food, in canonical order.
//! - [`wallet`] -- The [`Wallet`] balance with checked debits and credits.
//! - [`treatment`] -- Heal pricing by sickness level.
//! - [`minigame`] -- Dice and chouhan games plus the per-stage [`PlayAllowance`].
//!
//! # Usage
//!
//! ```
//! use hatchling_economy::{FoodCatalog, Wallet};
//! use hatchling_types::FoodId;
//!
//! let catalog = FoodCatalog::default();
//! let mut wallet = Wallet::new(15);
//!
//! let terms = catalog.terms(&FoodId::from("onigiri"));
//! assert!(wallet.debit(terms.price).is_ok());
//! assert_eq!(wallet.balance(), 10);
//! ```

pub mod catalog;
pub mod minigame;
pub mod treatment;
pub mod wallet;

// Re-export primary types at crate root.
pub use catalog::{FoodCatalog, FoodSpec, FoodTerms, SICKNESS_CHANCE_SCALE};
pub use minigame::{PlayAllowance, play_chouhan, play_dice};
pub use treatment::heal_cost;
pub use wallet::Wallet;

use hatchling_types::FoodId;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur in economy operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EconomyError {
    /// The balance does not cover the cost.
    #[error("insufficient funds: need {required}, have {available}")]
    InsufficientFunds {
        /// The cost of the rejected purchase.
        required: u32,
        /// The balance at the time of the purchase.
        available: u32,
    },

    /// The same food key appears twice in a catalog.
    #[error("duplicate food in catalog: {0}")]
    DuplicateFood(FoodId),

    /// A sickness chance exceeds certainty.
    #[error("sickness chance for {food} is {chance}, must be at most 10000")]
    InvalidSicknessChance {
        /// The offending food.
        food: FoodId,
        /// The configured chance per 10 000.
        chance: u32,
    },

    /// An arithmetic overflow occurred while computing a price.
    #[error("arithmetic overflow in economy computation: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}
