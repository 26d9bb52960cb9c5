//! Error types for pet operations.
//!
//! Every variant describes an operation that was refused before any state
//! changed. None of them is fatal: the caller renders a message and the pet
//! carries on exactly as it was.

use hatchling_economy::EconomyError;

/// Reasons a pet operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PetError {
    /// The pet is dead; only advancing to the next generation is accepted.
    #[error("the pet is dead")]
    Dead,

    /// The pet has no name yet; only naming is accepted.
    #[error("the pet has not been named yet")]
    Unnamed,

    /// The pet already carries a name.
    #[error("the pet is already named {0}")]
    AlreadyNamed(String),

    /// The requested name was empty or whitespace.
    #[error("name must not be empty")]
    EmptyName,

    /// Heal requested while the pet is healthy.
    #[error("the pet is not sick")]
    Healthy,

    /// Advancing the generation requires a dead pet.
    #[error("the pet is still alive")]
    StillAlive,

    /// The balance does not cover the cost.
    #[error("insufficient funds: need {required}, have {available}")]
    InsufficientFunds {
        /// The cost of the rejected purchase.
        required: u32,
        /// The balance at the time of the purchase.
        available: u32,
    },

    /// The food catalog itself is malformed.
    #[error("invalid food catalog: {reason}")]
    InvalidCatalog {
        /// What is wrong with the catalog.
        reason: String,
    },

    /// An arithmetic overflow occurred in a counter computation.
    #[error("arithmetic overflow: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}

impl PetError {
    /// Whether this refusal is the purchase-failure case.
    pub const fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }
}

impl From<EconomyError> for PetError {
    fn from(err: EconomyError) -> Self {
        match err {
            EconomyError::InsufficientFunds {
                required,
                available,
            } => Self::InsufficientFunds {
                required,
                available,
            },
            EconomyError::ArithmeticOverflow { context } => Self::ArithmeticOverflow { context },
            err @ (EconomyError::DuplicateFood(_) | EconomyError::InvalidSicknessChance { .. }) => {
                Self::InvalidCatalog {
                    reason: err.to_string(),
                }
            }
        }
    }
}
