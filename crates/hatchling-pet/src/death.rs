//! Death conditions and the grave written for each death.
//!
//! A pet dies when:
//! - a stage threshold is crossed while it is sick,
//! - the terminal stage's threshold is crossed (old age),
//! - the owner ends its life.
//!
//! Death is a state, not a deallocation: the pet stays in memory, marked
//! dead, until the owner advances to the next generation.

use chrono::Utc;

use hatchling_types::{DeathCause, Grave, GraveId};

use crate::error::PetError;
use crate::state::PetState;

/// Mark the pet dead and build its grave.
///
/// The caller is responsible for appending the grave to the archive. The
/// grave captures stage and progress exactly as they are at this moment.
pub fn process_death(state: &mut PetState, cause: DeathCause) -> Grave {
    state.alive = false;
    state.cause_of_death = Some(cause);

    tracing::info!(
        name = %state.name,
        generation = state.generation,
        stage = %state.stage,
        %cause,
        "Pet died"
    );

    Grave {
        id: Some(GraveId::new()),
        name: state.name.clone(),
        stage: state.stage,
        adult_variant: state.adult_variant,
        generation: state.generation,
        feed_progress: state.feed_progress,
        cause,
        died_at: Some(Utc::now()),
    }
}

/// End the pet's life at the owner's request.
pub fn self_terminate(state: &mut PetState) -> Result<Grave, PetError> {
    if !state.alive {
        return Err(PetError::Dead);
    }
    Ok(process_death(state, DeathCause::SelfTerminated))
}
