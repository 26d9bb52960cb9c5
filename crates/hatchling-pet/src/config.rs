//! Tunable parameters for growth, sickness, and the pet's starting purse.
//!
//! The [`PetConfig`] struct bundles every knob so callers (the lifecycle
//! controller, tests) can override the defaults. The controller builds it
//! from the `growth` and `economy` sections of the YAML configuration.

/// Highest sickness level any configuration can reach.
pub const SICKNESS_CEILING: u8 = 3;

/// Configuration for growth, sickness, and per-generation economy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetConfig {
    /// Growth points needed to advance one stage (default: 5).
    pub stage_threshold: u32,

    /// Highest sickness level (default: 3). Values above
    /// [`SICKNESS_CEILING`] are treated as the ceiling.
    pub max_sickness: u8,

    /// Whether feeding can make the pet sick (default: true).
    ///
    /// When disabled no sickness draw is taken at all.
    pub sickness_enabled: bool,

    /// Money a freshly hatched pet starts with (default: 15).
    pub starting_money: u32,

    /// Minigame plays allowed per stage (default: 3).
    pub plays_per_stage: u32,

    /// Heal price per sickness level (default: 10).
    pub heal_cost_per_level: u32,

    /// Reward for a correct chouhan bet (default: 10).
    pub chouhan_reward: u32,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            stage_threshold: 5,
            max_sickness: SICKNESS_CEILING,
            sickness_enabled: true,
            starting_money: 15,
            plays_per_stage: 3,
            heal_cost_per_level: 10,
            chouhan_reward: 10,
        }
    }
}
