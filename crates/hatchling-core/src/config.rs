//! Configuration loading and typed config structures for Hatchling.
//!
//! The configuration lives in a YAML file (conventionally `hatchling.yaml`).
//! Every field has a default, so an empty document yields the stock game:
//! threshold 5, three sickness levels, 15 starting money, three plays per
//! stage, and the five-food catalog.

use std::path::{Path, PathBuf};

use hatchling_economy::FoodCatalog;
use hatchling_pet::{PetConfig, SICKNESS_CEILING};
use serde::Deserialize;

/// Environment variable that replaces `archive.path` when set.
pub const ARCHIVE_PATH_ENV: &str = "HATCHLING_ARCHIVE_PATH";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is outside its allowed range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HatchlingConfig {
    /// Growth and sickness parameters.
    #[serde(default)]
    pub growth: GrowthConfig,

    /// Money, minigames, treatment, and the food catalog.
    #[serde(default)]
    pub economy: EconomyConfig,

    /// Where graves are kept.
    #[serde(default)]
    pub archive: ArchiveConfig,

    /// Random source settings.
    #[serde(default)]
    pub rng: RngConfig,
}

impl HatchlingConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `HATCHLING_ARCHIVE_PATH` overrides `archive.path` when set.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.archive.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pet logic cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.growth.stage_threshold == 0 {
            return Err(ConfigError::Invalid {
                field: "growth.stage_threshold",
                reason: String::from("must be at least 1"),
            });
        }
        if !(1..=SICKNESS_CEILING).contains(&self.growth.max_sickness) {
            return Err(ConfigError::Invalid {
                field: "growth.max_sickness",
                reason: format!(
                    "must be between 1 and {SICKNESS_CEILING}, got {}",
                    self.growth.max_sickness
                ),
            });
        }
        Ok(())
    }

    /// The growth and economy knobs the pet logic needs.
    pub const fn to_pet_config(&self) -> PetConfig {
        PetConfig {
            stage_threshold: self.growth.stage_threshold,
            max_sickness: self.growth.max_sickness,
            sickness_enabled: self.growth.sickness_enabled,
            starting_money: self.economy.starting_money,
            plays_per_stage: self.economy.plays_per_stage,
            heal_cost_per_level: self.economy.heal_cost_per_level,
            chouhan_reward: self.economy.chouhan_reward,
        }
    }
}

/// Growth and sickness configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GrowthConfig {
    /// Growth points per stage.
    #[serde(default = "default_stage_threshold")]
    pub stage_threshold: u32,

    /// Highest sickness level.
    #[serde(default = "default_max_sickness")]
    pub max_sickness: u8,

    /// Whether feeding can make the pet sick.
    #[serde(default = "default_true")]
    pub sickness_enabled: bool,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            stage_threshold: default_stage_threshold(),
            max_sickness: default_max_sickness(),
            sickness_enabled: default_true(),
        }
    }
}

/// Economy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EconomyConfig {
    /// Money each new generation starts with.
    #[serde(default = "default_starting_money")]
    pub starting_money: u32,

    /// Heal price per sickness level.
    #[serde(default = "default_heal_cost_per_level")]
    pub heal_cost_per_level: u32,

    /// Minigame plays per stage, shared by dice and chouhan.
    #[serde(default = "default_plays_per_stage")]
    pub plays_per_stage: u32,

    /// Payout for a correct chouhan bet.
    #[serde(default = "default_chouhan_reward")]
    pub chouhan_reward: u32,

    /// The food catalog, in menu order. Replaces the stock catalog entirely
    /// when given.
    #[serde(default)]
    pub foods: FoodCatalog,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            starting_money: default_starting_money(),
            heal_cost_per_level: default_heal_cost_per_level(),
            plays_per_stage: default_plays_per_stage(),
            chouhan_reward: default_chouhan_reward(),
            foods: FoodCatalog::default(),
        }
    }
}

/// Archive configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArchiveConfig {
    /// Path of the JSON grave file.
    #[serde(default = "default_archive_path")]
    pub path: PathBuf,
}

impl ArchiveConfig {
    /// Replace the archive path with `HATCHLING_ARCHIVE_PATH` when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(ARCHIVE_PATH_ENV) {
            self.path = PathBuf::from(val);
        }
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            path: default_archive_path(),
        }
    }
}

/// Random source configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RngConfig {
    /// Fixed seed for reproducible runs. Seeded from the OS when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

// ---------------------------------------------------------------------------
// Default value functions for serde
// ---------------------------------------------------------------------------

const fn default_stage_threshold() -> u32 {
    5
}

const fn default_max_sickness() -> u8 {
    3
}

const fn default_true() -> bool {
    true
}

const fn default_starting_money() -> u32 {
    15
}

const fn default_heal_cost_per_level() -> u32 {
    10
}

const fn default_plays_per_stage() -> u32 {
    3
}

const fn default_chouhan_reward() -> u32 {
    10
}

fn default_archive_path() -> PathBuf {
    PathBuf::from("graves.json")
}
