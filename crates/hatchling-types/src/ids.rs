//! Type-safe identifiers.
//!
//! Graves carry a UUID v7 (time-ordered) so archive listings can refer to a
//! single record. Foods are identified by their catalog key, a short lowercase
//! string such as `"onigiri"`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Unique identifier for an archived grave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GraveId(pub Uuid);

impl GraveId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for GraveId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for GraveId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog key of a food item.
///
/// Unknown keys are legal: the economy assigns them default terms instead of
/// rejecting them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct FoodId(pub String);

impl FoodId {
    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for FoodId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FoodId {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for FoodId {
    fn from(key: String) -> Self {
        Self(key)
    }
}
