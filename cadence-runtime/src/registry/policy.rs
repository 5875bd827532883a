use std::str::FromStr;

use serde::Deserialize;

use crate::error::RegistryError;

/// Which execution strategy a registration uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionPolicy {
    /// Shared time driver; runs of one task never overlap.
    SerializedShared,
    /// Shared time driver; every firing runs independently.
    OverlappingShared,
    /// One driver loop per task; runs execute inline on it, isolated from
    /// every other task's schedule.
    DedicatedTimer,
}

impl FromStr for ExecutionPolicy {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "serialized-shared" | "serialized" => Ok(Self::SerializedShared),
            "overlapping-shared" | "overlapping" => Ok(Self::OverlappingShared),
            "dedicated-timer" | "dedicated" => Ok(Self::DedicatedTimer),
            other => Err(RegistryError::InvalidPolicy(other.to_string())),
        }
    }
}
