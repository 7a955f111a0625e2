use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::TickScaleConfig;
use crate::error::{ScaleError, ScaleResult};

use super::TickScaleSnapshot;

pub const TICK_SCALE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

const SCHEMA_VERSION_KEY: &str = "schema_version";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickScaleSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: TickScaleSnapshot,
}

impl TickScaleConfig {
    pub fn to_json_pretty(self) -> ScaleResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ScaleError::Serialization(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON. The result is not validated.
    pub fn from_json_str(input: &str) -> ScaleResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ScaleError::Serialization(format!("failed to parse config: {e}")))
    }
}

impl TickScaleSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ScaleResult<String> {
        let payload = TickScaleSnapshotJsonContractV1 {
            schema_version: TICK_SCALE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ScaleError::Serialization(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses a snapshot written by [`to_json_contract_v1_pretty`](Self::to_json_contract_v1_pretty)
    /// or a bare `serde_json` dump of the snapshot.
    ///
    /// Any payload carrying a `schema_version` key is treated as a contract and
    /// must match [`TICK_SCALE_SNAPSHOT_JSON_SCHEMA_V1`].
    pub fn from_json_compat_str(input: &str) -> ScaleResult<Self> {
        let value: Value = serde_json::from_str(input).map_err(|e| {
            ScaleError::Serialization(format!("snapshot payload is not json: {e}"))
        })?;

        let Some(version) = value.get(SCHEMA_VERSION_KEY) else {
            return serde_json::from_value(value).map_err(|e| {
                ScaleError::Serialization(format!("failed to parse bare snapshot: {e}"))
            });
        };
        if version.as_u64() != Some(u64::from(TICK_SCALE_SNAPSHOT_JSON_SCHEMA_V1)) {
            return Err(ScaleError::Serialization(format!(
                "unsupported snapshot schema version: {version}"
            )));
        }

        let contract: TickScaleSnapshotJsonContractV1 =
            serde_json::from_value(value).map_err(|e| {
                ScaleError::Serialization(format!("failed to parse snapshot contract v1: {e}"))
            })?;
        Ok(contract.snapshot)
    }
}
