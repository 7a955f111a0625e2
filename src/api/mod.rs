//! Serializable surface for hosts: config JSON and snapshot contracts.

mod json_contract;
mod tick_scale_snapshot;

pub use json_contract::{TICK_SCALE_SNAPSHOT_JSON_SCHEMA_V1, TickScaleSnapshotJsonContractV1};
pub use tick_scale_snapshot::TickScaleSnapshot;
