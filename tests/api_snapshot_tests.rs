use tick_scale::api::{TICK_SCALE_SNAPSHOT_JSON_SCHEMA_V1, TickScaleSnapshotJsonContractV1};
use tick_scale::{ScaleError, TickScale, TickScaleConfig, TickScaleSnapshot, TimeUnit};

fn reference_scale() -> TickScale {
    let config = TickScaleConfig::new(0.0, 10_000.0, 100.0).with_min_step_hint(1.0);
    TickScale::new(config).expect("valid scale")
}

#[test]
fn tick_scale_config_json_roundtrip() {
    let config = TickScaleConfig::new(100.0, 200.0, 640.0)
        .with_min_step_hint(4.0)
        .with_forced_step(25.0)
        .with_time_unit(TimeUnit::Seconds);

    let json = config
        .to_json_pretty()
        .expect("config should serialize to json");
    let restored = TickScaleConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
}

#[test]
fn tick_scale_config_json_defaults_optional_fields() {
    let json = r#"{ "start": 0.0, "end": 1000.0, "container_extent": 320.0 }"#;
    let config = TickScaleConfig::from_json_str(json).expect("config should deserialize");

    assert_eq!(config, TickScaleConfig::new(0.0, 1_000.0, 320.0));
    assert_eq!(config.time_unit, TimeUnit::Milliseconds);
}

#[test]
fn tick_scale_config_json_rejects_garbage() {
    let result = TickScaleConfig::from_json_str("{ not json");
    assert!(matches!(result, Err(ScaleError::Serialization(_))));
}

#[test]
fn snapshot_captures_scale_without_moving_cursor() {
    let mut scale = reference_scale();
    scale.advance();

    let snapshot = scale.snapshot();
    assert_eq!(snapshot.range, (0.0, 10_000.0));
    assert_eq!(snapshot.step, 200.0);
    assert_eq!(snapshot.major_step, 1_000.0);
    assert_eq!(snapshot.multiplier_index, 3);
    assert_eq!(snapshot.magnitude, 100.0);
    assert_eq!(snapshot.margin_start, -200.0);
    assert_eq!(snapshot.margin_end, 10_200.0);
    assert_eq!(snapshot.ticks.len(), 53);
    assert_eq!(snapshot.major_ticks().count(), 11);
    assert_eq!(scale.current_value(), 10_000.0);
}

#[test]
fn snapshot_json_contract_roundtrip() {
    let snapshot = reference_scale().snapshot();

    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("snapshot should serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let restored = TickScaleSnapshot::from_json_compat_str(&json).expect("snapshot parses");
    assert_eq!(restored, snapshot);
}

#[test]
fn snapshot_json_compat_accepts_bare_snapshot() {
    let snapshot = reference_scale().snapshot();
    let bare = serde_json::to_string(&snapshot).expect("bare snapshot serializes");

    let restored = TickScaleSnapshot::from_json_compat_str(&bare).expect("bare snapshot parses");
    assert_eq!(restored, snapshot);
}

#[test]
fn snapshot_json_contract_rejects_unknown_schema() {
    let payload = TickScaleSnapshotJsonContractV1 {
        schema_version: TICK_SCALE_SNAPSHOT_JSON_SCHEMA_V1 + 1,
        snapshot: reference_scale().snapshot(),
    };
    let json = serde_json::to_string(&payload).expect("payload serializes");

    let result = TickScaleSnapshot::from_json_compat_str(&json);
    assert!(matches!(result, Err(ScaleError::Serialization(_))));
}

#[test]
fn snapshot_json_compat_rejects_non_json_and_bad_version_type() {
    let result = TickScaleSnapshot::from_json_compat_str("not json");
    assert!(matches!(result, Err(ScaleError::Serialization(_))));

    let json = r#"{ "schema_version": "1", "snapshot": {} }"#;
    let result = TickScaleSnapshot::from_json_compat_str(json);
    assert!(matches!(result, Err(ScaleError::Serialization(_))));
}
