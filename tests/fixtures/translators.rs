// GENERATED CODE -- Do not edit. Run `cargo run --bin translators-codegen > services/websocket/src/translators.rs` to regenerate.

use std::collections::HashMap;
use std::sync::LazyLock;

static VEHICLE_TO_NAME: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("1", "flash"),
        ("2", "sunderer"),
        ("4", "magrider"),
        ("15", "ant"),
        ("1001", "flash"),
        ("2033", "javelin"),
        ("2136", "dervish"),
        ("2142", "corsair"),
    ])
});

pub fn vehicle_to_name(vehicle_id: &str) -> String {
    match VEHICLE_TO_NAME.get(vehicle_id) {
        Some(name) => name.to_string(),
        None => "unknown".to_string(),
    }
}

static LOADOUT_TO_CLASS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("1", "infiltrator"),
        ("3", "light_assault"),
        ("4", "medic"),
        ("6", "heavy_assault"),
        ("7", "max"),
        ("15", "infiltrator"),
        ("45", "infiltrator_max"),
        ("28", "max"),
    ])
});

pub fn loadout_to_class(loadout_id: &str) -> String {
    match LOADOUT_TO_CLASS.get(loadout_id) {
        Some(name) => name.to_string(),
        None => "unknown".to_string(),
    }
}
