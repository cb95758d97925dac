use crate::LogLevel;

/// Census mirror serving the vehicle and loadout collections.
pub const CENSUS_BASE_URL: &str = "https://census.lithafalcon.cc/get/ps2";

/// Command recorded in the generated module's header.
pub const REGENERATE_COMMAND: &str =
    "cargo run --bin translators-codegen > services/websocket/src/translators.rs";

/// Settings for a generator run. The generator takes no flags or environment
/// variables, so these are fixed at compile time.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub census_base_url: String,
    pub log_level: LogLevel,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            census_base_url: CENSUS_BASE_URL.to_string(),
            log_level: LogLevel::default(),
        }
    }
}
