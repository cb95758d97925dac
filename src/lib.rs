/// Census API access: the HTTP client and the response model.
pub mod census;
/// Compiled-in generator configuration.
pub mod config;
/// Rendering of the generated translators module.
pub mod emit;
/// Error taxonomy shared by every stage.
pub mod error;
/// Extraction of canonical names from census records.
pub mod translate;

use crate::census::client::CensusClient;
use crate::census::model::{Loadout, Vehicle};
use crate::emit::TranslatorsTemplate;
use crate::error::CodegenError;
use crate::translate::loadouts::{ClassNormalizer, extract_loadouts};
use crate::translate::vehicles::{VehicleMatcher, extract_vehicles};

/// Logging verbosity for generator runs.
#[derive(Debug, Clone, Copy, Default)]
pub enum LogLevel {
    /// Emit verbose debug output.
    Debug,
    /// Emit standard informational output.
    #[default]
    Information,
}

/// Fetch both catalogs concurrently and render the translators module.
///
/// Either fetch failing aborts the whole run; nothing is rendered from a
/// partial result.
pub async fn generate(client: &CensusClient) -> Result<String, CodegenError> {
    let (vehicles, loadouts) = tokio::try_join!(client.fetch_vehicles(), client.fetch_loadouts())?;

    render_translators(&vehicles, &loadouts)
}

/// Extract both lookup tables and render them. Pure and deterministic.
pub fn render_translators(
    vehicles: &[Vehicle],
    loadouts: &[Loadout],
) -> Result<String, CodegenError> {
    let vehicle_table = extract_vehicles(vehicles, &VehicleMatcher::relevant()?);
    let loadout_table = extract_loadouts(loadouts, &ClassNormalizer::new()?);

    if vehicle_table.is_empty() {
        log::warn!("No vehicle in the census catalog matched a tracked vehicle name");
    }

    log::info!(
        "Extracted {} of {} vehicles and {} loadouts",
        vehicle_table.len(),
        vehicles.len(),
        loadout_table.len()
    );

    TranslatorsTemplate::new()?.render(&vehicle_table, &loadout_table)
}
