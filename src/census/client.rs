use reqwest::Client;

use crate::census::model::{Loadout, Vehicle, parse_loadout_list, parse_vehicle_list};
use crate::error::CodegenError;

const VEHICLE_COLLECTION: &str = "vehicle";
const LOADOUT_COLLECTION: &str = "loadout";

/// HTTP client for census collection lookups.
pub struct CensusClient {
    client: Client,
    base_url: String,
}

impl CensusClient {
    /// Create a new client for the given census base URL.
    pub fn new(base_url: &str) -> Self {
        Self::with_http_client(base_url, Client::new())
    }

    /// Create a client that sends requests through an existing `reqwest::Client`.
    pub fn with_http_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Retrieve the full vehicle catalog.
    pub async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, CodegenError> {
        let body = self.get_collection(VEHICLE_COLLECTION).await?;
        let vehicles = parse_vehicle_list(&body)?;

        log::debug!("Fetched {} vehicles", vehicles.len());
        Ok(vehicles)
    }

    /// Retrieve the full loadout catalog.
    pub async fn fetch_loadouts(&self) -> Result<Vec<Loadout>, CodegenError> {
        let body = self.get_collection(LOADOUT_COLLECTION).await?;
        let loadouts = parse_loadout_list(&body)?;

        log::debug!("Fetched {} loadouts", loadouts.len());
        Ok(loadouts)
    }

    /// GET a collection and return the raw response body.
    ///
    /// The body is returned as text so a well-formed response with the wrong
    /// shape surfaces as a malformed response rather than a transport error.
    async fn get_collection(&self, collection: &str) -> Result<String, CodegenError> {
        let url = format!("{}/{}", self.base_url, collection);

        log::debug!("Url: {:?}", url);

        let resp = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| CodegenError::Network {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CodegenError::Status { url, status, body });
        }

        resp.text()
            .await
            .map_err(|source| CodegenError::Network { url, source })
    }
}
