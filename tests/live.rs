use translators_codegen::census::client::CensusClient;
use translators_codegen::config::CENSUS_BASE_URL;
use translators_codegen::error::CodegenError;
use translators_codegen::generate;

// Needs network access to the census mirror: `cargo test -- --ignored`.

#[tokio::test]
#[ignore]
async fn census_catalogs_smoke() -> Result<(), CodegenError> {
    let client = CensusClient::new(CENSUS_BASE_URL);

    let vehicles = client.fetch_vehicles().await?;
    assert!(!vehicles.is_empty(), "Expected vehicles to be returned");

    let loadouts = client.fetch_loadouts().await?;
    assert!(!loadouts.is_empty(), "Expected loadouts to be returned");

    Ok(())
}

#[tokio::test]
#[ignore]
async fn generated_module_tracks_core_vehicles() -> Result<(), CodegenError> {
    let client = CensusClient::new(CENSUS_BASE_URL);

    let module = generate(&client).await?;
    assert!(module.contains(r#""flash"),"#));
    assert!(module.contains(r#""heavy_assault"),"#));

    Ok(())
}
