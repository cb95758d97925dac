use std::io::Write;

use tracing_subscriber::filter::LevelFilter;

use translators_codegen::LogLevel;
use translators_codegen::census::client::CensusClient;
use translators_codegen::config::GeneratorConfig;
use translators_codegen::error::CodegenError;
use translators_codegen::generate;

#[tokio::main]
async fn main() -> Result<(), CodegenError> {
    let config = GeneratorConfig::default();

    // stdout carries the generated module; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(match config.log_level {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Information => LevelFilter::INFO,
        })
        .init();

    let client = CensusClient::new(&config.census_base_url);
    let module = generate(&client).await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(module.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
