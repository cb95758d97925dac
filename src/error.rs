use thiserror::Error;

/// Failures that abort a generator run.
///
/// A vehicle that matches none of the relevant names is not an error; it is
/// simply left out of the vehicle table.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Census API error ({status}) for {url}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed {collection} response: {source}")]
    MalformedResponse {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),

    #[error("Failed to write generated module: {0}")]
    Output(#[from] std::io::Error),
}
