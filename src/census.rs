/// HTTP client for the census collections.
pub mod client;
/// Census response envelopes and record types.
pub mod model;
