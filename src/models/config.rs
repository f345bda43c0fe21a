//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the upstream trivia API, without a trailing slash.
    pub upstream_api_url: String,
    pub templates_dir: String,
    /// Hard ceiling on the catalog walk in case the upstream reports a
    /// bogus page count.
    pub max_fetch_pages: u32,
    /// Signing key material for the flash-message cookie, 64 bytes minimum.
    pub secret: String,
}
