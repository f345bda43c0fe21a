use async_trait::async_trait;

use crate::domain::character::CharacterPage;
use crate::domain::episode::Episode;
use crate::repository::errors::RepositoryResult;

pub mod catalog;
pub mod errors;
#[cfg(test)]
pub mod mock;
pub mod remote;

/// Read access to the upstream character listing.
#[async_trait]
pub trait CharacterReader {
    /// Fetches one listing page, 1-based, decoded into domain types.
    async fn fetch_page(&self, page: u32) -> RepositoryResult<CharacterPage>;

    /// Fetches the listing's first page undecoded, for verbatim relay.
    async fn fetch_listing_raw(&self) -> RepositoryResult<String>;
}

/// Read access to individual episode resources.
#[async_trait]
pub trait EpisodeReader {
    /// Fetches one episode by the absolute URL a character references.
    async fn fetch_episode(&self, url: &str) -> RepositoryResult<Episode>;
}
