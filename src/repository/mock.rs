//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::character::CharacterPage;
use crate::domain::episode::Episode;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CharacterReader, EpisodeReader};

mock! {
    pub Repository {}

    #[async_trait]
    impl CharacterReader for Repository {
        async fn fetch_page(&self, page: u32) -> RepositoryResult<CharacterPage>;
        async fn fetch_listing_raw(&self) -> RepositoryResult<String>;
    }

    #[async_trait]
    impl EpisodeReader for Repository {
        async fn fetch_episode(&self, url: &str) -> RepositoryResult<Episode>;
    }
}
