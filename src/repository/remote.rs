//! Reqwest-backed repository for the upstream trivia API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::domain::character::CharacterPage;
use crate::domain::episode::Episode;
use crate::models::api::{ApiEpisode, CharacterListResponse};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CharacterReader, EpisodeReader};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the upstream API. Cheap to clone; the inner
/// `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct RemoteRepository {
    client: Client,
    base_url: String,
}

impl RemoteRepository {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn listing_url(&self) -> String {
        format!("{}/character", self.base_url)
    }
}

/// Maps non-success statuses to repository errors.
fn check_status(response: Response) -> RepositoryResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else if status == reqwest::StatusCode::NOT_FOUND {
        Err(RepositoryError::NotFound)
    } else {
        Err(RepositoryError::UpstreamStatus(status.as_u16()))
    }
}

#[async_trait]
impl CharacterReader for RemoteRepository {
    async fn fetch_page(&self, page: u32) -> RepositoryResult<CharacterPage> {
        let response = self
            .client
            .get(self.listing_url())
            .query(&[("page", page)])
            .send()
            .await?;

        let body = check_status(response)?.text().await?;
        let listing: CharacterListResponse = serde_json::from_str(&body)?;

        Ok(listing.into())
    }

    async fn fetch_listing_raw(&self) -> RepositoryResult<String> {
        let response = self.client.get(self.listing_url()).send().await?;

        Ok(check_status(response)?.text().await?)
    }
}

#[async_trait]
impl EpisodeReader for RemoteRepository {
    async fn fetch_episode(&self, url: &str) -> RepositoryResult<Episode> {
        let response = self.client.get(url).send().await?;

        let body = check_status(response)?.text().await?;
        let episode: ApiEpisode = serde_json::from_str(&body)?;

        Ok(episode.into())
    }
}
