//! Serde models for the upstream API payloads and their conversions into
//! domain entities.

use serde::Deserialize;

use crate::domain::character::{
    Character, CharacterGender, CharacterPage, CharacterStatus, LocationRef,
};
use crate::domain::episode::Episode;

/// Pagination metadata of the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListingInfo {
    pub count: u32,
    pub pages: u32,
}

/// One page of the paginated character listing. `results` is absent on the
/// upstream's out-of-range error payload, so it defaults to empty.
#[derive(Debug, Deserialize)]
pub struct CharacterListResponse {
    pub info: ListingInfo,
    #[serde(default)]
    pub results: Vec<ApiCharacter>,
}

#[derive(Debug, Deserialize)]
pub struct ApiLocation {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiCharacter {
    pub id: u64,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub gender: CharacterGender,
    pub location: ApiLocation,
    pub image: String,
    #[serde(default)]
    pub episode: Vec<String>,
}

/// An episode resource. Further upstream fields are ignored.
#[derive(Debug, Deserialize)]
pub struct ApiEpisode {
    pub name: String,
}

impl From<ApiCharacter> for Character {
    fn from(api: ApiCharacter) -> Self {
        Self {
            id: api.id,
            name: api.name,
            status: api.status,
            species: api.species,
            kind: api.kind,
            gender: api.gender,
            location: LocationRef {
                name: api.location.name,
            },
            image: api.image,
            episode: api.episode,
        }
    }
}

impl From<CharacterListResponse> for CharacterPage {
    fn from(response: CharacterListResponse) -> Self {
        Self {
            pages: response.info.pages,
            characters: response.results.into_iter().map(Character::from).collect(),
        }
    }
}

impl From<ApiEpisode> for Episode {
    fn from(api: ApiEpisode) -> Self {
        Self { name: api.name }
    }
}
