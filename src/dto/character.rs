use serde::Serialize;

use crate::domain::character::{Character, CharacterGender, CharacterStatus};

/// Aggregated data for the character detail view: the catalog entry
/// flattened for display plus the resolved first and last appearance.
/// Episode names default to "-" when unresolved or absent.
#[derive(Debug, Serialize, PartialEq)]
pub struct CharacterDetail {
    pub id: u64,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    pub kind: String,
    pub gender: CharacterGender,
    pub location: String,
    pub image: String,
    pub first_seen_episode: String,
    pub last_seen_episode: String,
}

impl CharacterDetail {
    pub fn new(character: Character, first_seen_episode: String, last_seen_episode: String) -> Self {
        Self {
            id: character.id,
            name: character.name,
            status: character.status,
            species: character.species,
            kind: character.kind,
            gender: character.gender,
            location: character.location.name,
            image: character.image,
            first_seen_episode,
            last_seen_episode,
        }
    }
}
