//! In-memory character catalog shared across request handlers.

use std::sync::{Mutex, PoisonError, RwLock};

use crate::domain::character::Character;
use crate::domain::view::EmptyAlert;

/// The accumulated character list plus the empty-result alert state.
///
/// Reads take a cloned snapshot so the roster computation never holds the
/// lock; a refresh swaps the whole vector, which is the atomic-replace
/// contract of the fetch-all walk. Concurrent refreshes are allowed and the
/// last write wins.
#[derive(Debug, Default)]
pub struct CharacterCatalog {
    characters: RwLock<Vec<Character>>,
    alert: Mutex<EmptyAlert>,
}

impl CharacterCatalog {
    pub fn is_empty(&self) -> bool {
        self.characters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    pub fn snapshot(&self) -> Vec<Character> {
        self.characters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn find_by_id(&self, id: u64) -> Option<Character> {
        self.characters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|character| character.id == id)
            .cloned()
    }

    /// Replaces the catalog contents wholesale.
    pub fn replace(&self, characters: Vec<Character>) {
        *self
            .characters
            .write()
            .unwrap_or_else(PoisonError::into_inner) = characters;
    }

    /// Attempts the `Idle -> Fired` transition; true when the one-time
    /// alert should be shown.
    pub fn fire_empty_alert(&self) -> bool {
        self.alert
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .fire()
    }

    /// Re-arms the alert after a non-empty result.
    pub fn rearm_empty_alert(&self) {
        self.alert
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .rearm();
    }
}
