use crate::domain::character::{Character, CharacterGender, CharacterStatus};

/// Conjunctive filter over the catalog. Free-text fields match by
/// case-insensitive containment, enumerated fields by equality. Present
/// fields are expected to be trimmed and non-empty; normalization happens
/// at the form boundary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    pub name: Option<String>,
    pub status: Option<CharacterStatus>,
    pub gender: Option<CharacterGender>,
    pub species: Option<String>,
    pub kind: Option<String>,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl FilterCriteria {
    /// True when at least one field constrains the result.
    pub fn is_active(&self) -> bool {
        self.name.is_some()
            || self.status.is_some()
            || self.gender.is_some()
            || self.species.is_some()
            || self.kind.is_some()
    }

    /// Every present criterion must hold; absent criteria impose nothing.
    pub fn matches(&self, character: &Character) -> bool {
        self.status.is_none_or(|status| character.status == status)
            && self.gender.is_none_or(|gender| character.gender == gender)
            && self
                .name
                .as_deref()
                .is_none_or(|name| contains_ignore_case(&character.name, name))
            && self
                .species
                .as_deref()
                .is_none_or(|species| contains_ignore_case(&character.species, species))
            && self
                .kind
                .as_deref()
                .is_none_or(|kind| contains_ignore_case(&character.kind, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::character::LocationRef;

    fn character(name: &str, status: CharacterStatus, species: &str, kind: &str) -> Character {
        Character {
            id: 1,
            name: name.to_string(),
            status,
            species: species.to_string(),
            kind: kind.to_string(),
            gender: CharacterGender::Male,
            location: LocationRef::default(),
            image: String::new(),
            episode: Vec::new(),
        }
    }

    #[test]
    fn empty_criteria_match_everything() {
        let criteria = FilterCriteria::default();
        assert!(!criteria.is_active());
        assert!(criteria.matches(&character(
            "Rick Sanchez",
            CharacterStatus::Alive,
            "Human",
            ""
        )));
    }

    #[test]
    fn name_matches_are_case_insensitive_substrings() {
        let criteria = FilterCriteria {
            name: Some("sanchez".to_string()),
            ..Default::default()
        };
        assert!(criteria.matches(&character(
            "Rick Sanchez",
            CharacterStatus::Alive,
            "Human",
            ""
        )));
        assert!(!criteria.matches(&character(
            "Morty Smith",
            CharacterStatus::Alive,
            "Human",
            ""
        )));
    }

    #[test]
    fn status_matches_exactly() {
        let criteria = FilterCriteria {
            status: Some(CharacterStatus::Dead),
            ..Default::default()
        };
        assert!(criteria.matches(&character(
            "Birdperson",
            CharacterStatus::Dead,
            "Bird-Person",
            ""
        )));
        assert!(!criteria.matches(&character(
            "Rick Sanchez",
            CharacterStatus::Alive,
            "Human",
            ""
        )));
    }

    #[test]
    fn criteria_are_conjunctive() {
        let criteria = FilterCriteria {
            status: Some(CharacterStatus::Alive),
            species: Some("human".to_string()),
            ..Default::default()
        };
        assert!(criteria.matches(&character(
            "Rick Sanchez",
            CharacterStatus::Alive,
            "Human",
            ""
        )));
        assert!(!criteria.matches(&character(
            "Birdperson",
            CharacterStatus::Alive,
            "Bird-Person",
            ""
        )));
        assert!(!criteria.matches(&character(
            "Dead Rick",
            CharacterStatus::Dead,
            "Human",
            ""
        )));
    }

    #[test]
    fn kind_matches_the_free_text_subtype() {
        let criteria = FilterCriteria {
            kind: Some("parasite".to_string()),
            ..Default::default()
        };
        assert!(criteria.matches(&character(
            "Sleepy Gary",
            CharacterStatus::Unknown,
            "Alien",
            "Parasite"
        )));
        assert!(!criteria.matches(&character(
            "Rick Sanchez",
            CharacterStatus::Alive,
            "Human",
            ""
        )));
    }
}
