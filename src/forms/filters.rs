//! Query-string form carrying the roster filters and view controls.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::character::{CharacterGender, CharacterStatus};
use crate::domain::filter::FilterCriteria;
use crate::domain::view::{SortOrder, ViewState};

/// Raw query parameters of the index page. The filter panel submits this
/// form via GET without a `page` field, so any filter, sort, or page-size
/// change lands back on page 1; pagination links re-serialize the form with
/// an explicit page.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct FilterForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub species: Option<String>,
    /// Free-text subtype filter, named `type` in the query string like the
    /// upstream field it matches against.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}

fn normalized(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl FilterForm {
    /// Normalizes the free-text fields and parses the enumerated ones.
    /// Unknown enum values count as absent filters.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            name: normalized(&self.name),
            status: normalized(&self.status)
                .as_deref()
                .and_then(CharacterStatus::from_param),
            gender: normalized(&self.gender)
                .as_deref()
                .and_then(CharacterGender::from_param),
            species: normalized(&self.species),
            kind: normalized(&self.kind),
        }
    }

    pub fn view_state(&self) -> ViewState {
        let sort = SortOrder::from_param(self.sort.as_deref().unwrap_or(""));
        ViewState::new(self.page, self.per_page, sort)
    }

    /// The form re-serialized without its page, for building pagination
    /// links that preserve every other control.
    pub fn base_query(&self) -> String {
        let mut without_page = self.clone();
        without_page.page = None;

        serde_html_form::to_string(&without_page).unwrap_or_default()
    }
}
