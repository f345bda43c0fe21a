//! Catalog acquisition and the filtered/sorted/paginated roster view.

use std::cmp::Ordering;

use crate::domain::character::Character;
use crate::domain::filter::FilterCriteria;
use crate::domain::view::{SortOrder, ViewState};
use crate::repository::CharacterReader;
use crate::repository::catalog::CharacterCatalog;
use crate::services::{ServiceError, ServiceResult};

/// One computed page of the filtered-sorted roster.
#[derive(Debug)]
pub struct RosterPage {
    /// The contiguous slice shown to the user.
    pub characters: Vec<Character>,
    /// Characters matching the filter across all pages.
    pub total: usize,
    /// `ceil(total / per_page)`; zero when nothing matches.
    pub total_pages: usize,
    /// Effective 1-based page after clamping the requested one.
    pub page: usize,
}

/// Walks the upstream listing from page 1, accumulating every page until
/// the reported page count is reached, a page comes back empty, or the
/// defensive `max_pages` cap stops a runaway walk. Any request error
/// propagates untouched so the caller keeps its previous catalog.
pub async fn fetch_all<R>(repo: &R, max_pages: u32) -> ServiceResult<Vec<Character>>
where
    R: CharacterReader + ?Sized,
{
    let mut characters = Vec::new();
    let mut page = 1;

    loop {
        let batch = repo.fetch_page(page).await?;

        if batch.characters.is_empty() {
            break;
        }
        characters.extend(batch.characters);

        if page >= batch.pages {
            break;
        }
        if page >= max_pages {
            log::warn!(
                "Catalog walk stopped at the {max_pages}-page cap; upstream reported {} pages",
                batch.pages
            );
            break;
        }
        page += 1;
    }

    Ok(characters)
}

/// Refreshes the shared catalog, replacing its contents atomically on
/// success. A failed walk is logged and the previous contents survive,
/// which on first load means an empty roster rather than a retry.
pub async fn refresh<R>(repo: &R, catalog: &CharacterCatalog, max_pages: u32)
where
    R: CharacterReader + ?Sized,
{
    match fetch_all(repo, max_pages).await {
        Ok(characters) => {
            log::info!("Catalog refreshed with {} characters", characters.len());
            catalog.replace(characters);
        }
        Err(err) => log::error!("Failed to refresh the character catalog: {err}"),
    }
}

/// Looks a character up in the current catalog snapshot.
pub fn find_character(catalog: &CharacterCatalog, id: u64) -> ServiceResult<Character> {
    catalog.find_by_id(id).ok_or(ServiceError::NotFound)
}

fn by_name(a: &Character, b: &Character) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// Derives the roster page for one request: filter, sort, count pages,
/// clamp the requested page into range, slice. The slice is always a
/// contiguous in-bounds window of the filtered-sorted list.
pub fn roster_page(
    catalog: &[Character],
    criteria: &FilterCriteria,
    view: &ViewState,
) -> RosterPage {
    let mut filtered: Vec<Character> = catalog
        .iter()
        .filter(|character| criteria.matches(character))
        .cloned()
        .collect();

    match view.sort {
        SortOrder::None => {}
        SortOrder::NameAscending => filtered.sort_by(by_name),
        SortOrder::NameDescending => filtered.sort_by(|a, b| by_name(b, a)),
    }

    let total = filtered.len();
    let total_pages = total.div_ceil(view.per_page);
    let page = view.page.clamp(1, total_pages.max(1));

    let characters = filtered
        .into_iter()
        .skip((page - 1) * view.per_page)
        .take(view.per_page)
        .collect();

    RosterPage {
        characters,
        total,
        total_pages,
        page,
    }
}
