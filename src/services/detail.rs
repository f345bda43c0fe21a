//! Episode resolution for the character detail view.

use crate::domain::character::Character;
use crate::dto::character::CharacterDetail;
use crate::repository::EpisodeReader;
use crate::services::ServiceResult;

/// Shown when an episode name is absent or could not be resolved.
pub const EPISODE_PLACEHOLDER: &str = "-";

async fn episode_names<R>(
    repo: &R,
    first_url: &str,
    last_url: &str,
) -> ServiceResult<(String, String)>
where
    R: EpisodeReader + ?Sized,
{
    let first = repo.fetch_episode(first_url).await?.name;
    let last = repo.fetch_episode(last_url).await?.name;

    Ok((first, last))
}

/// Resolves the first and last appearance of a character into episode
/// names. A character without episode references resolves to placeholders
/// with no request issued; a single-episode character fetches the same
/// resource twice, mirroring the first/last walk. Any lookup failure is
/// logged and degrades both names to the placeholder so the detail view
/// always renders.
pub async fn character_detail<R>(repo: &R, character: Character) -> CharacterDetail
where
    R: EpisodeReader + ?Sized,
{
    let placeholders = || {
        (
            EPISODE_PLACEHOLDER.to_string(),
            EPISODE_PLACEHOLDER.to_string(),
        )
    };

    let (first_seen, last_seen) = match (character.episode.first(), character.episode.last()) {
        (Some(first_url), Some(last_url)) => {
            match episode_names(repo, first_url, last_url).await {
                Ok(names) => names,
                Err(err) => {
                    log::error!("Failed to fetch episode data: {err}");
                    placeholders()
                }
            }
        }
        _ => placeholders(),
    };

    CharacterDetail::new(character, first_seen, last_seen)
}
