use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::repository::CharacterReader;
use crate::repository::remote::RemoteRepository;

/// Relays the upstream listing's first page verbatim. Every HTML route
/// shares the same repository, so this endpoint is the one public JSON
/// surface rather than a bypassed side door.
#[get("/v1/characters")]
pub async fn api_v1_characters(repo: web::Data<RemoteRepository>) -> impl Responder {
    match repo.fetch_listing_raw().await {
        Ok(body) => HttpResponse::Ok().content_type(ContentType::json()).body(body),
        Err(err) => {
            log::error!("Failed to relay the character listing: {err}");
            HttpResponse::InternalServerError().json(json!({
                "message": "Failed to get characters"
            }))
        }
    }
}
