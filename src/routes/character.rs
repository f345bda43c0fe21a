use actix_web::{Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::repository::catalog::CharacterCatalog;
use crate::repository::remote::RemoteRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::catalog as catalog_service;
use crate::services::detail as detail_service;

#[get("/character/{character_id}")]
pub async fn show_character(
    character_id: web::Path<u64>,
    repo: web::Data<RemoteRepository>,
    catalog: web::Data<CharacterCatalog>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    // Deep links may arrive before the index populated the catalog.
    if catalog.is_empty() {
        catalog_service::refresh(repo.get_ref(), &catalog, server_config.max_fetch_pages).await;
    }

    let character = match catalog_service::find_character(&catalog, character_id.into_inner()) {
        Ok(character) => character,
        Err(_) => {
            FlashMessage::error("Character not found.").send();
            return redirect("/");
        }
    };

    let detail = detail_service::character_detail(repo.get_ref(), character).await;

    let mut context = base_context(&flash_messages, "character");
    context.insert("character", &detail);

    render_template(&tera, "character/show.html", &context)
}
