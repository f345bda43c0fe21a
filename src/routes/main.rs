use actix_web::{Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;
use validator::Validate;

use crate::domain::character::{CharacterGender, CharacterStatus};
use crate::domain::view::PAGE_SIZES;
use crate::forms::filters::FilterForm;
use crate::models::config::ServerConfig;
use crate::pagination::Paginated;
use crate::repository::catalog::CharacterCatalog;
use crate::repository::remote::RemoteRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::catalog as catalog_service;

#[get("/")]
pub async fn show_index(
    params: web::Query<FilterForm>,
    repo: web::Data<RemoteRepository>,
    catalog: web::Data<CharacterCatalog>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form = params.into_inner();

    if let Err(err) = form.validate() {
        log::error!("Failed to validate the filter form: {err}");
        FlashMessage::error("Invalid filter input.").send();
        return redirect("/");
    }

    if catalog.is_empty() {
        catalog_service::refresh(repo.get_ref(), &catalog, server_config.max_fetch_pages).await;
    }

    let criteria = form.criteria();
    let view = form.view_state();
    let roster = catalog_service::roster_page(&catalog.snapshot(), &criteria, &view);

    if roster.total == 0 && criteria.is_active() {
        // One alert per empty-result episode, then back to the full list.
        if catalog.fire_empty_alert() {
            FlashMessage::error("No characters found matching the filters.").send();
            catalog_service::refresh(repo.get_ref(), &catalog, server_config.max_fetch_pages)
                .await;
            return redirect("/");
        }
    } else if roster.total > 0 {
        catalog.rearm_empty_alert();
    }

    let total_pages = roster.total_pages.max(1);
    let characters = Paginated::new(roster.characters, roster.page, roster.total_pages);

    let mut context = base_context(&flash_messages, "index");
    context.insert("characters", &characters);
    context.insert("total", &roster.total);
    context.insert("total_pages", &total_pages);
    context.insert("filters", &form);
    context.insert("base_query", &form.base_query());
    context.insert("sort", view.sort.as_param());
    context.insert("per_page", &view.per_page);
    context.insert("page_sizes", &PAGE_SIZES);
    context.insert("statuses", &CharacterStatus::ALL);
    context.insert("genders", &CharacterGender::ALL);

    render_template(&tera, "main/index.html", &context)
}
