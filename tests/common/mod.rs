//! In-process stand-in for the upstream trivia API.

use std::net::TcpListener;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use serde_json::{Value, json};

/// Page size the fake upstream serves, mirroring the real listing.
pub const UPSTREAM_PER_PAGE: usize = 20;

pub fn episode_name(id: usize) -> String {
    format!("Episode {id:02}")
}

/// Deterministic catalog entry. Ids cycle through the status, gender,
/// species, and episode-count combinations the tests rely on: every
/// `id % 3 == 0` character has no episodes, `id % 3 == 1` exactly one.
pub fn fixture_character(id: usize, base_url: &str) -> Value {
    let status = match id % 3 {
        0 => "unknown",
        1 => "Alive",
        _ => "Dead",
    };
    let gender = if id % 2 == 0 { "Female" } else { "Male" };
    let species = if id % 4 == 0 { "Alien" } else { "Human" };
    let kind = if id % 5 == 0 { "Parasite" } else { "" };
    let episode: Vec<String> = match id % 3 {
        0 => Vec::new(),
        1 => vec![format!("{base_url}/episode/{id}")],
        _ => vec![
            format!("{base_url}/episode/1"),
            format!("{base_url}/episode/{id}"),
        ],
    };

    json!({
        "id": id,
        "name": format!("Character {id:03}"),
        "status": status,
        "species": species,
        "type": kind,
        "gender": gender,
        "origin": {"name": "Earth (C-137)", "url": ""},
        "location": {"name": format!("Dimension {}", id % 7), "url": ""},
        "image": format!("{base_url}/avatar/{id}.jpeg"),
        "episode": episode,
        "url": "",
        "created": "2017-11-04T18:48:46.250Z"
    })
}

/// The listing payload the fake upstream serves for one page.
pub fn page_payload(count: usize, base_url: &str, page: usize) -> Value {
    let results: Vec<Value> = (1..=count)
        .skip((page - 1) * UPSTREAM_PER_PAGE)
        .take(UPSTREAM_PER_PAGE)
        .map(|id| fixture_character(id, base_url))
        .collect();

    json!({
        "info": {
            "count": count,
            "pages": count.div_ceil(UPSTREAM_PER_PAGE),
            "next": null,
            "prev": null
        },
        "results": results,
    })
}

#[derive(Clone)]
struct Upstream {
    count: usize,
    base_url: String,
    failing: bool,
}

#[derive(serde::Deserialize)]
struct PageQuery {
    page: Option<usize>,
}

#[get("/character")]
async fn list_characters(
    upstream: web::Data<Upstream>,
    query: web::Query<PageQuery>,
) -> impl Responder {
    if upstream.failing {
        return HttpResponse::InternalServerError().finish();
    }

    let page = query.page.unwrap_or(1);
    let pages = upstream.count.div_ceil(UPSTREAM_PER_PAGE);
    if page == 0 || page > pages {
        return HttpResponse::NotFound().json(json!({"error": "There is nothing here"}));
    }

    HttpResponse::Ok().json(page_payload(upstream.count, &upstream.base_url, page))
}

#[get("/episode/{episode_id}")]
async fn get_episode(
    upstream: web::Data<Upstream>,
    episode_id: web::Path<usize>,
) -> impl Responder {
    if upstream.failing {
        return HttpResponse::InternalServerError().finish();
    }

    let id = episode_id.into_inner();
    if id == 0 || id > upstream.count {
        return HttpResponse::NotFound().json(json!({"error": "Episode not found"}));
    }

    HttpResponse::Ok().json(json!({"id": id, "name": episode_name(id)}))
}

/// A fake upstream bound to an ephemeral local port.
pub struct MockApi {
    pub base_url: String,
    handle: ServerHandle,
}

impl MockApi {
    /// Serves `count` fixture characters plus their episodes.
    pub async fn start(count: usize) -> Self {
        Self::launch(count, false).await
    }

    /// Fails every request with a server error.
    pub async fn start_failing() -> Self {
        Self::launch(0, true).await
    }

    async fn launch(count: usize, failing: bool) -> Self {
        let listener = TcpListener::bind(("127.0.0.1", 0)).expect("failed to bind mock upstream");
        let base_url = format!(
            "http://{}",
            listener.local_addr().expect("mock upstream address")
        );

        let upstream = web::Data::new(Upstream {
            count,
            base_url: base_url.clone(),
            failing,
        });

        let server = HttpServer::new(move || {
            App::new()
                .app_data(upstream.clone())
                .service(list_characters)
                .service(get_episode)
        })
        .listen(listener)
        .expect("failed to listen on mock upstream")
        .workers(1)
        .run();

        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self { base_url, handle }
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}
