//! Liveness endpoint for the console host.
//!
//! The domain API (volunteers, training, awards, documents) is served by a
//! separate collaborator mounted behind the same origin; this host only
//! delivers the SPA bundle, so the health document is all it answers under
//! `/api` itself.

use actix_web::web::{get, scope};
use actix_web::{HttpResponse, Responder, Scope};

const API_PATH: &str = "/api/health";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

async fn process() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
