use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use crate::models::Envelope;

/// Liveness probe. Public, and does not touch the store.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(Envelope::ok(json!({
        "status": "ok",
        "timestamp": Utc::now()
    })))
}
