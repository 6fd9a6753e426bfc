pub mod auth;
pub mod health;
pub mod tasks;

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::models::Envelope;

/// Registers every route. Each task route carries its own `AuthMiddleware`, so
/// unknown paths fall through to a 404 instead of the session check.
///
/// The app must also carry `web::Data<AppState>`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health::health)
        .service(auth::signup)
        .service(auth::login)
        .service(auth::logout)
        .service(tasks::add_task)
        .service(tasks::list_tasks)
        .service(tasks::get_task)
        .service(tasks::update_task)
        .service(tasks::delete_task)
        .service(tasks::delete_tasks)
        .default_service(web::to(not_found));
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(Envelope::failure("Not found"))
}

/// Unreadable JSON bodies are answered in the envelope format.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        AppError::BadRequest(format!("Invalid request body: {}", err)).into()
    })
}
