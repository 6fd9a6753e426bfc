#![allow(dead_code)]

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web};
use serde_json::json;
use taskvault::config::Config;
use taskvault::store::MemoryStore;
use taskvault::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_EMAIL: &str = "a@x.com";
pub const TEST_PASSWORD: &str = "pw1";

/// Memory store, cheap bcrypt, plain-HTTP cookies.
pub fn test_config() -> Config {
    Config::from_lookup(|key| {
        let value = match key {
            "DATABASE_URL" => "memory",
            "JWT_SECRET" => TEST_SECRET,
            "BCRYPT_COST" => "4",
            "COOKIE_SECURE" => "false",
            _ => return None,
        };
        Some(value.to_string())
    })
    .expect("test configuration is valid")
}

/// Returns the store alongside the state so tests can inspect it directly.
pub fn test_state() -> (Arc<MemoryStore>, web::Data<AppState>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), &test_config()).expect("state builds");
    (store, web::Data::new(state))
}

/// Pulls the session cookie out of a response, if one was set.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|cookie| cookie.name() == "token")
        .map(|cookie| cookie.into_owned())
}

/// Signs a user up and returns the session cookie the server set.
pub async fn signup_user(
    app: &impl Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    >,
    email: &str,
    password: &str,
) -> Cookie<'static> {
    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert!(
        resp.status().is_success(),
        "signup failed with {}",
        resp.status()
    );
    session_cookie(&resp).expect("signup sets the session cookie")
}
