use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::Claims;
use crate::error::AppError;

/// The verified identity of the caller, read from request extensions.
///
/// Only routes behind `AuthMiddleware` carry verified claims. Extracting it anywhere
/// else fails with `AppError::Unauthorized`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AuthenticatedUser {
                email: claims.email.clone(),
            })),
            None => {
                log::warn!("no verified claims on {}; is AuthMiddleware applied?", req.path());
                ready(Err(AppError::Unauthorized("Unauthorized user".into()).into()))
            }
        }
    }
}
