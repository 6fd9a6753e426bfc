use crate::{
    auth::password::{hash_password_blocking, verify_password_blocking},
    error::AppError,
    models::{Credentials, Envelope},
    state::AppState,
};
use actix_web::{get, post, web, HttpResponse, Responder};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Register a new user
///
/// Stores a salted hash of the password, then sets the session cookie.
/// An email that is already registered is rejected with 409 and no cookie.
#[post("/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<Credentials>,
) -> Result<impl Responder, AppError> {
    let (email, password) = body.into_inner().into_parts()?;

    // Cheap early exit; `create` still enforces uniqueness atomically.
    if state.users.find_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict("User already exists".into()));
    }

    let password_hash = hash_password_blocking(password, state.bcrypt_cost).await?;
    state.users.create(&email, &password_hash).await?;

    let token = state.tokens.issue(&email)?;
    log::info!("registered {}", email);

    Ok(HttpResponse::Ok()
        .cookie(state.session.cookie(token))
        .json(Envelope::message("signup successful")))
}

/// Login user
///
/// Unknown email and wrong password produce the same 401 response.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<Credentials>,
) -> Result<impl Responder, AppError> {
    let (email, password) = body.into_inner().into_parts()?;

    let Some(user) = state.users.find_by_email(&email).await? else {
        log::debug!("login for unknown account");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    };

    if !verify_password_blocking(password, user.password_hash).await? {
        log::debug!("login with wrong password for {}", user.email);
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    let token = state.tokens.issue(&user.email)?;
    Ok(HttpResponse::Ok()
        .cookie(state.session.cookie(token))
        .json(Envelope::message("login successful")))
}

/// Logout user
///
/// Tokens are stateless, so this only tells the client to drop its cookie.
#[get("/logout")]
pub async fn logout(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .cookie(state.session.removal_cookie())
        .json(Envelope::message("logout successful"))
}
