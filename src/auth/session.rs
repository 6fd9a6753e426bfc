use actix_web::cookie::{time, Cookie, SameSite};

pub const SESSION_COOKIE_NAME: &str = "token";

/// Cookie attributes shared by every session cookie the server sets.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Sets the `Secure` attribute. Only disable for plain-HTTP local development.
    pub secure: bool,
    /// Lifetime in seconds; mirrors the token ttl.
    pub max_age_secs: i64,
}

impl SessionSettings {
    /// Builds the http-only, cross-site session cookie carrying `token`.
    pub fn cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE_NAME, token)
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::None)
            .max_age(time::Duration::seconds(self.max_age_secs))
            .finish()
    }

    /// Builds a cookie that instructs the client to drop the session cookie.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE_NAME, "")
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::None)
            .finish();
        cookie.make_removal();
        cookie
    }
}
