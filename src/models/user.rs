use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered account as held by the credential store.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for both `/signup` and `/login`.
///
/// Fields are optional so that an absent field reaches validation and is answered
/// with the envelope instead of a deserialization error.
#[derive(Debug, Deserialize, Validate)]
pub struct Credentials {
    #[serde(alias = "identifier")]
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[serde(alias = "credential")]
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

impl Credentials {
    /// Validates presence and splits into `(email, password)`.
    pub fn into_parts(self) -> Result<(String, String), crate::error::AppError> {
        self.validate()?;
        match (self.email, self.password) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(crate::error::AppError::ValidationError(
                "Missing required fields: email, password".into(),
            )),
        }
    }
}
