use crate::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Represents the claims encoded within a session JWT.
///
/// Only the account email is embedded; the password never enters a token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Email of the authenticated account.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Issues and verifies HS256 session tokens.
///
/// Built once from configuration and shared through the application state, so the
/// secret is never re-read from the environment on the request path.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Creates a service signing with `secret` and issuing tokens valid for `ttl`.
    ///
    /// Returns `AppError::Configuration` if the secret is empty or the ttl is not positive.
    pub fn new(secret: &str, ttl: Duration) -> Result<Self, AppError> {
        if secret.is_empty() {
            return Err(AppError::Configuration("JWT secret must not be empty".into()));
        }
        if ttl <= Duration::zero() {
            return Err(AppError::Configuration("token ttl must be positive".into()));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: a token is dead the second after `exp`.
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Generates a token for `email`, expiring `ttl` from now.
    pub fn issue(&self, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now.checked_add_signed(self.ttl).ok_or_else(|| {
            AppError::InternalServerError("token expiry is out of range".into())
        })?;
        let claims = Claims {
            email: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };
        self.sign(&claims)
    }

    /// Signs an arbitrary claim set with this service's key.
    pub fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
    }

    /// Verifies a token string and decodes its claims.
    ///
    /// Returns `AppError::Unauthorized` if the token is malformed, its signature is
    /// invalid, or it has expired.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {:?}", e.kind())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str) -> TokenService {
        TokenService::new(secret, Duration::days(5)).unwrap()
    }

    #[test]
    fn test_token_generation_and_verification() {
        let tokens = service("test_secret_for_gen_verify");
        let token = tokens.issue("a@x.com").unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.exp - claims.iat, Duration::days(5).num_seconds());
    }

    #[test]
    fn test_token_expiration() {
        let tokens = service("test_secret_for_expiration");
        let now = Utc::now();
        let expired = Claims {
            email: "a@x.com".into(),
            iat: (now - Duration::days(6)).timestamp(),
            exp: (now - Duration::seconds(5)).timestamp(),
        };
        let expired_token = tokens.sign(&expired).unwrap();

        match tokens.verify(&expired_token) {
            Err(AppError::Unauthorized(msg)) => assert!(msg.contains("ExpiredSignature")),
            Ok(_) => panic!("Token should have been invalid due to expiration"),
            Err(e) => panic!("Unexpected error type for expired token: {:?}", e),
        }
    }

    #[test]
    fn test_invalid_token_signature() {
        let token = service("signing_secret").issue("a@x.com").unwrap();

        match service("a_completely_different_secret").verify(&token) {
            Err(AppError::Unauthorized(msg)) => assert!(msg.contains("InvalidSignature")),
            Ok(_) => panic!("Token should have been invalid due to signature mismatch"),
            Err(e) => panic!("Unexpected error type for invalid signature: {:?}", e),
        }
    }

    #[test]
    fn test_malformed_token() {
        let tokens = service("secret");
        assert!(matches!(
            tokens.verify("not.a.jwt"),
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(tokens.verify(""), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_issue_with_unrepresentable_expiry() {
        let tokens = TokenService::new("secret", Duration::days(100_000_000)).unwrap();
        assert!(matches!(
            tokens.issue("a@x.com"),
            Err(AppError::InternalServerError(_))
        ));
    }

    #[test]
    fn test_rejects_unusable_configuration() {
        assert!(matches!(
            TokenService::new("", Duration::days(5)),
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            TokenService::new("secret", Duration::zero()),
            Err(AppError::Configuration(_))
        ));
    }
}
