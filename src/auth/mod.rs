pub mod extractors;
pub mod middleware;
pub mod password;
pub mod session;
pub mod token;

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use session::{SessionSettings, SESSION_COOKIE_NAME};
pub use token::{Claims, TokenService};
