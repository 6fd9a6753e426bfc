#![doc = "The `taskvault` library crate."]
#![doc = ""]
#![doc = "Account signup/login with cookie-carried JWT sessions, and CRUD over a single"]
#![doc = "task collection behind that session gate. The binary (`main.rs`) loads `Config`,"]
#![doc = "connects an `AppState` and serves `routes::config`."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use crate::error::AppError;
pub use crate::state::AppState;
