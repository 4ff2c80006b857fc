//! Development user registry
//!
//! Serves the signup contract the web client talks to:
//! - In-memory accounts with unique usernames and emails
//! - bcrypt password hashing
//! - REST endpoint `POST /api/users/signup`

pub mod api;
pub mod service;

pub use api::users_api_router;
pub use service::{UserError, UserResponse, UserService};
