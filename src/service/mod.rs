//! Business logic layer between controllers and repositories.
//!
//! Services own the rules the HTTP layer shouldn't care about: password
//! hashing, token issuance, upload key generation, target-existence checks,
//! and profile graph assembly. They work with domain models and return
//! `AppError` for the controllers to convert into responses.

pub mod auth;
pub mod comment;
pub mod engagement;
pub mod token;
pub mod upload;
pub mod user;
pub mod video;
pub mod watch_later;
