//! HTTP handlers for the REST API.
//!
//! Handlers extract and validate request data, run the auth guard where the
//! endpoint requires it, call into the service layer, and convert domain
//! models to DTOs. All fallible paths return `AppError`, which maps itself to
//! a status code and `{"error": "..."}` body.

pub mod auth;
pub mod comment;
pub mod engagement;
pub mod user;
pub mod video;
pub mod watch_later;
