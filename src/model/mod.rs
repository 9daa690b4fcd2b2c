//! Domain models, request/response DTOs, and operation parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! (`from_entity`) and into DTOs at the controller boundary (`into_dto`), so
//! entity types never leak into HTTP responses and password hashes never leave
//! the domain layer.

pub mod api;
pub mod comment;
pub mod engagement;
pub mod user;
pub mod video;
pub mod watch_later;
