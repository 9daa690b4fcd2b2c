//! Entity factories for creating test data.
//!
//! Each factory creates one entity with sensible defaults that can be
//! overridden through a builder pattern, reducing boilerplate in tests.

pub mod comment;
pub mod helpers;
pub mod user;
pub mod video;
