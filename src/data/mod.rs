//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and
//! return domain models to maintain separation between the data layer and business
//! logic layer. All database queries and inserts are performed through these
//! repositories.

pub mod comment;
pub mod engagement;
pub mod subscription;
pub mod user;
pub mod video;
pub mod watch_later;

#[cfg(test)]
mod test;
