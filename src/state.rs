//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through axum's state extraction. All fields are cheap to
//! clone: `DatabaseConnection` is a pooled handle, `TokenService` holds
//! derived keys, `UploadStore` holds a path.

use sea_orm::DatabaseConnection;

use crate::service::{token::TokenService, upload::UploadStore};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies access tokens with the configured secret.
    pub tokens: TokenService,

    /// Persists uploaded video files under the configured directory.
    pub uploads: UploadStore,
}
