//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for use in generating unique
/// test identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a video together with its owning user.
///
/// Convenience method for tests that need a video but don't care about the
/// owner's details.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, video))` - Tuple of the created owner and video
/// - `Err(DbErr)` - Database error during creation
pub async fn create_video_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::video::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let video = crate::factory::video::create_video(db, user.id).await?;

    Ok((user, video))
}
