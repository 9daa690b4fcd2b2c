use crate::{config::Config, error::AppError, service::upload::UploadStore};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the first request.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the upload store and its backing directory.
///
/// The directory doubles as the static file root served at `/public`, so it
/// must exist before the router is built.
pub async fn setup_upload_store(config: &Config) -> Result<UploadStore, AppError> {
    let store = UploadStore::new(&config.upload_dir);
    store.ensure_dir().await?;

    Ok(store)
}
