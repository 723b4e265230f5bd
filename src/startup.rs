use crate::{config::Config, error::AppError};

/// Opens the database connection pool and brings the schema up to date.
///
/// Pending SeaORM migrations run before the connection is handed out, so
/// callers always see the current schema. The application cannot serve
/// requests until this completes.
///
/// # Arguments
/// - `config` - Application configuration carrying the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Pool with every migration applied
/// - `Err(AppError)` - Connection or migration failure
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut options = ConnectOptions::new(&config.database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;

    Migrator::up(&db, None).await?;
    tracing::debug!("database schema is up to date");

    Ok(db)
}
