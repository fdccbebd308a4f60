use anyhow::Result;
use sqlx::{Pool, Sqlite, migrate::MigrateDatabase, sqlite::SqlitePoolOptions};
use std::time::Duration;

pub mod book_store;
pub mod tables;
pub mod user_store;

pub use book_store::{BookFilter, BookStore};
pub use user_store::{UserFilter, UserStore};

use tables::{BookTable, UserTable};

pub type DbPool = Pool<Sqlite>;

/// Initialize the database connection pool
pub async fn init_db_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    // Create the database if it doesn't exist
    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        Sqlite::create_database(database_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await?;

    setup_database(&pool).await?;

    Ok(pool)
}

/// Create both tables if they are missing
async fn setup_database(pool: &DbPool) -> Result<()> {
    sqlx::query(&UserTable::create_table())
        .execute(pool)
        .await?;

    sqlx::query(&BookTable::create_table())
        .execute(pool)
        .await?;

    tracing::debug!("Database schema ready");

    Ok(())
}
