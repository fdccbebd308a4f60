use sqlx::{Sqlite, query::QueryAs, sqlite::SqliteArguments};

use crate::{
    db::{DbPool, tables::UserTable},
    error::{AppError, Result},
    models::user::User,
};

/// Single-column equality filter for user lookups
#[derive(Debug, Clone)]
pub enum UserFilter {
    Id(i64),
    Username(String),
}

impl UserFilter {
    fn column(&self) -> &'static str {
        match self {
            UserFilter::Id(_) => UserTable::COLUMN_ID,
            UserFilter::Username(_) => UserTable::COLUMN_USERNAME,
        }
    }

    fn bind<'q, O>(
        self,
        query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    ) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
        match self {
            UserFilter::Id(id) => query.bind(id),
            UserFilter::Username(username) => query.bind(username),
        }
    }
}

/// User store for database operations
#[derive(Clone)]
pub struct UserStore {
    pool: DbPool,
}

impl UserStore {
    /// Create a new UserStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a user whose password is already hashed.
    ///
    /// The UNIQUE constraint on `username` is what rejects duplicates, so two
    /// concurrent inserts of the same name cannot both succeed.
    pub async fn insert(&self, username: &str, password_hash: &str) -> Result<User> {
        let query = format!(
            "INSERT INTO {} ({}, {}) VALUES (?, ?)",
            UserTable::TABLE_NAME,
            UserTable::COLUMN_USERNAME,
            UserTable::COLUMN_PASSWORD,
        );

        let result = sqlx::query(&query)
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    AppError::UsernameTaken
                }
                e => AppError::Database(e),
            })?;

        let user = User {
            id: result.last_insert_rowid(),
            username: username.to_string(),
            password: password_hash.to_string(),
        };
        tracing::info!(user_id = user.id, "Inserted user {}", user.username);

        Ok(user)
    }

    /// Get the first user matching the filter
    pub async fn find_one(&self, filter: UserFilter) -> Result<Option<User>> {
        let query = format!(
            "SELECT * FROM {} WHERE {} = ? ORDER BY {} LIMIT 1",
            UserTable::TABLE_NAME,
            filter.column(),
            UserTable::COLUMN_ID,
        );

        let user = filter
            .bind(sqlx::query_as::<_, User>(&query))
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(user)
    }

    /// Get all users matching the filter, or every user if there is none
    pub async fn find_all(&self, filter: Option<UserFilter>) -> Result<Vec<User>> {
        let users = match filter {
            Some(filter) => {
                let query = format!(
                    "SELECT * FROM {} WHERE {} = ? ORDER BY {}",
                    UserTable::TABLE_NAME,
                    filter.column(),
                    UserTable::COLUMN_ID,
                );
                filter
                    .bind(sqlx::query_as::<_, User>(&query))
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT * FROM {} ORDER BY {}",
                    UserTable::TABLE_NAME,
                    UserTable::COLUMN_ID,
                );
                sqlx::query_as::<_, User>(&query)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(AppError::Database)?;

        Ok(users)
    }

    /// Number of stored users
    pub async fn count(&self) -> Result<i64> {
        let query = format!("SELECT COUNT(*) FROM {}", UserTable::TABLE_NAME);
        let count: (i64,) = sqlx::query_as(&query)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(count.0)
    }
}
