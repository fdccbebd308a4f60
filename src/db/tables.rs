/// Provides constants and utilities for working with
/// the "users" database table.
pub struct UserTable;

impl UserTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "users";

    /// The column name for the primary key identifier of a user.
    pub const COLUMN_ID: &'static str = "id";

    /// The column name for the login name. Unique across all users.
    pub const COLUMN_USERNAME: &'static str = "username";

    /// The column name for the Argon2 password hash.
    pub const COLUMN_PASSWORD: &'static str = "password";

    /// SQL statement for creating the users table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT,
                {} TEXT NOT NULL UNIQUE,
                {} TEXT NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_USERNAME,
            Self::COLUMN_PASSWORD,
        )
    }
}

/// Provides constants and utilities for working with
/// the "books" database table.
pub struct BookTable;

impl BookTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "books";

    /// The column name for the primary key identifier of a book.
    pub const COLUMN_ID: &'static str = "id";

    pub const COLUMN_TITLE: &'static str = "title";

    pub const COLUMN_AUTHOR: &'static str = "author";

    /// The column name for the free-text review.
    pub const COLUMN_REVIEW: &'static str = "review";

    pub const COLUMN_RECOMMEND: &'static str = "recommend";

    /// The column name for the id of the user that wrote the review.
    /// Not a foreign key: books may point at users that do not exist.
    pub const COLUMN_USER_ID: &'static str = "user_id";

    /// SQL statement for creating the books table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} BOOLEAN NOT NULL,
                {} INTEGER NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_TITLE,
            Self::COLUMN_AUTHOR,
            Self::COLUMN_REVIEW,
            Self::COLUMN_RECOMMEND,
            Self::COLUMN_USER_ID,
        )
    }
}
