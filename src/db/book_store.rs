use sqlx::{Sqlite, query::QueryAs, sqlite::SqliteArguments};

use crate::{
    db::{DbPool, tables::BookTable},
    error::{AppError, Result},
    models::book::{Book, NewBook},
};

/// Single-column equality filter for book lookups
#[derive(Debug, Clone)]
pub enum BookFilter {
    Id(i64),
    UserId(i64),
    Title(String),
    Author(String),
    Recommend(bool),
}

impl BookFilter {
    fn column(&self) -> &'static str {
        match self {
            BookFilter::Id(_) => BookTable::COLUMN_ID,
            BookFilter::UserId(_) => BookTable::COLUMN_USER_ID,
            BookFilter::Title(_) => BookTable::COLUMN_TITLE,
            BookFilter::Author(_) => BookTable::COLUMN_AUTHOR,
            BookFilter::Recommend(_) => BookTable::COLUMN_RECOMMEND,
        }
    }

    fn bind<'q, O>(
        self,
        query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    ) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
        match self {
            BookFilter::Id(id) | BookFilter::UserId(id) => query.bind(id),
            BookFilter::Title(text) | BookFilter::Author(text) => query.bind(text),
            BookFilter::Recommend(recommend) => query.bind(recommend),
        }
    }
}

/// Book store for database operations
#[derive(Clone)]
pub struct BookStore {
    pool: DbPool,
}

impl BookStore {
    /// Create a new BookStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a book review. `user_id` is stored as given.
    pub async fn insert(&self, book: NewBook) -> Result<Book> {
        let query = format!(
            "INSERT INTO {} ({}, {}, {}, {}, {}) VALUES (?, ?, ?, ?, ?)",
            BookTable::TABLE_NAME,
            BookTable::COLUMN_TITLE,
            BookTable::COLUMN_AUTHOR,
            BookTable::COLUMN_REVIEW,
            BookTable::COLUMN_RECOMMEND,
            BookTable::COLUMN_USER_ID,
        );

        let result = sqlx::query(&query)
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.review)
            .bind(book.recommend)
            .bind(book.user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let book = Book {
            id: result.last_insert_rowid(),
            title: book.title,
            author: book.author,
            review: book.review,
            recommend: book.recommend,
            user_id: book.user_id,
        };
        tracing::info!(book_id = book.id, user_id = book.user_id, "Inserted book");

        Ok(book)
    }

    /// Get the first book matching the filter
    pub async fn find_one(&self, filter: BookFilter) -> Result<Option<Book>> {
        let query = format!(
            "SELECT * FROM {} WHERE {} = ? ORDER BY {} LIMIT 1",
            BookTable::TABLE_NAME,
            filter.column(),
            BookTable::COLUMN_ID,
        );

        let book = filter
            .bind(sqlx::query_as::<_, Book>(&query))
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(book)
    }

    /// Get all books matching the filter, or every book if there is none
    pub async fn find_all(&self, filter: Option<BookFilter>) -> Result<Vec<Book>> {
        let books = match filter {
            Some(filter) => {
                let query = format!(
                    "SELECT * FROM {} WHERE {} = ? ORDER BY {}",
                    BookTable::TABLE_NAME,
                    filter.column(),
                    BookTable::COLUMN_ID,
                );
                filter
                    .bind(sqlx::query_as::<_, Book>(&query))
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT * FROM {} ORDER BY {}",
                    BookTable::TABLE_NAME,
                    BookTable::COLUMN_ID,
                );
                sqlx::query_as::<_, Book>(&query)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(AppError::Database)?;

        Ok(books)
    }

    /// Persist every column of an already loaded book
    pub async fn update(&self, book: &Book) -> Result<()> {
        let query = format!(
            "UPDATE {} SET {} = ?, {} = ?, {} = ?, {} = ?, {} = ? WHERE {} = ?",
            BookTable::TABLE_NAME,
            BookTable::COLUMN_TITLE,
            BookTable::COLUMN_AUTHOR,
            BookTable::COLUMN_REVIEW,
            BookTable::COLUMN_RECOMMEND,
            BookTable::COLUMN_USER_ID,
            BookTable::COLUMN_ID,
        );

        let result = sqlx::query(&query)
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.review)
            .bind(book.recommend)
            .bind(book.user_id)
            .bind(book.id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        // The row can vanish between load and update
        if result.rows_affected() == 0 {
            return Err(AppError::BookNotFound(book.id));
        }

        tracing::info!(book_id = book.id, "Updated book");
        Ok(())
    }

    /// Delete a loaded book
    pub async fn delete(&self, book: &Book) -> Result<()> {
        let query = format!(
            "DELETE FROM {} WHERE {} = ?",
            BookTable::TABLE_NAME,
            BookTable::COLUMN_ID,
        );

        let result = sqlx::query(&query)
            .bind(book.id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::BookNotFound(book.id));
        }

        tracing::info!(book_id = book.id, "Deleted book");
        Ok(())
    }
}
