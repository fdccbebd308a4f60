use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Value, json};

use crate::{
    db::BookFilter,
    error::{AppError, Result},
    handlers::{AppState, JsonBody, JsonPath},
    models::book::{Book, BookUpdate, NewBook},
};

/// Add a book review. The user id is not checked against the users table.
pub async fn add_book(
    State(state): State<AppState>,
    JsonBody(book): JsonBody<NewBook>,
) -> Result<impl IntoResponse> {
    state.book_store.insert(book).await?;
    Ok((StatusCode::OK, Json("Book Added")))
}

pub async fn get_all_books(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let books = state.book_store.find_all(None).await?;
    Ok((StatusCode::OK, Json(books)))
}

/// Get book by ID handler; an unknown id yields `{}`
pub async fn get_book_by_id(
    State(state): State<AppState>,
    JsonPath(id): JsonPath<i64>,
) -> Result<impl IntoResponse> {
    let book = state.book_store.find_one(BookFilter::Id(id)).await?;
    let body: Value = match book {
        Some(book) => serde_json::to_value(book).map_err(AppError::Json)?,
        None => json!({}),
    };
    Ok((StatusCode::OK, Json(body)))
}

pub async fn get_books_by_user(
    State(state): State<AppState>,
    JsonPath(user_id): JsonPath<i64>,
) -> Result<impl IntoResponse> {
    let books = state
        .book_store
        .find_all(Some(BookFilter::UserId(user_id)))
        .await?;
    Ok((StatusCode::OK, Json(books)))
}

/// Apply a partial update to an existing book
pub async fn update_book(
    State(state): State<AppState>,
    JsonPath(id): JsonPath<i64>,
    JsonBody(update): JsonBody<BookUpdate>,
) -> Result<impl IntoResponse> {
    let mut book = load_book(&state, id).await?;

    if update.is_empty() {
        tracing::debug!(book_id = id, "Update carries no fields");
    } else {
        update.apply(&mut book);
        state.book_store.update(&book).await?;
    }

    Ok((StatusCode::OK, Json("Book Updated")))
}

/// Delete book handler
pub async fn delete_book(
    State(state): State<AppState>,
    JsonPath(id): JsonPath<i64>,
) -> Result<impl IntoResponse> {
    let book = load_book(&state, id).await?;
    state.book_store.delete(&book).await?;

    Ok((StatusCode::OK, Json("Book Deleted")))
}

async fn load_book(state: &AppState, id: i64) -> Result<Book> {
    state
        .book_store
        .find_one(BookFilter::Id(id))
        .await?
        .ok_or(AppError::BookNotFound(id))
}
