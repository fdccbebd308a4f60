use axum::{
    Json, Router,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{AppState, book, user};

/// Build the application router with all user and book routes
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(user_routes())
        .merge(book_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/add", post(user::add_user))
        .route("/user/verify", post(user::verify_user))
        .route("/user/get", get(user::get_all_users))
        .route("/user/get/{id}", get(user::get_user_by_id))
        .route("/user/get/username/{username}", get(user::get_user_by_username))
}

fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/book/add", post(book::add_book))
        .route("/book/get", get(book::get_all_books))
        .route("/book/get/{id}", get(book::get_book_by_id))
        .route("/book/get/user/{user_id}", get(book::get_books_by_user))
        .route("/book/update/{id}", put(book::update_book))
        .route("/book/delete/{id}", delete(book::delete_book))
}

/// Liveness check; does not touch the database
async fn health() -> Json<&'static str> {
    Json("ok")
}
