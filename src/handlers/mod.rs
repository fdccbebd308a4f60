pub mod book;
pub mod extract;
pub mod user;

use crate::{
    db::{BookStore, DbPool, UserStore},
    services::AuthService,
};

pub use extract::{JsonBody, JsonPath};

/// Shared state for all handlers, built once from the connection pool
#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStore,
    pub book_store: BookStore,
    pub auth_service: AuthService,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        let user_store = UserStore::new(pool.clone());
        let book_store = BookStore::new(pool);
        let auth_service = AuthService::new(user_store.clone());

        Self {
            user_store,
            book_store,
            auth_service,
        }
    }
}
