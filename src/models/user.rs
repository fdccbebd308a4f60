use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database user model
///
/// `password` holds the Argon2 PHC string and is serialized as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// Username and plaintext password, as sent to `/user/add` and `/user/verify`
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
