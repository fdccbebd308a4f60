use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::{
    db::{UserFilter, UserStore},
    error::{AppError, Result},
    models::user::{Credentials, User},
};

/// Registration and password verification on top of the user store
#[derive(Clone)]
pub struct AuthService {
    user_store: UserStore,
}

impl AuthService {
    pub fn new(user_store: UserStore) -> Self {
        Self { user_store }
    }

    /// Hash the password and store a new user.
    ///
    /// Fails with `UsernameTaken` if the name is already in use.
    pub async fn register(&self, credentials: Credentials) -> Result<User> {
        let Credentials { username, password } = credentials;
        let password_hash = run_blocking(move || hash_password(&password)).await??;

        self.user_store.insert(&username, &password_hash).await
    }

    /// Check a username/password pair against the stored hash.
    ///
    /// An unknown username and a wrong password both yield `Ok(false)`.
    pub async fn verify(&self, credentials: Credentials) -> Result<bool> {
        let Some(user) = self
            .user_store
            .find_one(UserFilter::Username(credentials.username))
            .await?
        else {
            return Ok(false);
        };

        let user_id = user.id;
        let password = credentials.password;
        let verified = run_blocking(move || verify_password(&password, &user.password)).await?;

        if !verified {
            tracing::debug!(user_id, "Password mismatch");
        }

        Ok(verified)
    }
}

/// Run CPU-bound hashing work on the blocking thread pool
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(format!("Hashing task failed: {e}")))
}

/// Hash a password using Argon2id with a fresh random salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {e}")))
}

/// Verify a password against a stored PHC hash string.
///
/// A stored value that is not a valid PHC string never verifies.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored password hash is malformed: {}", e);
            false
        }
    }
}
