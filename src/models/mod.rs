pub mod book;
pub mod user;

pub use book::{Book, BookUpdate, NewBook};
pub use user::{Credentials, User};
