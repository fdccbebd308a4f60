use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database book review model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub review: String,
    pub recommend: bool,
    pub user_id: i64,
}

/// Request body for `/book/add`
#[derive(Debug, Clone, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub review: String,
    pub recommend: bool,
    pub user_id: i64,
}

/// Partial update for an existing book.
///
/// Only fields present in the request body are written; an absent field and
/// an explicit `null` both leave the stored value alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub review: Option<String>,
    pub recommend: Option<bool>,
}

impl BookUpdate {
    /// Overwrite the fields of `book` that this update carries
    pub fn apply(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(review) = self.review {
            book.review = review;
        }
        if let Some(recommend) = self.recommend {
            book.recommend = recommend;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.review.is_none()
            && self.recommend.is_none()
    }
}
