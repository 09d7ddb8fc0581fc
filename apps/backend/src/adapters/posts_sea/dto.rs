//! DTOs for posts_sea adapter.

use sea_orm::FromQueryResult;

/// DTO for creating a new post. `created_at` is left to the database default.
#[derive(Debug, Clone)]
pub struct PostCreate {
    pub title: String,
    pub content: String,
    pub author_id: i64,
}

/// DTO for a partial post update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Projection of a post without its author id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct PostSummaryRow {
    pub id: i64,
    pub title: String,
    pub content: String,
}
