use sea_orm::ConnectionTrait;

use crate::error::AppError;
use crate::repos::{authors as authors_repo, posts as posts_repo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostCounts {
    pub total_posts: u64,
    pub total_authors: u64,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StatsService;

impl StatsService {
    /// Row counts of both tables. Zero is a valid answer.
    pub async fn counts<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<PostCounts, AppError> {
        let total_posts = posts_repo::count_posts(conn).await?;
        let total_authors = authors_repo::count_authors(conn).await?;
        Ok(PostCounts {
            total_posts,
            total_authors,
        })
    }
}
