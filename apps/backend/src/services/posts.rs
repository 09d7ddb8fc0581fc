use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use super::authors::{AUTHOR_NOT_FOUND, NO_DATA_FOUND};
use super::provided;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::authors as authors_repo;
use crate::repos::posts::{self as posts_repo, Post, PostWithAuthor};

pub const POST_FIELDS_REQUIRED: &str = "Title, content, and author_id are required";
pub const POST_CHANGES_REQUIRED: &str = "At least one of title or content must be provided";
pub const POST_NOT_FOUND: &str = "Post not found";

/// Raw post fields as received from a client.
#[derive(Debug, Clone, Default)]
pub struct PostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<i64>,
}

/// Fields a client may change on an existing post.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

fn post_not_found() -> DomainError {
    DomainError::not_found(NotFoundKind::Post, POST_NOT_FOUND)
}

fn author_not_found() -> DomainError {
    DomainError::not_found(NotFoundKind::Author, AUTHOR_NOT_FOUND)
}

/// Post domain service.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostService;

impl PostService {
    /// All posts, newest first. No rows is reported as an empty collection.
    pub async fn list_posts<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Post>, AppError> {
        let posts = posts_repo::list_posts(conn).await?;
        if posts.is_empty() {
            return Err(AppError::empty_collection(NO_DATA_FOUND));
        }
        debug!(count = posts.len(), "posts.listed");
        Ok(posts)
    }

    pub async fn get_post<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        post_id: i64,
    ) -> Result<PostWithAuthor, AppError> {
        let post = posts_repo::find_with_author(conn, post_id)
            .await?
            .ok_or_else(post_not_found)?;
        Ok(post)
    }

    /// Validate, check the author exists, insert. Returns the new post id.
    pub async fn create_post<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        input: &PostInput,
    ) -> Result<i64, AppError> {
        let (Some(title), Some(content), Some(author_id)) = (
            provided(input.title.as_deref()),
            provided(input.content.as_deref()),
            input.author_id.filter(|id| *id != 0),
        ) else {
            return Err(DomainError::validation(POST_FIELDS_REQUIRED).into());
        };

        if authors_repo::find_by_id(conn, author_id).await?.is_none() {
            return Err(author_not_found().into());
        }

        let post_id = posts_repo::create_post(conn, title, content, author_id).await?;
        info!(post_id, author_id, "post.created");
        Ok(post_id)
    }

    /// Apply the supplied, non-empty fields of `changes` to an existing post.
    /// Validation runs before the existence check.
    pub async fn update_post<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        post_id: i64,
        changes: &PostChanges,
    ) -> Result<(), AppError> {
        let title = provided(changes.title.as_deref());
        let content = provided(changes.content.as_deref());
        if title.is_none() && content.is_none() {
            return Err(DomainError::validation(POST_CHANGES_REQUIRED).into());
        }

        if !posts_repo::exists(conn, post_id).await? {
            return Err(post_not_found().into());
        }

        posts_repo::update_post(conn, post_id, title, content).await?;
        info!(
            post_id,
            title_changed = title.is_some(),
            content_changed = content.is_some(),
            "post.updated"
        );
        Ok(())
    }

    pub async fn delete_post<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        post_id: i64,
    ) -> Result<(), AppError> {
        if !posts_repo::delete_post(conn, post_id).await? {
            return Err(post_not_found().into());
        }
        info!(post_id, "post.deleted");
        Ok(())
    }

    /// All posts of an existing author, newest first; possibly empty.
    pub async fn list_posts_by_author<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        author_id: i64,
    ) -> Result<Vec<Post>, AppError> {
        if authors_repo::find_by_id(conn, author_id).await?.is_none() {
            return Err(author_not_found().into());
        }
        Ok(posts_repo::list_by_author(conn, author_id).await?)
    }
}
