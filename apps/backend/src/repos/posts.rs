//! Post repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::posts_sea::{self as posts_adapter, PostCreate, PostSummaryRow, PostUpdate};
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Post domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: OffsetDateTime,
}

/// Post projected to id, title and content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// The author fields exposed alongside a single post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostAuthor {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: PostAuthor,
}

pub async fn list_posts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Post>, DomainError> {
    let rows = posts_adapter::list_posts(conn).await?;
    Ok(rows.into_iter().map(Post::from).collect())
}

pub async fn list_by_author<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author_id: i64,
) -> Result<Vec<Post>, DomainError> {
    let rows = posts_adapter::list_by_author(conn, author_id).await?;
    Ok(rows.into_iter().map(Post::from).collect())
}

pub async fn list_summaries_by_author<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author_id: i64,
) -> Result<Vec<PostSummary>, DomainError> {
    let rows = posts_adapter::list_summaries_by_author(conn, author_id).await?;
    Ok(rows.into_iter().map(PostSummary::from).collect())
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<bool, DomainError> {
    Ok(posts_adapter::find_by_id(conn, post_id).await?.is_some())
}

pub async fn find_with_author<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<Option<PostWithAuthor>, DomainError> {
    match posts_adapter::find_with_author(conn, post_id).await? {
        None => Ok(None),
        Some((post, Some(author))) => Ok(Some(PostWithAuthor {
            post: Post::from(post),
            author: PostAuthor {
                id: author.id,
                name: author.name,
                email: author.email,
            },
        })),
        // The foreign key makes a post without an author unrepresentable.
        Some((post, None)) => Err(DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("Post {} references a missing author", post.id),
        )),
    }
}

pub async fn create_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
    content: &str,
    author_id: i64,
) -> Result<i64, DomainError> {
    let dto = PostCreate {
        title: title.to_string(),
        content: content.to_string(),
        author_id,
    };
    Ok(posts_adapter::create_post(conn, dto).await?)
}

/// Returns true if a row was updated.
pub async fn update_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<bool, DomainError> {
    let dto = PostUpdate {
        id: post_id,
        title: title.map(str::to_string),
        content: content.map(str::to_string),
    };
    Ok(posts_adapter::update_post(conn, dto).await? > 0)
}

/// Returns true if a row was deleted.
pub async fn delete_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<bool, DomainError> {
    Ok(posts_adapter::delete_post(conn, post_id).await? > 0)
}

pub async fn count_posts<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(posts_adapter::count_posts(conn).await?)
}

// Conversions between SeaORM models and domain models

impl From<crate::entities::posts::Model> for Post {
    fn from(model: crate::entities::posts::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author_id: model.author_id,
            created_at: model.created_at,
        }
    }
}

impl From<PostSummaryRow> for PostSummary {
    fn from(row: PostSummaryRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
        }
    }
}
