use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use super::provided;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::repos::authors::{self as authors_repo, Author};
use crate::repos::posts::{self as posts_repo, PostSummary};

pub const AUTHOR_FIELDS_REQUIRED: &str = "Name, email, and bio are required";
pub const EMAIL_IN_USE: &str = "Email is already in use";
pub const AUTHOR_NOT_FOUND: &str = "Author not found";
pub const NO_DATA_FOUND: &str = "No data found";

/// Raw author fields as received from a client.
#[derive(Debug, Clone, Default)]
pub struct AuthorInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
}

/// One author and the id/title/content of each of their posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorWithPosts {
    pub author: Author,
    pub posts: Vec<PostSummary>,
}

/// Author domain service.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthorService;

impl AuthorService {
    /// All authors ordered by id. No rows is reported as an empty collection.
    pub async fn list_authors<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Author>, AppError> {
        let authors = authors_repo::list_authors(conn).await?;
        if authors.is_empty() {
            return Err(AppError::empty_collection(NO_DATA_FOUND));
        }
        debug!(count = authors.len(), "authors.listed");
        Ok(authors)
    }

    /// Validate, reject a taken email, insert. Returns the new author id.
    ///
    /// The unique index on `authors.email` catches a concurrent insert that
    /// slips past the pre-check; it surfaces as the same conflict.
    pub async fn create_author<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        input: &AuthorInput,
    ) -> Result<i64, AppError> {
        let (Some(name), Some(email), Some(bio)) = (
            provided(input.name.as_deref()),
            provided(input.email.as_deref()),
            provided(input.bio.as_deref()),
        ) else {
            return Err(DomainError::validation(AUTHOR_FIELDS_REQUIRED).into());
        };

        if authors_repo::email_exists(conn, email).await? {
            info!(email = %Redacted(email), "author.email_taken");
            return Err(DomainError::conflict(ConflictKind::UniqueEmail, EMAIL_IN_USE).into());
        }

        let author_id = authors_repo::create_author(conn, name, email, bio).await?;
        info!(author_id, email = %Redacted(email), "author.created");
        Ok(author_id)
    }

    /// One author with their posts. An author without posts gets an empty list.
    pub async fn get_author_with_posts<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        author_id: i64,
    ) -> Result<AuthorWithPosts, AppError> {
        let author = authors_repo::find_by_id(conn, author_id)
            .await?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Author, AUTHOR_NOT_FOUND))?;

        let posts = posts_repo::list_summaries_by_author(conn, author_id).await?;
        Ok(AuthorWithPosts { author, posts })
    }
}
