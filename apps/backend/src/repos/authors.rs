//! Author repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::authors_sea::{self as authors_adapter, AuthorCreate};
use crate::errors::domain::DomainError;

/// Author domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub bio: String,
}

pub async fn list_authors<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Author>, DomainError> {
    let rows = authors_adapter::list_authors(conn).await?;
    Ok(rows.into_iter().map(Author::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author_id: i64,
) -> Result<Option<Author>, DomainError> {
    let author = authors_adapter::find_by_id(conn, author_id).await?;
    Ok(author.map(Author::from))
}

pub async fn email_exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<bool, DomainError> {
    Ok(authors_adapter::find_by_email(conn, email).await?.is_some())
}

pub async fn create_author<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    email: &str,
    bio: &str,
) -> Result<i64, DomainError> {
    let id = authors_adapter::create_author(conn, AuthorCreate::new(name, email, bio)).await?;
    Ok(id)
}

pub async fn count_authors<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(authors_adapter::count_authors(conn).await?)
}

impl From<crate::entities::authors::Model> for Author {
    fn from(model: crate::entities::authors::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            bio: model.bio,
        }
    }
}
