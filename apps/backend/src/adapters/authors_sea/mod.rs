//! SeaORM adapter for author repository.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::authors;

pub mod dto;

pub use dto::AuthorCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn list_authors<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<authors::Model>, sea_orm::DbErr> {
    authors::Entity::find()
        .order_by_asc(authors::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author_id: i64,
) -> Result<Option<authors::Model>, sea_orm::DbErr> {
    authors::Entity::find_by_id(author_id).one(conn).await
}

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<authors::Model>, sea_orm::DbErr> {
    authors::Entity::find()
        .filter(authors::Column::Email.eq(email))
        .one(conn)
        .await
}

/// Insert an author and return the generated id.
pub async fn create_author<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AuthorCreate,
) -> Result<i64, sea_orm::DbErr> {
    let author_active = authors::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        email: Set(dto.email),
        bio: Set(dto.bio),
    };

    let res = authors::Entity::insert(author_active).exec(conn).await?;
    Ok(res.last_insert_id)
}

pub async fn count_authors<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    authors::Entity::find().count(conn).await
}
