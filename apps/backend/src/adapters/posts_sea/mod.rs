//! SeaORM adapter for post repository.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::{authors, posts};

pub mod dto;

pub use dto::{PostCreate, PostSummaryRow, PostUpdate};

// Newest first; id breaks ties between rows sharing a timestamp.
fn newest_first(select: sea_orm::Select<posts::Entity>) -> sea_orm::Select<posts::Entity> {
    select
        .order_by_desc(posts::Column::CreatedAt)
        .order_by_desc(posts::Column::Id)
}

pub async fn list_posts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<posts::Model>, sea_orm::DbErr> {
    newest_first(posts::Entity::find()).all(conn).await
}

pub async fn list_by_author<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author_id: i64,
) -> Result<Vec<posts::Model>, sea_orm::DbErr> {
    newest_first(posts::Entity::find().filter(posts::Column::AuthorId.eq(author_id)))
        .all(conn)
        .await
}

pub async fn list_summaries_by_author<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author_id: i64,
) -> Result<Vec<PostSummaryRow>, sea_orm::DbErr> {
    newest_first(posts::Entity::find().filter(posts::Column::AuthorId.eq(author_id)))
        .select_only()
        .columns([posts::Column::Id, posts::Column::Title, posts::Column::Content])
        .into_model::<PostSummaryRow>()
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<Option<posts::Model>, sea_orm::DbErr> {
    posts::Entity::find_by_id(post_id).one(conn).await
}

/// Post joined with its author on `author_id`.
pub async fn find_with_author<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<Option<(posts::Model, Option<authors::Model>)>, sea_orm::DbErr> {
    posts::Entity::find_by_id(post_id)
        .find_also_related(authors::Entity)
        .one(conn)
        .await
}

/// Insert a post and return the generated id.
pub async fn create_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PostCreate,
) -> Result<i64, sea_orm::DbErr> {
    let post_active = posts::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        content: Set(dto.content),
        author_id: Set(dto.author_id),
        created_at: NotSet,
    };

    let res = posts::Entity::insert(post_active).exec(conn).await?;
    Ok(res.last_insert_id)
}

/// Apply the supplied columns of `dto` and return the number of rows touched.
pub async fn update_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PostUpdate,
) -> Result<u64, sea_orm::DbErr> {
    if dto.is_empty() {
        return Ok(0);
    }

    let mut update = posts::Entity::update_many().filter(posts::Column::Id.eq(dto.id));
    if let Some(title) = dto.title {
        update = update.col_expr(posts::Column::Title, Expr::value(title));
    }
    if let Some(content) = dto.content {
        update = update.col_expr(posts::Column::Content, Expr::value(content));
    }

    let res = update.exec(conn).await?;
    Ok(res.rows_affected)
}

pub async fn delete_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = posts::Entity::delete_by_id(post_id).exec(conn).await?;
    Ok(res.rows_affected)
}

pub async fn count_posts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    posts::Entity::find().count(conn).await
}
