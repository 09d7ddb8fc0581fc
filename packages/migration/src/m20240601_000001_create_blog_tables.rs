use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;
use sea_orm_migration::sea_query::{ColumnDef, Expr, ForeignKeyAction, Index, SimpleExpr, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Authors {
    Table,
    Id,
    Name,
    Email,
    Bio,
}

#[derive(Iden)]
enum Posts {
    Table,
    Id,
    Title,
    Content,
    AuthorId,
    CreatedAt,
}

/// Insert-time default for `posts.created_at`.
///
/// SQLite has no native timestamptz; store RFC 3339 text with millisecond
/// precision so rows written by the database clock sort and decode the same
/// way as rows written by the driver.
fn created_at_default(backend: DatabaseBackend) -> Result<SimpleExpr, DbErr> {
    match backend {
        DatabaseBackend::Postgres => Ok(Expr::current_timestamp().into()),
        DatabaseBackend::Sqlite => Ok(Expr::cust(
            "(strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))",
        )),
        _ => Err(DbErr::Custom("Unsupported database backend".into())),
    }
}

/// Generated 64-bit primary key.
///
/// SQLite only accepts AUTOINCREMENT on a column declared exactly `INTEGER`,
/// which is already 64-bit there.
fn id_column<T: IntoIden>(backend: DatabaseBackend, name: T) -> ColumnDef {
    let mut col = ColumnDef::new(name);
    match backend {
        DatabaseBackend::Sqlite => col.integer(),
        _ => col.big_integer(),
    };
    col.not_null().primary_key().auto_increment().to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        // authors
        manager
            .create_table(
                Table::create()
                    .table(Authors::Table)
                    .if_not_exists()
                    .col(id_column(backend, Authors::Id))
                    .col(ColumnDef::new(Authors::Name).string().not_null())
                    .col(ColumnDef::new(Authors::Email).string().not_null())
                    .col(ColumnDef::new(Authors::Bio).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_authors_email")
                    .table(Authors::Table)
                    .col(Authors::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // posts
        let created_at_default = created_at_default(backend)?;
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(id_column(backend, Posts::Id))
                    .col(ColumnDef::new(Posts::Title).string().not_null())
                    .col(ColumnDef::new(Posts::Content).text().not_null())
                    .col(ColumnDef::new(Posts::AuthorId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Posts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(created_at_default),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_author_id")
                            .from(Posts::Table, Posts::AuthorId)
                            .to(Authors::Table, Authors::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_posts_author_id")
                    .table(Posts::Table)
                    .col(Posts::AuthorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_posts_created_at")
                    .table(Posts::Table)
                    .col(Posts::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_posts_created_at")
                    .table(Posts::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_posts_author_id")
                    .table(Posts::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Posts::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_authors_email")
                    .table(Authors::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Authors::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
