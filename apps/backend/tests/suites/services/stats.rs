use blog_backend::db::require_db;
use blog_backend::services::{PostCounts, StatsService};
use blog_backend::AppError;

use crate::support::factory::{create_test_author, create_test_post};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn counts_tables_independently() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    assert_eq!(
        StatsService.counts(db).await?,
        PostCounts {
            total_posts: 0,
            total_authors: 0
        }
    );

    let ada = create_test_author(db, "Ada").await?;
    create_test_author(db, "Grace").await?;
    create_test_post(db, ada, "one").await?;

    assert_eq!(
        StatsService.counts(db).await?,
        PostCounts {
            total_posts: 1,
            total_authors: 2
        }
    );
    Ok(())
}
