use blog_backend::db::require_db;
use blog_backend::services::{PostChanges, PostInput, PostService};
use blog_backend::{AppError, ErrorCode};
use time::macros::datetime;

use crate::support::factory::{create_test_author, create_test_post, create_test_post_at};
use crate::support::test_state::build_test_state;

fn changes(title: Option<&str>, content: Option<&str>) -> PostChanges {
    PostChanges {
        title: title.map(str::to_string),
        content: content.map(str::to_string),
    }
}

#[tokio::test]
async fn create_post_and_read_it_back_with_author() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let ada = create_test_author(db, "Ada").await?;

    let post_id = PostService
        .create_post(
            db,
            &PostInput {
                title: Some("Notes".into()),
                content: Some("On the engine".into()),
                author_id: Some(ada),
            },
        )
        .await?;

    let found = PostService.get_post(db, post_id).await?;
    assert_eq!(found.post.id, post_id);
    assert_eq!(found.post.title, "Notes");
    assert_eq!(found.post.content, "On the engine");
    assert_eq!(found.post.author_id, ada);
    assert_eq!(found.author.id, ada);
    assert_eq!(found.author.name, "Ada");
    Ok(())
}

#[tokio::test]
async fn create_post_validates_before_author_lookup() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    // Author 0 counts as missing even though no author exists at all
    let err = PostService
        .create_post(
            db,
            &PostInput {
                title: Some("t".into()),
                content: Some("c".into()),
                author_id: Some(0),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);
    assert_eq!(err.detail(), "Title, content, and author_id are required");

    let err = PostService
        .create_post(
            db,
            &PostInput {
                title: Some("t".into()),
                content: Some("c".into()),
                author_id: Some(12),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::AuthorNotFound);
    Ok(())
}

#[tokio::test]
async fn list_posts_orders_newest_first_and_reports_empty() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let err = PostService.list_posts(db).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoDataFound);

    let ada = create_test_author(db, "Ada").await?;
    let a = create_test_post_at(db, ada, "a", datetime!(2024-05-01 00:00 UTC)).await?;
    let b = create_test_post_at(db, ada, "b", datetime!(2024-07-01 00:00 UTC)).await?;
    let c = create_test_post_at(db, ada, "c", datetime!(2024-06-01 00:00 UTC)).await?;

    let ids: Vec<i64> = PostService
        .list_posts(db)
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![b, c, a]);
    Ok(())
}

#[tokio::test]
async fn update_post_applies_partial_changes() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let ada = create_test_author(db, "Ada").await?;
    let post_id = create_test_post(db, ada, "Draft").await?;
    let before = PostService.get_post(db, post_id).await?.post;

    PostService
        .update_post(db, post_id, &changes(None, Some("Body v2")))
        .await?;
    let after = PostService.get_post(db, post_id).await?.post;
    assert_eq!(after.title, "Draft");
    assert_eq!(after.content, "Body v2");
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.author_id, ada);

    PostService
        .update_post(db, post_id, &changes(Some("Final"), Some("")))
        .await?;
    let after = PostService.get_post(db, post_id).await?.post;
    assert_eq!(after.title, "Final");
    assert_eq!(after.content, "Body v2");
    Ok(())
}

#[tokio::test]
async fn update_post_checks_fields_then_existence() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let err = PostService
        .update_post(db, 999, &changes(Some(""), None))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);
    assert_eq!(
        err.detail(),
        "At least one of title or content must be provided"
    );

    let err = PostService
        .update_post(db, 999, &changes(Some("t"), None))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::PostNotFound);
    Ok(())
}

#[tokio::test]
async fn delete_post_is_not_repeatable() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let ada = create_test_author(db, "Ada").await?;
    let post_id = create_test_post(db, ada, "Doomed").await?;

    PostService.delete_post(db, post_id).await?;

    let err = PostService.get_post(db, post_id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::PostNotFound);
    let err = PostService.delete_post(db, post_id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::PostNotFound);
    Ok(())
}

#[tokio::test]
async fn list_posts_by_author_requires_existing_author() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let ada = create_test_author(db, "Ada").await?;
    let grace = create_test_author(db, "Grace").await?;
    create_test_post(db, grace, "Compilers").await?;

    assert!(PostService.list_posts_by_author(db, ada).await?.is_empty());

    let graces = PostService.list_posts_by_author(db, grace).await?;
    assert_eq!(graces.len(), 1);
    assert_eq!(graces[0].author_id, grace);

    let err = PostService
        .list_posts_by_author(db, grace + 100)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::AuthorNotFound);
    Ok(())
}
