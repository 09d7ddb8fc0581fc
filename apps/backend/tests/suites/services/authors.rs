use backend_test_support::unique_helpers::unique_email;
use blog_backend::db::require_db;
use blog_backend::db::txn::with_txn;
use blog_backend::services::{AuthorInput, AuthorService};
use blog_backend::{AppError, ErrorCode};
use time::macros::datetime;

use crate::support::factory::{create_test_author, create_test_post_at};
use crate::support::test_state::build_test_state;

fn input(name: &str, email: &str, bio: &str) -> AuthorInput {
    AuthorInput {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        bio: Some(bio.to_string()),
    }
}

#[tokio::test]
async fn create_then_list_authors() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let email = unique_email("ada");
            let id = AuthorService
                .create_author(txn, &input("Ada", &email, "Analyst"))
                .await?;
            assert!(id > 0);

            let authors = AuthorService.list_authors(txn).await?;
            assert_eq!(authors.len(), 1);
            assert_eq!(authors[0].id, id);
            assert_eq!(authors[0].name, "Ada");
            assert_eq!(authors[0].email, email);
            assert_eq!(authors[0].bio, "Analyst");
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn list_authors_on_empty_store_is_empty_collection() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let err = AuthorService.list_authors(db).await.unwrap_err();
    assert!(matches!(err, AppError::EmptyCollection { .. }));
    assert_eq!(err.code(), ErrorCode::NoDataFound);
    assert_eq!(err.detail(), "No data found");
    Ok(())
}

#[tokio::test]
async fn create_author_rejects_missing_or_empty_fields() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let cases = [
        AuthorInput::default(),
        AuthorInput {
            bio: None,
            ..input("Ada", "ada@example.com", "b")
        },
        input("", "ada@example.com", "b"),
        input("Ada", "", "b"),
    ];

    for case in &cases {
        let err = AuthorService.create_author(db, case).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError, "{case:?}");
        assert_eq!(err.detail(), "Name, email, and bio are required");
    }
    Ok(())
}

#[tokio::test]
async fn create_author_with_taken_email_is_unique_email() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    AuthorService
        .create_author(db, &input("Ada", "ada@example.com", "b"))
        .await?;
    let err = AuthorService
        .create_author(db, &input("Imposter", "ada@example.com", "other"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::UniqueEmail);
    assert_eq!(err.detail(), "Email is already in use");
    assert_eq!(AuthorService.list_authors(db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn author_with_posts_projects_summaries_newest_first() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let ada = create_test_author(db, "Ada").await?;
    let old = create_test_post_at(db, ada, "old", datetime!(2024-01-01 00:00 UTC)).await?;
    let new = create_test_post_at(db, ada, "new", datetime!(2024-02-01 00:00 UTC)).await?;

    let found = AuthorService.get_author_with_posts(db, ada).await?;
    assert_eq!(found.author.id, ada);
    let ids: Vec<i64> = found.posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![new, old]);
    assert_eq!(found.posts[0].title, "new");
    Ok(())
}

#[tokio::test]
async fn author_with_posts_for_unknown_id_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let err = AuthorService.get_author_with_posts(db, 404).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::AuthorNotFound);
    assert_eq!(err.detail(), "Author not found");
    Ok(())
}
