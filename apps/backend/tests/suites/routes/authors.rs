use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_shape::{assert_error_from_service_response, DetailKey};
use blog_backend::db::require_db;
use blog_backend::AppError;
use serde_json::json;

use crate::common::json_body;
use crate::support::factory::{create_test_author, create_test_author_with_email, create_test_post};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn list_authors_empty_is_no_data_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/authors").to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_from_service_response(
        resp,
        "NO_DATA_FOUND",
        StatusCode::NOT_FOUND,
        Some(("No data found", DetailKey::Message)),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn list_authors_returns_all_in_id_order() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?.clone();
    let first = create_test_author_with_email(&db, "Ada", "ada@example.com").await?;
    let second = create_test_author(&db, "Grace").await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/authors").to_request();
    let body = json_body(test::call_service(&app, req).await, 200).await;

    let authors = body.as_array().expect("array body");
    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0]["id"], first);
    assert_eq!(authors[0]["name"], "Ada");
    assert_eq!(authors[0]["email"], "ada@example.com");
    assert_eq!(authors[0]["bio"], "Writes tests");
    assert_eq!(authors[1]["id"], second);
    Ok(())
}

#[actix_web::test]
async fn create_author_acknowledges_without_returning_row() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(json!({"name": "Ada", "email": "ada@example.com", "bio": "Analyst"}))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, 201).await;
    assert_eq!(body, json!({"message": "Author added successfully"}));

    let req = test::TestRequest::get().uri("/authors").to_request();
    let body = json_body(test::call_service(&app, req).await, 200).await;
    assert_eq!(body[0]["name"], "Ada");
    assert_eq!(body[0]["bio"], "Analyst");
    Ok(())
}

#[actix_web::test]
async fn create_author_requires_every_field() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let cases = [
        json!({}),
        json!({"email": "a@example.com", "bio": "b"}),
        json!({"name": "Ada", "bio": "b"}),
        json!({"name": "Ada", "email": "a@example.com"}),
        json!({"name": "", "email": "a@example.com", "bio": "b"}),
        json!({"name": "Ada", "email": "", "bio": "b"}),
        json!({"name": "Ada", "email": "a@example.com", "bio": ""}),
        json!({"name": null, "email": "a@example.com", "bio": "b"}),
    ];

    for payload in cases {
        let req = test::TestRequest::post()
            .uri("/authors")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_from_service_response(
            resp,
            "VALIDATION_ERROR",
            StatusCode::BAD_REQUEST,
            Some(("Name, email, and bio are required", DetailKey::Error)),
        )
        .await;
    }

    // Nothing was inserted
    let req = test::TestRequest::get().uri("/stats/posts/count").to_request();
    let body = json_body(test::call_service(&app, req).await, 200).await;
    assert_eq!(body["total_authors"], 0);
    Ok(())
}

#[actix_web::test]
async fn create_author_accepts_whitespace_values() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(json!({"name": " ", "email": "space@example.com", "bio": "\t"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    Ok(())
}

#[actix_web::test]
async fn create_author_with_taken_email_conflicts() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?.clone();
    create_test_author_with_email(&db, "Ada", "ada@example.com").await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    // Other fields differ; the email alone decides
    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(json!({"name": "Someone Else", "email": "ada@example.com", "bio": "Other"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_from_service_response(
        resp,
        "UNIQUE_EMAIL",
        StatusCode::BAD_REQUEST,
        Some(("Email is already in use", DetailKey::Error)),
    )
    .await;

    let req = test::TestRequest::get().uri("/authors").to_request();
    let body = json_body(test::call_service(&app, req).await, 200).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[actix_web::test]
async fn get_author_includes_post_summaries() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?.clone();
    let ada = create_test_author(&db, "Ada").await?;
    let grace = create_test_author(&db, "Grace").await?;
    let post_id = create_test_post(&db, ada, "Notes on the Engine").await?;
    create_test_post(&db, grace, "Compilers").await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri(&format!("/authors/{ada}"))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, 200).await;

    assert_eq!(body["id"], ada);
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["bio"], "Writes tests");
    let posts = body["posts"].as_array().expect("posts array");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["id"], post_id);
    assert_eq!(posts[0]["title"], "Notes on the Engine");
    assert!(posts[0]["content"].is_string());
    assert!(posts[0].get("author_id").is_none());
    assert!(posts[0].get("created_at").is_none());
    Ok(())
}

#[actix_web::test]
async fn get_author_without_posts_has_empty_list() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?.clone();
    let ada = create_test_author(&db, "Ada").await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri(&format!("/authors/{ada}"))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, 200).await;
    assert_eq!(body["posts"], json!([]));
    Ok(())
}

#[actix_web::test]
async fn get_unknown_author_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/authors/4242").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_from_service_response(
        resp,
        "AUTHOR_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some(("Author not found", DetailKey::Error)),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn non_integer_author_id_does_not_match() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/authors/ada").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}
