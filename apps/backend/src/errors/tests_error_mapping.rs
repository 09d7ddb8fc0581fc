// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use actix_web::ResponseError;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation("bad field");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_unique_email_conflict_to_400() {
    let unique = DomainError::conflict(ConflictKind::UniqueEmail, "Email is already in use");
    let app: AppError = unique.into();
    assert_eq!(app.code().as_str(), "UNIQUE_EMAIL");
    assert_eq!(app.status().as_u16(), 400);

    let other = DomainError::conflict(ConflictKind::Other("Unique".into()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
}

#[test]
fn maps_not_found_by_entity() {
    let author: AppError = DomainError::not_found(NotFoundKind::Author, "Author not found").into();
    assert_eq!(author.code(), ErrorCode::AuthorNotFound);
    assert_eq!(author.status().as_u16(), 404);

    let post: AppError = DomainError::not_found(NotFoundKind::Post, "Post not found").into();
    assert_eq!(post.code(), ErrorCode::PostNotFound);

    let other: AppError = DomainError::not_found(NotFoundKind::Other("Row".into()), "x").into();
    assert_eq!(other.code(), ErrorCode::NotFound);
}

#[test]
fn maps_infra() {
    let t: AppError = DomainError::infra(InfraErrorKind::Timeout, "timeout").into();
    assert_eq!(t.code().as_str(), "DB_TIMEOUT");
    assert_eq!(t.status().as_u16(), 504);

    let down: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(down.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(down.status().as_u16(), 503);

    let corr: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad").into();
    assert_eq!(corr.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(corr.status().as_u16(), 500);

    let other: AppError = DomainError::infra(InfraErrorKind::Other("x".into()), "other").into();
    assert_eq!(other.code().as_str(), "INTERNAL_ERROR");
    assert_eq!(other.status().as_u16(), 500);
}

#[test]
fn empty_collection_is_distinct_from_not_found() {
    let empty = AppError::empty_collection("No data found");
    assert!(matches!(empty, AppError::EmptyCollection { .. }));
    assert_eq!(empty.code(), ErrorCode::NoDataFound);
    assert_eq!(empty.status().as_u16(), 404);
}

#[actix_web::test]
async fn error_body_uses_message_key_for_empty_collection() {
    let resp = AppError::empty_collection("No data found").error_response();
    let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["message"], "No data found");
    assert!(json.get("error").is_none());
    assert_eq!(json["code"], "NO_DATA_FOUND");
}

#[actix_web::test]
async fn error_body_uses_error_key_and_trace_header() {
    let resp = AppError::not_found(ErrorCode::PostNotFound, "Post not found").error_response();
    let header = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "Post not found");
    assert!(json.get("message").is_none());
    assert_eq!(json["code"], "POST_NOT_FOUND");
    assert_eq!(header.as_deref(), json["trace_id"].as_str());
}
