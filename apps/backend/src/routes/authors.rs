use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError};

use super::MessageResponse;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::LenientJson;
use crate::repos::authors::Author;
use crate::repos::posts::PostSummary;
use crate::services::{AuthorInput, AuthorService, AuthorWithPosts};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub bio: String,
}

impl From<Author> for AuthorResponse {
    fn from(value: Author) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            bio: value.bio,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostSummaryResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl From<PostSummary> for PostSummaryResponse {
    fn from(value: PostSummary) -> Self {
        Self {
            id: value.id,
            title: value.title,
            content: value.content,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthorWithPostsResponse {
    #[serde(flatten)]
    pub author: AuthorResponse,
    pub posts: Vec<PostSummaryResponse>,
}

impl From<AuthorWithPosts> for AuthorWithPostsResponse {
    fn from(value: AuthorWithPosts) -> Self {
        Self {
            author: value.author.into(),
            posts: value.posts.into_iter().map(Into::into).collect(),
        }
    }
}

/// Every field is optional so that a missing field reaches the service's
/// presence check instead of failing deserialization. A value that is not a
/// string reads as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct CreateAuthorRequest {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub name: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub email: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub bio: Option<String>,
}

impl From<CreateAuthorRequest> for AuthorInput {
    fn from(value: CreateAuthorRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            bio: value.bio,
        }
    }
}

async fn list_authors(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let authors = with_txn(&app_state, |txn| {
        Box::pin(async move { AuthorService.list_authors(txn).await })
    })
    .await?;

    let body: Vec<AuthorResponse> = authors.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn create_author(
    app_state: web::Data<AppState>,
    body: LenientJson<CreateAuthorRequest>,
) -> Result<HttpResponse, AppError> {
    let input = AuthorInput::from(body.into_inner());
    with_txn(&app_state, move |txn| {
        Box::pin(async move { AuthorService.create_author(txn, &input).await })
    })
    .await?;

    Ok(HttpResponse::Created().json(MessageResponse::new("Author added successfully")))
}

async fn get_author_with_posts(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let author_id = path.into_inner();
    let author = with_txn(&app_state, move |txn| {
        Box::pin(async move { AuthorService.get_author_with_posts(txn, author_id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(AuthorWithPostsResponse::from(author)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_authors))
        .route("", web::post().to(create_author))
        .route("/{id}", web::get().to(get_author_with_posts));
}
