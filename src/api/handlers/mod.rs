use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::StoreError;
use crate::models::*;
use crate::store::ArticleStore;

// ============================================================
// Error Handling
// ============================================================

/// An error response: status code plus a `{"error": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Validation and lookup failures go to the client verbatim. Anything else is
/// logged in full and the client only sees a generic message.
impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Validation(msg) => {
                tracing::warn!("Validation error: {}", msg);
                Self::new(StatusCode::BAD_REQUEST, msg)
            }
            StoreError::NotFound => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            StoreError::Persistence(_) => {
                tracing::error!("Internal error: {}", e);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!("Rejected query string: {}", rejection.body_text());
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

// ============================================================
// Articles
// ============================================================

pub async fn create_article(
    State(store): State<ArticleStore>,
    payload: Result<Json<CreateArticleInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateArticleResponse>), ApiError> {
    let Json(input) = payload?;
    let article = store.insert(input)?;
    Ok((
        StatusCode::CREATED,
        Json(CreateArticleResponse {
            message: "Article added".to_string(),
            article,
        }),
    ))
}

pub async fn search_articles(
    State(store): State<ArticleStore>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(query) = query?;
    let results = store.search(&query)?;
    Ok(Json(SearchResponse { results }))
}

/// Ids that do not parse as integers cannot name an article, so they are
/// answered the same way as unknown ids. `1abc` is not read as `1`.
pub async fn get_article(
    State(store): State<ArticleStore>,
    Path(id): Path<String>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let id: u64 = id.parse().map_err(|_| StoreError::NotFound)?;
    let article = store.get(id)?;
    Ok(Json(ArticleResponse { article }))
}
