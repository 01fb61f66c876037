mod handlers;

pub use handlers::ApiError;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::ArticleStore;

pub fn create_router(store: ArticleStore) -> Router {
    Router::new()
        .route("/articles", post(handlers::create_article))
        .route("/articles/search", get(handlers::search_articles))
        .route("/articles/{id}", get(handlers::get_article))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(store)
}
