pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use axum::{routing::get, Router};
use reqwest::Client;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::{blob_service::BlobService, question_service::QuestionService};

#[derive(Clone)]
pub struct AppState {
    pub question_service: QuestionService,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap();

        let blob_service = BlobService::new(
            http_client,
            config.blob_store_url.clone(),
            config.blob_read_write_token.clone(),
        );
        let question_service = QuestionService::new(blob_service);

        Self { question_service }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/api/questions",
            get(routes::questions::get_questions)
                .post(routes::questions::create_question)
                .delete(routes::questions::delete_question)
                .options(routes::questions::preflight)
                .fallback(routes::questions::method_not_supported),
        )
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::cors::cors_headers))
        .layer(TraceLayer::new_for_http())
}
