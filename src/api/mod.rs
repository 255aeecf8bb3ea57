pub mod cache;
pub mod client;
pub mod models;


use async_trait::async_trait;

pub use cache::Revalidated;
pub use client::ApiClient;
pub use models::{category_labels, Project};

/// Shared handle to the revalidating projects source, provided as leptos
/// context by the server.
pub type ProjectsHandle = std::sync::Arc<Revalidated<ApiClient>>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Fetch the projects currently published on the backing API.
    async fn fetch_published(&self) -> Result<Vec<Project>, ApiError>;
}
