use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use url::Url;

use crate::api::models::Envelope;
use crate::api::{ApiError, Project, ProjectSource};
use crate::config::ApiConfig;

const PROJECTS_PATH: &str = "/api/v1/projects";

const UA: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the projects API. Issues a single outbound read per
/// fetch; no retries, no writes.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::new(Url::parse(&config.url)?))
    }
}

#[async_trait]
impl ProjectSource for ApiClient {
    #[tracing::instrument(skip(self), fields(base = %self.base_url))]
    async fn fetch_published(&self) -> Result<Vec<Project>, ApiError> {
        let url = self.base_url.join(PROJECTS_PATH)?;

        let response = self
            .client
            .get(url)
            .query(&[("status", "published")])
            .header(USER_AGENT, UA)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.text().await?;
        let envelope: Envelope = serde_json::from_str(&body)?;
        let projects = envelope.into_projects();

        tracing::debug!(count = projects.len(), "fetched published projects");
        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(Url::parse(&server.uri()).unwrap())
    }

    #[tokio::test]
    async fn returns_published_projects() {
        let mock_server = MockServer::start().await;

        let response_body = serde_json::json!({
            "data": {
                "projects": [{
                    "id": "p1",
                    "title": "Signal Atlas",
                    "slug": "signal-atlas",
                    "status": "published",
                    "category": "Web"
                }]
            }
        });

        Mock::given(method("GET"))
            .and(path("/api/v1/projects"))
            .and(query_param("status", "published"))
            .and(header("User-Agent", UA))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let projects = client.fetch_published().await.unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "p1");
        assert_eq!(projects[0].slug, "signal-atlas");
    }

    #[tokio::test]
    async fn missing_projects_field_is_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {}
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let projects = client.fetch_published().await.unwrap();

        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn missing_data_field_is_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let projects = client.fetch_published().await.unwrap();

        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_a_status_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/projects"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let error = client.fetch_published().await.unwrap_err();

        assert!(matches!(
            error,
            ApiError::Status(status) if status == reqwest::StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_a_body_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let error = client.fetch_published().await.unwrap_err();

        assert!(matches!(error, ApiError::Body(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        // Port 9 (discard) is not listening in the test environment.
        let client = ApiClient::new(Url::parse("http://127.0.0.1:9").unwrap());
        let error = client.fetch_published().await.unwrap_err();

        assert!(matches!(error, ApiError::Http(_)));
    }

    #[test]
    fn from_config_rejects_invalid_url() {
        let config = ApiConfig {
            url: "not a url".to_string(),
            revalidate: 60,
        };

        assert!(matches!(
            ApiClient::from_config(&config),
            Err(ApiError::Url(_))
        ));
    }

    #[test]
    fn from_config_accepts_default() {
        let client = ApiClient::from_config(&ApiConfig::default()).unwrap();
        assert_eq!(client.base_url.as_str(), "http://localhost:3000/");
    }
}
