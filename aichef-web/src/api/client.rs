use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::RecipeResponse;
use crate::storage::profile::current_profile;
use crate::storage::{KeyValueStore, LocalStore};

pub const IDENTITY_HEADER: &str = "X-Username";

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsultRequest {
    pub query: String,
    pub context: String,
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConsultResponse {
    pub reply: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Header attached to every request: the profile name as stored right now.
pub fn identity_header<S: KeyValueStore>(store: &S) -> (&'static str, String) {
    (IDENTITY_HEADER, header_safe(&current_profile(store)))
}

/// Header values must be ISO-8859-1 or the browser rejects the request, so
/// anything beyond printable ASCII is sent percent-encoded.
fn header_safe(value: &str) -> String {
    if value.bytes().all(|b| (0x20..0x7f).contains(&b)) {
        value.to_string()
    } else {
        urlencoding::encode(value).into_owned()
    }
}

/// Human-readable message for a failed response body.
fn status_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.detail;
    }
    let body = body.trim();
    if body.is_empty() {
        format!("Request failed with status {}", status)
    } else {
        body.to_string()
    }
}

/// Thin wrapper over `gloo_net` that tags requests with the active profile.
#[derive(Debug, Clone)]
pub struct ApiClient<S = LocalStore> {
    config: ClientConfig,
    store: S,
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn new(config: ClientConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn with_identity(&self, builder: RequestBuilder) -> RequestBuilder {
        let (name, value) = identity_header(&self.store);
        builder.header(name, &value)
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status, url = %response.url(), "API request failed");
            return Err(ApiError::Status {
                status,
                message: status_message(status, &body),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.url(path);
        debug!(%url, "GET");
        let response = self.with_identity(Request::get(&url)).send().await?;
        Self::read(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.config.url(path);
        debug!(%url, "POST");
        let request = self
            .with_identity(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request.send().await?;
        Self::read(response).await
    }

    pub async fn search(&self, query: &str, limit: usize) -> Result<RecipeResponse, ApiError> {
        let request = SearchRequest {
            query: query.to_string(),
            limit,
        };
        self.post_json("/api/search", &request).await
    }

    pub async fn consult(&self, request: &ConsultRequest) -> Result<ConsultResponse, ApiError> {
        self.post_json("/api/consult", request).await
    }
}
