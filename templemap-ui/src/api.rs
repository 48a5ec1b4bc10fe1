//! Content API client.
//!
//! Two calls: `read` fetches a page node, `create` posts a JSON body.
//! Failures are returned as `ApiError`; callers log them and render nothing.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use templemap_core::PageNode;
use thiserror::Error;

use crate::config::api_endpoint;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Fetch a content node.
pub async fn read(path: &str) -> Result<PageNode, ApiError> {
    let response = Request::get(&api_endpoint(path)).send().await?;
    decode(response).await
}

/// Post a JSON body and decode the JSON response.
pub async fn create<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(&api_endpoint(path))
        .json(body)?
        .send()
        .await?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<T>().await?)
}
