//! Authenticated HTTP client for the Asana REST API
//!
//! Provides the [`ApiRequest`] capability trait that resource bindings call
//! through, plus the concrete [`Client`] implementation over `reqwest`.
//! Every call is exactly one network round trip: no retries, no caching,
//! no rate limiting. Timeout policy is whatever `reqwest` defaults to.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::errors::{ApiError, Result};
use crate::request::{NextPage, RequestBody, RequestOptions, ResponseBody};

/// Capability trait for issuing Asana API requests
///
/// Resource bindings depend on this trait rather than on [`Client`] so they
/// can be exercised against a substitute implementation without a network.
#[async_trait::async_trait]
pub trait ApiRequest: Send + Sync {
    /// Fetch a single resource
    async fn get<T>(&self, path: &str, opts: &RequestOptions) -> Result<T>
    where
        T: DeserializeOwned + Send;

    /// Fetch a list of resources plus the continuation cursor
    async fn get_list<T>(
        &self,
        path: &str,
        opts: &RequestOptions,
    ) -> Result<(Vec<T>, Option<NextPage>)>
    where
        T: DeserializeOwned + Send;

    /// Create a resource; the body is wrapped in the `data` envelope
    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync;

    /// Update a resource; the body is wrapped in the `data` envelope
    async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync;
}

/// Asana REST API client
///
/// Authenticates with a personal access token via the `Authorization: Bearer`
/// header. Stateless between calls; cloning is cheap and the client is safe
/// to share across tasks, both inherited from `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Create a new client from configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { http, config })
    }

    /// Create a new client from the environment
    ///
    /// See [`ClientConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// The base URL this client targets
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Issue one request and decode the response envelope
    async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&B>,
    ) -> Result<ResponseBody<T>>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        let url = format!("{}{}", self.config.base_url, path);

        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .bearer_auth(&self.config.access_token);

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(payload) = body {
            request = request.json(&RequestBody { data: payload });
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::from_response(status.as_u16(), &text));
        }

        Ok(response.json::<ResponseBody<T>>().await?)
    }
}

#[async_trait::async_trait]
impl ApiRequest for Client {
    async fn get<T>(&self, path: &str, opts: &RequestOptions) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        let body = self
            .send::<T, ()>(Method::GET, path, &opts.to_query(), None)
            .await?;
        Ok(body.data)
    }

    async fn get_list<T>(
        &self,
        path: &str,
        opts: &RequestOptions,
    ) -> Result<(Vec<T>, Option<NextPage>)>
    where
        T: DeserializeOwned + Send,
    {
        let body = self
            .send::<Vec<T>, ()>(Method::GET, path, &opts.to_query(), None)
            .await?;
        Ok((body.data, body.next_page))
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        let body = self.send(Method::POST, path, &[], Some(body)).await?;
        Ok(body.data)
    }

    async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        let body = self.send(Method::PUT, path, &[], Some(body)).await?;
        Ok(body.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = Client::new(ClientConfig::new("pat-123")).unwrap();
        assert_eq!(client.base_url(), crate::config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_is_cloneable_for_concurrent_use() {
        let client = Client::new(ClientConfig::new("pat-123")).unwrap();
        let cloned = client.clone();
        assert_eq!(client.base_url(), cloned.base_url());
    }
}
