use std::sync::Arc;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use crate::errors::Result;

pub mod auth_interceptor;
pub mod reqwest_transport;

pub use auth_interceptor::{AuthInterceptor, StaticToken, TokenProvider};
pub use reqwest_transport::ReqwestTransport;

/// An outgoing GET request before it reaches the network.
#[derive(Clone, Debug, Default)]
pub struct GetRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
}

impl GetRequest {
    pub fn new(url: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            url: url.into(),
            query,
            headers: HeaderMap::new(),
        }
    }
}

/// Raw response; status and body are left for the caller to interpret.
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Sends GET requests. Implementations may decorate one another.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, request: GetRequest) -> Result<TransportResponse>;
}

#[async_trait]
impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    async fn get(&self, request: GetRequest) -> Result<TransportResponse> {
        (**self).get(request).await
    }
}
