use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use tracing::debug;
use crate::errors::{Result, VetsError};
use crate::transport::{GetRequest, Transport, TransportResponse};

/// Supplies the bearer token for outgoing requests, if there is one.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> Result<Option<String>>;
}

/// A token fixed at startup.
#[derive(Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: Option<String>) -> Self {
        Self(token.filter(|t| !t.is_empty()))
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Result<Option<String>> {
        Ok(self.0.clone())
    }
}

/// Wraps a transport and sets `Authorization: Bearer <token>` on every request.
///
/// Requests pass through untouched when the provider has no token.
pub struct AuthInterceptor<T, P> {
    inner: T,
    tokens: P,
}

impl<T, P> AuthInterceptor<T, P>
where
    T: Transport,
    P: TokenProvider,
{
    pub fn new(inner: T, tokens: P) -> Self {
        Self { inner, tokens }
    }
}

#[async_trait]
impl<T, P> Transport for AuthInterceptor<T, P>
where
    T: Transport,
    P: TokenProvider,
{
    async fn get(&self, mut request: GetRequest) -> Result<TransportResponse> {
        match self.tokens.token().await? {
            Some(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| VetsError::InvalidToken)?;
                value.set_sensitive(true);
                request.headers.insert(AUTHORIZATION, value);
            }
            None => {
                debug!("No auth token available, sending {} unauthenticated", request.url);
            }
        }

        self.inner.get(request).await
    }
}
